//! Heart fireworks for the event-day celebration screen.
//!
//! Bursts of hearts are spawned on a timer, integrated with a clamped variable time step and
//! repainted every frame until they fade out. Drawing and scheduling go through the
//! [`RenderSurface`] and [`Host`] traits so the engine runs the same in the browser and in
//! tests.

mod error;
pub use error::*;

mod config;
pub use config::*;

mod particle;
pub use particle::*;

mod clock;
pub use clock::*;

pub mod physics;

mod live;
pub use live::*;

pub mod burst;

mod surface;
pub use surface::*;

pub mod render;

mod viewport;
pub use viewport::*;

mod host;
pub use host::*;

mod effect;
pub use effect::*;

#[cfg(test)]
mod mock;
