use std::fmt;

/// Default downward acceleration, pixels per second squared.
pub const DEFAULT_GRAVITY: f64 = 320.0;
/// Default fraction of velocity kept after one second.
pub const DEFAULT_FRICTION: f64 = 0.9;

/// An HSL color, written out as a CSS `hsl()` token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Color {
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        Color {
            hue,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// One ephemeral heart of the celebration.
///
/// Velocities are in pixels per second and rates are per second, so the integration does
/// not depend on the frame rate. The color is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub rotation: f64,
    pub rotation_speed: f64,
    color: Color,
    pub alpha: f64,
    pub decay: f64,
    pub gravity: f64,
    pub friction: f64,
    pub drift_phase: f64,
    pub drift_speed: f64,
}

impl Particle {
    /// A fully opaque particle with default forces, no spin and no drift.
    pub fn new(position: (f64, f64), velocity: (f64, f64), color: Color) -> Particle {
        Particle {
            position,
            velocity,
            rotation: 0.0,
            rotation_speed: 0.0,
            color,
            alpha: 1.0,
            decay: 0.5,
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            drift_phase: 0.0,
            drift_speed: 0.0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}
