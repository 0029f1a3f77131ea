use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::{Color, EffectConfig, Particle, ParticleSet, Viewport};

/// Random spawn point for a burst: anywhere across the width, and between 10% and 70% of
/// the height so hearts neither start at the very top nor at the bottom edge.
pub fn burst_origin<R: Rng>(rng: &mut R, viewport: Viewport) -> (f64, f64) {
    let width = viewport.width as f64;
    let height = viewport.height as f64;

    let x = rng.gen::<f64>() * width;
    let y = height * 0.1 + rng.gen::<f64>() * height * 0.6;

    (x, y)
}

/// Appends one burst of `config.particles_per_burst` hearts at `origin` to `particles`.
///
/// The whole burst shares a single random hue; every particle gets its own heading, speed,
/// fade rate, spin and wind phase.
pub fn spawn<R: Rng>(
    particles: &mut ParticleSet,
    rng: &mut R,
    origin: (f64, f64),
    config: &EffectConfig,
) {
    let color = Color::hsl(
        rng.gen_range(0.0..360.0),
        config.saturation,
        config.lightness,
    );

    particles.extend((0..config.particles_per_burst).map(|_| {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(config.speed.0..=config.speed.1);

        let velocity = (angle.cos() * speed, angle.sin() * speed);

        let mut particle = Particle::new(origin, velocity, color);
        particle.rotation = rng.gen_range(-PI..PI);
        particle.rotation_speed =
            rng.gen_range(config.rotation_speed.0..=config.rotation_speed.1);
        particle.decay = rng.gen_range(config.decay.0..=config.decay.1);
        particle.gravity = config.gravity;
        particle.friction = config.friction;
        particle.drift_phase = rng.gen_range(0.0..TAU);
        particle.drift_speed = rng.gen_range(config.drift_speed.0..=config.drift_speed.1);
        particle
    }));

    tracing::debug!(
        x = origin.0,
        y = origin.1,
        hue = color.hue,
        live = particles.len(),
        "spawned burst"
    );
}
