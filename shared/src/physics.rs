use crate::Particle;

/// Peak lateral wind acceleration, pixels per second squared.
pub const WIND_STRENGTH: f64 = 20.0;
/// Particles never move faster than this, in pixels per second.
pub const MAX_SPEED: f64 = 500.0;

/// Advances `particle` by `dt` seconds.
///
/// The steps run in a fixed order: wind drift, exponential friction and gravity, speed
/// clamp, then position, rotation and fade.
pub fn update(particle: &mut Particle, dt: f64) {
    particle.drift_phase += particle.drift_speed * dt;
    let wind = particle.drift_phase.sin() * WIND_STRENGTH;
    particle.velocity.0 += wind * dt;

    let friction = particle.friction.powf(dt);
    particle.velocity.0 *= friction;
    particle.velocity.1 = particle.velocity.1 * friction + particle.gravity * dt;

    clamp_speed(&mut particle.velocity, MAX_SPEED);

    particle.position.0 += particle.velocity.0 * dt;
    particle.position.1 += particle.velocity.1 * dt;
    particle.rotation += particle.rotation_speed * dt;
    particle.alpha -= particle.decay * dt;
}

/// Scales `velocity` down so that its magnitude does not exceed `max`, keeping its direction.
pub fn clamp_speed(velocity: &mut (f64, f64), max: f64) {
    let speed = velocity.0.hypot(velocity.1);

    if speed > max {
        let scale = max / speed;
        velocity.0 *= scale;
        velocity.1 *= scale;
    }
}
