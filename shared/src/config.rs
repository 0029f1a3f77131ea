use serde::{Deserialize, Serialize};

use crate::EffectError;

/// Tunables of the celebration effect.
///
/// Every field has a default, so hosts may pass a partial object (or nothing at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectConfig {
    /// Seed for the burst generator. Hosts pick one at random when absent.
    pub seed: Option<u64>,
    /// Period of the burst trigger timer, in milliseconds.
    pub burst_interval_ms: u32,
    pub particles_per_burst: usize,
    /// Initial speed range in pixels per second.
    pub speed: (f64, f64),
    /// Alpha lost per second.
    pub decay: (f64, f64),
    /// Radians per second.
    pub rotation_speed: (f64, f64),
    /// Angular rate of the lateral wind, radians per second.
    pub drift_speed: (f64, f64),
    /// Downward acceleration in pixels per second squared.
    pub gravity: f64,
    /// Fraction of velocity kept after one second.
    pub friction: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        EffectConfig {
            seed: None,
            burst_interval_ms: 800,
            particles_per_burst: 50,
            speed: (80.0, 260.0),
            decay: (0.35, 0.60),
            rotation_speed: (-0.3, 0.3),
            drift_speed: (1.0, 3.0),
            gravity: 320.0,
            friction: 0.9,
            saturation: 100.0,
            lightness: 70.0,
        }
    }
}

impl EffectConfig {
    /// Checks that every value can be sampled and integrated safely.
    pub fn validate(&self) -> Result<(), EffectError> {
        if self.burst_interval_ms == 0 {
            return Err(invalid("burstIntervalMs must be positive"));
        }

        if self.particles_per_burst == 0 {
            return Err(invalid("particlesPerBurst must be positive"));
        }

        check_range("speed", self.speed)?;
        check_range("decay", self.decay)?;
        check_range("rotationSpeed", self.rotation_speed)?;
        check_range("driftSpeed", self.drift_speed)?;

        // Alpha has to strictly decrease every frame or particles would never expire.
        if self.decay.0 <= 0.0 {
            return Err(invalid("decay must be strictly positive"));
        }

        if !self.gravity.is_finite() {
            return Err(invalid("gravity must be finite"));
        }

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(invalid("friction must lie in (0, 1]"));
        }

        if !(0.0..=100.0).contains(&self.saturation) || !(0.0..=100.0).contains(&self.lightness) {
            return Err(invalid("saturation and lightness are percentages"));
        }

        Ok(())
    }
}

fn check_range(name: &str, (low, high): (f64, f64)) -> Result<(), EffectError> {
    if !low.is_finite() || !high.is_finite() {
        Err(invalid(&format!("{name} bounds must be finite")))
    } else if low > high {
        Err(invalid(&format!("{name} lower bound exceeds upper bound")))
    } else {
        Ok(())
    }
}

fn invalid(message: &str) -> EffectError {
    EffectError::Config(message.to_string())
}
