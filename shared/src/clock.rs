/// Smallest time step handed to the integrator, in seconds.
pub const MIN_DT: f64 = 0.008;
/// Largest time step handed to the integrator, in seconds.
pub const MAX_DT: f64 = 0.033;
/// Time step used for the very first frame.
pub const DEFAULT_DT: f64 = 0.016;

/// Seconds elapsed between two frame timestamps given in milliseconds, clamped to
/// [`MIN_DT`, `MAX_DT`] so that a suspended tab does not explode the integration.
pub fn frame_delta(previous: Option<f64>, current: f64) -> f64 {
    match previous {
        Some(previous) => {
            let elapsed = (current - previous) / 1000.0;

            if elapsed.is_nan() {
                DEFAULT_DT
            } else {
                elapsed.clamp(MIN_DT, MAX_DT)
            }
        }
        None => DEFAULT_DT,
    }
}

/// Remembers the last frame timestamp of a running effect.
#[derive(Debug, Default, Clone)]
pub struct SimulationClock {
    last_timestamp: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> SimulationClock {
        SimulationClock::default()
    }

    pub fn tick(&mut self, timestamp: f64) -> f64 {
        frame_delta(self.last_timestamp.replace(timestamp), timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_uses_default() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.tick(1234.0), DEFAULT_DT);
        assert!((clock.tick(1254.0) - 0.020).abs() < 1e-9);
    }

    #[test]
    fn output_is_always_clamped() {
        assert_eq!(frame_delta(Some(100.0), 100.0), MIN_DT);
        assert_eq!(frame_delta(Some(100.0), 50.0), MIN_DT);
        assert_eq!(frame_delta(Some(0.0), 1500.0), MAX_DT);
        assert_eq!(frame_delta(Some(0.0), 60_000.0), MAX_DT);
        assert_eq!(frame_delta(Some(f64::NAN), 16.0), DEFAULT_DT);

        let mut clock = SimulationClock::new();
        let mut timestamp = 0.0;
        for step in [0.0, 1.0, 4.0, 16.6, 33.0, 250.0, 1200.0, 5.0] {
            timestamp += step;
            let dt = clock.tick(timestamp);
            assert!((MIN_DT..=MAX_DT).contains(&dt), "dt {dt} out of bounds");
        }
    }
}
