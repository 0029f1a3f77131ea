use rand::Rng;
use tracing::{debug, info};

use crate::{
    burst, physics, render, EffectConfig, EffectError, FrameHandle, Host, IntervalHandle,
    ParticleSet, RenderSurface, SimulationClock, Viewport, ViewportManager,
};

/// Everything that exists only while the effect is mounted.
struct Running<S> {
    surface: S,
    viewport: ViewportManager,
    clock: SimulationClock,
    particles: ParticleSet,
    frame: Option<FrameHandle>,
    burst_timer: IntervalHandle,
}

enum State<S> {
    Idle,
    Running(Running<S>),
}

/// The celebration effect: a frame loop and a burst timer over one live particle set.
///
/// The effect starts idle. [`Effect::mount`] takes a surface and starts scheduling through
/// the [`Host`]; [`Effect::unmount`] cancels everything that was scheduled. The host routes
/// its callbacks to [`Effect::on_frame`], [`Effect::on_burst`] and [`Effect::on_resize`],
/// which do nothing while idle.
pub struct Effect<S, H, R> {
    host: H,
    rng: R,
    config: EffectConfig,
    state: State<S>,
}

impl<S, H, R> Effect<S, H, R>
where
    S: RenderSurface,
    H: Host,
    R: Rng,
{
    pub fn new(host: H, rng: R, config: EffectConfig) -> Effect<S, H, R> {
        Effect {
            host,
            rng,
            config,
            state: State::Idle,
        }
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    /// Live particles, empty while idle.
    pub fn particle_count(&self) -> usize {
        match &self.state {
            State::Running(running) => running.particles.len(),
            State::Idle => 0,
        }
    }

    pub fn particles(&self) -> Option<&ParticleSet> {
        match &self.state {
            State::Running(running) => Some(&running.particles),
            State::Idle => None,
        }
    }

    pub fn surface(&self) -> Option<&S> {
        match &self.state {
            State::Running(running) => Some(&running.surface),
            State::Idle => None,
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        match &self.state {
            State::Running(running) => Some(running.viewport.viewport()),
            State::Idle => None,
        }
    }

    /// Starts the effect on `surface`. A mounted effect is torn down and started afresh.
    ///
    /// When any registration fails, whatever was already registered is released and the
    /// effect stays idle.
    pub fn mount(&mut self, mut surface: S, viewport: Viewport) -> Result<(), EffectError> {
        self.unmount();

        let viewport = ViewportManager::attach(&mut surface, viewport)?;

        self.host.listen_resize()?;

        let burst_timer = match self.host.set_interval(self.config.burst_interval_ms) {
            Ok(burst_timer) => burst_timer,
            Err(err) => {
                self.host.unlisten_resize();
                return Err(err);
            }
        };

        let frame = match self.host.request_frame() {
            Ok(frame) => frame,
            Err(err) => {
                self.host.clear_interval(burst_timer);
                self.host.unlisten_resize();
                return Err(err);
            }
        };

        info!(
            width = viewport.width(),
            height = viewport.height(),
            "celebration mounted"
        );

        self.state = State::Running(Running {
            surface,
            viewport,
            clock: SimulationClock::new(),
            particles: ParticleSet::new(),
            frame: Some(frame),
            burst_timer,
        });

        Ok(())
    }

    /// Cancels the frame loop, the burst timer and the resize listener, handing the surface
    /// back. Safe to call at any time, any number of times.
    pub fn unmount(&mut self) -> Option<S> {
        let State::Running(running) = std::mem::replace(&mut self.state, State::Idle) else {
            return None;
        };

        if let Some(frame) = running.frame {
            self.host.cancel_frame(frame);
        }

        self.host.clear_interval(running.burst_timer);
        self.host.unlisten_resize();

        info!(live = running.particles.len(), "celebration unmounted");

        Some(running.surface)
    }

    /// One animation frame: integrate, repaint, drop expired particles, schedule the next.
    ///
    /// `timestamp` is the frame time in milliseconds. A frame that cannot be drawn unmounts
    /// the effect and returns the error.
    pub fn on_frame(&mut self, timestamp: f64) -> Result<(), EffectError> {
        let State::Running(running) = &mut self.state else {
            return Ok(());
        };

        running.frame = None;

        let dt = running.clock.tick(timestamp);

        for particle in running.particles.iter_mut() {
            physics::update(particle, dt);
        }

        if let Err(err) = render::render_frame(&mut running.surface, &running.particles) {
            self.unmount();
            return Err(err);
        }

        let expired = running.particles.sweep();

        if expired > 0 {
            debug!(expired, live = running.particles.len(), "swept particles");
        }

        match self.host.request_frame() {
            Ok(frame) => {
                running.frame = Some(frame);
                Ok(())
            }
            Err(err) => {
                self.unmount();
                Err(err)
            }
        }
    }

    /// Burst timer tick: spawns one burst at a random point of the viewport.
    pub fn on_burst(&mut self) {
        let State::Running(running) = &mut self.state else {
            return;
        };

        let origin = burst::burst_origin(&mut self.rng, running.viewport.viewport());
        burst::spawn(&mut running.particles, &mut self.rng, origin, &self.config);
    }

    /// Resize notification: resizes the surface before the next frame is drawn.
    pub fn on_resize(&mut self, viewport: Viewport) -> Result<(), EffectError> {
        let State::Running(running) = &mut self.state else {
            return Ok(());
        };

        if running.viewport.resize(&mut running.surface, viewport)? {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "surface resized"
            );
        }

        Ok(())
    }
}
