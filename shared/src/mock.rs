//! Test doubles for the host and the drawing surface.

use crate::{
    Color, EffectError, FrameHandle, Host, IntervalHandle, PathSegment, RenderSurface, Transform,
    Viewport,
};

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Resize(Viewport),
    Clear,
    Save(Transform),
    Alpha(f64),
    Fill(Color),
    Restore,
}

/// Surface that records every call instead of painting.
#[derive(Debug)]
pub struct RecordingSurface {
    size: Viewport,
    pub ops: Vec<SurfaceOp>,
    pub fail_fill: bool,
}

impl RecordingSurface {
    pub fn new(size: Viewport) -> RecordingSurface {
        RecordingSurface {
            size,
            ops: Vec::new(),
            fail_fill: false,
        }
    }

    /// Number of calls that would have touched pixels.
    pub fn draws(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| !matches!(op, SurfaceOp::Resize(_)))
            .count()
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), EffectError> {
        self.size = viewport;
        self.ops.push(SurfaceOp::Resize(viewport));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), EffectError> {
        self.ops.push(SurfaceOp::Clear);
        Ok(())
    }

    fn with_transform<F>(&mut self, transform: Transform, draw: F) -> Result<(), EffectError>
    where
        F: FnOnce(&mut Self) -> Result<(), EffectError>,
    {
        self.ops.push(SurfaceOp::Save(transform));
        let result = draw(self);
        self.ops.push(SurfaceOp::Restore);
        result
    }

    fn set_alpha(&mut self, alpha: f64) -> Result<(), EffectError> {
        self.ops.push(SurfaceOp::Alpha(alpha));
        Ok(())
    }

    fn fill_path(&mut self, _path: &[PathSegment], color: Color) -> Result<(), EffectError> {
        if self.fail_fill {
            return Err(EffectError::Surface("fill rejected".to_string()));
        }

        self.ops.push(SurfaceOp::Fill(color));
        Ok(())
    }
}

/// Host that only remembers what was scheduled; tests fire the callbacks by hand.
#[derive(Debug, Default)]
pub struct FakeHost {
    next_id: i32,
    pub frames: Vec<FrameHandle>,
    pub intervals: Vec<(IntervalHandle, u32)>,
    pub listening: bool,
    pub frame_requests: usize,
    pub fail_interval: bool,
    pub fail_frame: bool,
}

impl FakeHost {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    /// Takes the pending frame request, as the browser does right before running it.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.frames.pop()
    }

    /// True when nothing could call back into the effect any more.
    pub fn is_quiet(&self) -> bool {
        self.frames.is_empty() && self.intervals.is_empty() && !self.listening
    }
}

impl Host for FakeHost {
    fn request_frame(&mut self) -> Result<FrameHandle, EffectError> {
        if self.fail_frame {
            return Err(EffectError::Host("no frames".to_string()));
        }

        let handle = FrameHandle(self.next_id());
        self.frames.push(handle);
        self.frame_requests += 1;
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|frame| *frame != handle);
    }

    fn set_interval(&mut self, period_ms: u32) -> Result<IntervalHandle, EffectError> {
        if self.fail_interval {
            return Err(EffectError::Host("no timers".to_string()));
        }

        let handle = IntervalHandle(self.next_id());
        self.intervals.push((handle, period_ms));
        Ok(handle)
    }

    fn clear_interval(&mut self, handle: IntervalHandle) {
        self.intervals.retain(|(interval, _)| *interval != handle);
    }

    fn listen_resize(&mut self) -> Result<(), EffectError> {
        self.listening = true;
        Ok(())
    }

    fn unlisten_resize(&mut self) {
        self.listening = false;
    }
}
