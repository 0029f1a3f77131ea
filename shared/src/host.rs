use crate::EffectError;

/// Identifies a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Identifies a repeating timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntervalHandle(pub i32);

/// Scheduling primitives provided by the environment hosting an [`Effect`](crate::Effect).
///
/// A host is bound to one effect: a requested frame ends up in
/// [`Effect::on_frame`](crate::Effect::on_frame), each interval tick in
/// [`Effect::on_burst`](crate::Effect::on_burst) and each resize notification in
/// [`Effect::on_resize`](crate::Effect::on_resize). Cancellation never fails; hosts log what
/// they could not release.
pub trait Host {
    fn request_frame(&mut self) -> Result<FrameHandle, EffectError>;

    fn cancel_frame(&mut self, handle: FrameHandle);

    fn set_interval(&mut self, period_ms: u32) -> Result<IntervalHandle, EffectError>;

    fn clear_interval(&mut self, handle: IntervalHandle);

    fn listen_resize(&mut self) -> Result<(), EffectError>;

    fn unlisten_resize(&mut self);
}
