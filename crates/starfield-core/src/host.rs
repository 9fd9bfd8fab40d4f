//! Scheduling seam between the animator and whatever drives it.
//!
//! A browser host maps these calls onto `requestAnimationFrame`,
//! `setInterval` and a window `resize` listener; tests use
//! [`crate::testing::ManualHost`] with a fake clock. The host invokes the
//! animator back through `Starfield::on_frame`, `Starfield::on_spawn_tick` and
//! `Starfield::on_resize`.

use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntervalHandle(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub i32);

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("frame request rejected: {0}")]
    Frame(String),
    #[error("interval registration rejected: {0}")]
    Interval(String),
    #[error("resize listener registration rejected: {0}")]
    Listener(String),
}

pub trait AnimationHost {
    /// Current logical viewport and pixel ratio.
    fn viewport(&self) -> Viewport;

    /// Ask for exactly one future `on_frame` call.
    fn request_frame(&mut self) -> Result<FrameHandle, HostError>;
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start a periodic `on_spawn_tick`.
    fn start_interval(&mut self, period_ms: f64) -> Result<IntervalHandle, HostError>;
    fn clear_interval(&mut self, handle: IntervalHandle);

    fn watch_resize(&mut self) -> Result<ListenerHandle, HostError>;
    fn unwatch_resize(&mut self, handle: ListenerHandle);
}
