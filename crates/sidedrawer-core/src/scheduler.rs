//! Deferred work: animation frames and timers.
//!
//! The drawer only ever holds [`TaskHandle`]s. When a scheduled task fires,
//! the host delivers [`InputEvent::Frame`](crate::InputEvent::Frame) or
//! [`InputEvent::Timer`](crate::InputEvent::Timer) carrying the same handle;
//! a handle the drawer no longer tracks is ignored.

/// Identifies a scheduled frame or timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Schedules callbacks on behalf of the drawer.
pub trait Scheduler {
    /// Requests a callback on the next animation frame.
    ///
    /// Returns `None` when the host has no frame primitive; the caller then
    /// runs the work synchronously.
    fn request_frame(&self) -> Option<TaskHandle>;

    fn cancel_frame(&self, handle: TaskHandle);

    /// Starts a repeating timer with a fixed period.
    fn start_interval(&self, period_ms: u32) -> TaskHandle;

    /// Starts a one-shot timer.
    fn start_timeout(&self, delay_ms: u32) -> TaskHandle;

    /// Cancels an interval or timeout. Unknown handles are ignored.
    fn cancel_timer(&self, handle: TaskHandle);
}
