//! A scheduler that never fires on its own.
//!
//! Tests decide when a frame or timer elapses and deliver the matching
//! [`InputEvent`](sidedrawer_core::InputEvent) themselves.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use sidedrawer_core::{Scheduler, TaskHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Interval(u32),
    Timeout(u32),
}

#[derive(Debug, Default)]
struct Inner {
    next: u64,
    frames_supported: bool,
    frames: Vec<TaskHandle>,
    timers: BTreeMap<TaskHandle, TimerKind>,
    cancelled: Vec<TaskHandle>,
}

impl Inner {
    fn allocate(&mut self) -> TaskHandle {
        self.next += 1;
        TaskHandle::new(self.next)
    }
}

/// Records scheduled work. Clones share state.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                frames_supported: true,
                ..Inner::default()
            })),
        }
    }

    /// A host without `requestAnimationFrame`.
    pub fn without_frames() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    pub fn pending_frames(&self) -> Vec<TaskHandle> {
        self.inner.borrow().frames.clone()
    }

    /// Removes and returns every pending frame, oldest first.
    pub fn take_frames(&self) -> Vec<TaskHandle> {
        std::mem::take(&mut self.inner.borrow_mut().frames)
    }

    pub fn intervals(&self) -> Vec<TaskHandle> {
        self.active(|kind| matches!(kind, TimerKind::Interval(_)))
    }

    pub fn timeouts(&self) -> Vec<TaskHandle> {
        self.active(|kind| matches!(kind, TimerKind::Timeout(_)))
    }

    /// Removes and returns every pending timeout; they fire once.
    pub fn take_timeouts(&self) -> Vec<TaskHandle> {
        let mut inner = self.inner.borrow_mut();
        let due: Vec<TaskHandle> = inner
            .timers
            .iter()
            .filter(|(_, kind)| matches!(kind, TimerKind::Timeout(_)))
            .map(|(handle, _)| *handle)
            .collect();
        for handle in &due {
            inner.timers.remove(handle);
        }
        due
    }

    pub fn is_active(&self, handle: TaskHandle) -> bool {
        let inner = self.inner.borrow();
        inner.timers.contains_key(&handle) || inner.frames.contains(&handle)
    }

    pub fn timer_kind(&self, handle: TaskHandle) -> Option<TimerKind> {
        self.inner.borrow().timers.get(&handle).copied()
    }

    /// Every handle passed to `cancel_frame` or `cancel_timer`, in order.
    pub fn cancelled(&self) -> Vec<TaskHandle> {
        self.inner.borrow().cancelled.clone()
    }

    fn active(&self, filter: impl Fn(&TimerKind) -> bool) -> Vec<TaskHandle> {
        self.inner
            .borrow()
            .timers
            .iter()
            .filter(|(_, kind)| filter(kind))
            .map(|(handle, _)| *handle)
            .collect()
    }

    fn start(&self, kind: TimerKind) -> TaskHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = inner.allocate();
        inner.timers.insert(handle, kind);
        handle
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self) -> Option<TaskHandle> {
        let mut inner = self.inner.borrow_mut();
        if !inner.frames_supported {
            return None;
        }
        let handle = inner.allocate();
        inner.frames.push(handle);
        Some(handle)
    }

    fn cancel_frame(&self, handle: TaskHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.frames.retain(|frame| *frame != handle);
        inner.cancelled.push(handle);
    }

    fn start_interval(&self, period_ms: u32) -> TaskHandle {
        self.start(TimerKind::Interval(period_ms))
    }

    fn start_timeout(&self, delay_ms: u32) -> TaskHandle {
        self.start(TimerKind::Timeout(delay_ms))
    }

    fn cancel_timer(&self, handle: TaskHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.timers.remove(&handle);
        inner.cancelled.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_across_kinds() {
        let scheduler = ManualScheduler::new();
        let frame = scheduler.request_frame().expect("frames supported");
        let interval = scheduler.start_interval(10);
        let timeout = scheduler.start_timeout(300);
        assert_ne!(frame, interval);
        assert_ne!(interval, timeout);
        assert_eq!(scheduler.timer_kind(interval), Some(TimerKind::Interval(10)));
        assert_eq!(scheduler.timer_kind(timeout), Some(TimerKind::Timeout(300)));
    }

    #[test]
    fn cancelled_tasks_are_inactive() {
        let scheduler = ManualScheduler::new();
        let frame = scheduler.request_frame().expect("frames supported");
        let interval = scheduler.start_interval(10);
        scheduler.cancel_frame(frame);
        scheduler.cancel_timer(interval);
        assert!(!scheduler.is_active(frame));
        assert!(!scheduler.is_active(interval));
        assert_eq!(scheduler.cancelled(), vec![frame, interval]);
    }

    #[test]
    fn without_frames_declines_frame_requests() {
        let scheduler = ManualScheduler::without_frames();
        assert_eq!(scheduler.request_frame(), None);
    }
}
