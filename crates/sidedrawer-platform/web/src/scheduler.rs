//! Frames and timers backed by `requestAnimationFrame`, `setTimeout` and
//! `setInterval`.
//!
//! Every JS callback is a [`Closure`] owned by the scheduler's [`TaskTable`].
//! A callback leaves the table when it fires or is cancelled and is parked in
//! a retired list, since it may still be on the call stack; the list is
//! emptied whenever new work is scheduled.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use sidedrawer_core::{InputEvent, Scheduler, TaskHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::sink::EventSink;

/// Browser id of a scheduled task, as returned by the `set*`/`request*` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskId {
    Frame(i32),
    Timeout(i32),
    Interval(i32),
}

struct Entry<C> {
    id: TaskId,
    callback: C,
}

/// Live tasks and the callbacks keeping them reachable.
///
/// Generic over the callback type so the bookkeeping runs without a browser.
pub(crate) struct TaskTable<C> {
    next: u64,
    live: HashMap<TaskHandle, Entry<C>>,
    retired: Vec<C>,
}

impl<C> Default for TaskTable<C> {
    fn default() -> Self {
        Self {
            next: 0,
            live: HashMap::new(),
            retired: Vec::new(),
        }
    }
}

impl<C> TaskTable<C> {
    pub(crate) fn allocate(&mut self) -> TaskHandle {
        self.next += 1;
        TaskHandle::new(self.next)
    }

    pub(crate) fn insert(&mut self, handle: TaskHandle, id: TaskId, callback: C) {
        self.live.insert(handle, Entry { id, callback });
    }

    /// Removes `handle` and parks its callback. Returns the browser id to
    /// clear, if the task was still live.
    pub(crate) fn retire(&mut self, handle: TaskHandle) -> Option<TaskId> {
        let entry = self.live.remove(&handle)?;
        self.retired.push(entry.callback);
        Some(entry.id)
    }

    /// A one-shot task fired: it is no longer live. Intervals stay.
    pub(crate) fn fired(&mut self, handle: TaskHandle) {
        let one_shot = self
            .live
            .get(&handle)
            .is_some_and(|entry| !matches!(entry.id, TaskId::Interval(_)));
        if one_shot {
            self.retire(handle);
        }
    }

    /// Drops retired callbacks. Must not run from inside a task callback.
    pub(crate) fn purge(&mut self) {
        self.retired.clear();
    }

    #[cfg(test)]
    pub(crate) fn live_count(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub(crate) fn retired_count(&self) -> usize {
        self.retired.len()
    }
}

type Tasks = RefCell<TaskTable<Closure<dyn FnMut()>>>;

pub struct WebScheduler {
    window: Window,
    sink: EventSink,
    tasks: Rc<Tasks>,
}

impl WebScheduler {
    pub fn new(window: Window, sink: EventSink) -> Self {
        Self {
            window,
            sink,
            tasks: Rc::new(RefCell::new(TaskTable::default())),
        }
    }

    /// Scheduling only happens from DOM listeners and API calls, never from
    /// a task callback, so retired callbacks are safe to drop here.
    fn begin(&self) -> TaskHandle {
        let mut tasks = self.tasks.borrow_mut();
        tasks.purge();
        tasks.allocate()
    }

    /// Callback forwarding `event` for `handle`. It holds the table weakly,
    /// since the table owns it.
    fn callback(
        &self,
        handle: TaskHandle,
        event: InputEvent<web_sys::HtmlElement>,
    ) -> Closure<dyn FnMut()> {
        let tasks: Weak<Tasks> = Rc::downgrade(&self.tasks);
        let sink = self.sink.clone();
        Closure::wrap(Box::new(move || {
            if let Some(tasks) = tasks.upgrade() {
                tasks.borrow_mut().fired(handle);
            }
            sink.dispatch(event.clone());
        }) as Box<dyn FnMut()>)
    }

    fn clear(&self, handle: TaskHandle) {
        let Some(id) = self.tasks.borrow_mut().retire(handle) else {
            return;
        };
        match id {
            TaskId::Frame(id) => {
                if let Err(err) = self.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {err:?}");
                }
            }
            TaskId::Timeout(id) => self.window.clear_timeout_with_handle(id),
            TaskId::Interval(id) => self.window.clear_interval_with_handle(id),
        }
    }
}

fn millis(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl Scheduler for WebScheduler {
    fn request_frame(&self) -> Option<TaskHandle> {
        let handle = self.begin();
        let callback = self.callback(handle, InputEvent::Frame(handle));
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => {
                self.tasks
                    .borrow_mut()
                    .insert(handle, TaskId::Frame(id), callback);
                Some(handle)
            }
            Err(err) => {
                log::debug!("requestAnimationFrame unavailable: {err:?}");
                None
            }
        }
    }

    fn cancel_frame(&self, handle: TaskHandle) {
        self.clear(handle);
    }

    fn start_interval(&self, period_ms: u32) -> TaskHandle {
        let handle = self.begin();
        let callback = self.callback(handle, InputEvent::Timer(handle));
        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(period_ms),
            ) {
            Ok(id) => self
                .tasks
                .borrow_mut()
                .insert(handle, TaskId::Interval(id), callback),
            Err(err) => log::error!("setInterval failed: {err:?}"),
        }
        handle
    }

    fn start_timeout(&self, delay_ms: u32) -> TaskHandle {
        let handle = self.begin();
        let callback = self.callback(handle, InputEvent::Timer(handle));
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(delay_ms),
            ) {
            Ok(id) => self
                .tasks
                .borrow_mut()
                .insert(handle, TaskId::Timeout(id), callback),
            Err(err) => log::error!("setTimeout failed: {err:?}"),
        }
        handle
    }

    fn cancel_timer(&self, handle: TaskHandle) {
        self.clear(handle);
    }
}
