//! The drawer component: owns the state record and applies transitions to
//! the document.

use crate::binder::{self, Nodes};
use crate::classes;
use crate::config::DrawerOptions;
use crate::dom::Dom;
use crate::effect::Effect;
use crate::error::Result;
use crate::event::{BackdropEventKind, EventOutcome, InputEvent, Key, KeyPress};
use crate::focus_trap::FocusTrap;
use crate::gesture::{self, GesturePhase, ScrollBounds};
use crate::momentum::TICK_PERIOD_MS;
use crate::responsive;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::state::DrawerState;
use crate::visibility::{self, OpenMetrics};

/// An off-canvas navigation panel bound to a document.
///
/// The host forwards DOM events through [`Drawer::handle`]; the drawer
/// updates its [`DrawerState`] and writes the resulting classes, attributes
/// and inline styles back through `D`.
///
/// A close completes when the page's slide-out transition ends. Without a CSS
/// transition on `<body>` and without
/// [`close_fallback_ms`](crate::DrawerOptions::close_fallback_ms), the drawer
/// stays in [`Visibility::Closing`](crate::Visibility::Closing).
pub struct Drawer<D: Dom, S: Scheduler> {
    dom: D,
    scheduler: S,
    nodes: Nodes<D::Node>,
    state: DrawerState,
    focus_trap: Option<FocusTrap<D::Node>>,
}

impl<D: Dom, S: Scheduler> Drawer<D, S> {
    /// Binds a drawer to the panel matching `panel_selector`.
    ///
    /// Fails with [`DrawerError::SelectorNotFound`](crate::DrawerError) if the
    /// panel, trigger or body is missing, before anything is written. The
    /// responsive rule runs once for the current viewport width.
    pub fn new(dom: D, scheduler: S, panel_selector: &str, options: DrawerOptions) -> Result<Self> {
        let (nodes, state) = binder::bind(&dom, panel_selector, &options)?;
        let mut drawer = Self {
            dom,
            scheduler,
            nodes,
            state,
            focus_trap: None,
        };
        let effects = binder::initial_effects(&drawer.state);
        drawer.apply(&effects);
        drawer.recompute_responsive();
        log::debug!(
            "drawer {} bound to `{}`",
            drawer.state.id(),
            panel_selector
        );
        Ok(drawer)
    }

    pub fn open(&mut self) {
        self.cancel_close_fallback();
        let focusables = self
            .dom
            .query_all(&self.nodes.panel, self.state.config().focusable_elements());
        self.focus_trap = FocusTrap::new(focusables);
        if self.focus_trap.is_none() {
            log::debug!("no focusable elements in panel; focus trap skipped");
        }
        let metrics = OpenMetrics {
            scroll_top: self.dom.scroll_top(),
            viewport_height: self.dom.viewport_height(),
        };
        let effects = visibility::open(&mut self.state, metrics);
        self.apply(&effects);
    }

    /// Starts closing. The state resets when the transition ends.
    pub fn close(&mut self) {
        let Some(effects) = visibility::begin_close(&mut self.state) else {
            return;
        };
        self.apply(&effects);
        if let Some(delay) = self.state.config().close_fallback_ms() {
            self.state.close_fallback = Some(self.scheduler.start_timeout(delay));
        }
    }

    /// Routes one input event.
    pub fn handle(&mut self, event: InputEvent<D::Node>) -> EventOutcome {
        match event {
            InputEvent::TriggerClick => {
                self.open();
                EventOutcome::IGNORED
            }
            InputEvent::Backdrop { kind, target } => {
                self.on_backdrop(kind, &target);
                EventOutcome::IGNORED
            }
            InputEvent::KeyDown { target, key } => self.on_key_down(&target, key),
            InputEvent::Resize => {
                self.on_resize();
                EventOutcome::IGNORED
            }
            InputEvent::TouchStart { y } => {
                self.cancel_momentum();
                let effects = gesture::touch_start(&mut self.state, y);
                self.apply(&effects);
                EventOutcome::IGNORED
            }
            InputEvent::TouchMove { y } => {
                let bounds = self.scroll_bounds();
                match gesture::touch_move(&mut self.state, y, bounds) {
                    Some(effects) => {
                        self.apply(&effects);
                        EventOutcome::CONSUMED
                    }
                    None => EventOutcome::IGNORED,
                }
            }
            InputEvent::TouchEnd => {
                if gesture::touch_end(&mut self.state) {
                    let handle = self.scheduler.start_interval(TICK_PERIOD_MS);
                    if let Some(previous) = self.state.momentum_task.replace(handle) {
                        self.scheduler.cancel_timer(previous);
                    }
                }
                EventOutcome::IGNORED
            }
            InputEvent::TransitionEnd => {
                self.complete_close();
                EventOutcome::IGNORED
            }
            InputEvent::Frame(handle) => {
                self.on_frame(handle);
                EventOutcome::IGNORED
            }
            InputEvent::Timer(handle) => {
                self.on_timer(handle);
                EventOutcome::IGNORED
            }
        }
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn nodes(&self) -> &Nodes<D::Node> {
        &self.nodes
    }

    pub fn focus_trap(&self) -> Option<&FocusTrap<D::Node>> {
        self.focus_trap.as_ref()
    }

    fn on_backdrop(&mut self, kind: BackdropEventKind, target: &D::Node) {
        if let BackdropEventKind::KeyUp(key) = kind {
            if key != Key::Escape {
                return;
            }
        }
        if *target != self.nodes.backdrop {
            return;
        }
        self.close();
    }

    fn on_key_down(&mut self, target: &D::Node, key: KeyPress) -> EventOutcome {
        let Some(next) = self
            .focus_trap
            .as_ref()
            .and_then(|trap| trap.redirect(target, key))
        else {
            return EventOutcome::IGNORED;
        };
        self.dom.focus(next);
        EventOutcome::CONSUMED
    }

    /// Coalesces resizes to one recompute per animation frame: a newer
    /// request cancels the pending one.
    fn on_resize(&mut self) {
        match self.scheduler.request_frame() {
            Some(handle) => {
                if let Some(previous) = self.state.resize_frame.replace(handle) {
                    self.scheduler.cancel_frame(previous);
                }
            }
            None => self.recompute_responsive(),
        }
    }

    fn on_frame(&mut self, handle: TaskHandle) {
        if self.state.resize_frame != Some(handle) {
            log::trace!("ignoring stale frame {handle:?}");
            return;
        }
        self.state.resize_frame = None;
        self.recompute_responsive();
    }

    fn on_timer(&mut self, handle: TaskHandle) {
        if self.state.momentum_task == Some(handle) {
            let bounds = self.scroll_bounds();
            let (effects, finished) = gesture::momentum_tick(&mut self.state, bounds);
            if finished {
                self.cancel_momentum();
            }
            self.apply(&effects);
        } else if self.state.close_fallback == Some(handle) {
            self.state.close_fallback = None;
            log::debug!("no transition end within fallback; completing close");
            self.complete_close();
        } else {
            log::trace!("ignoring stale timer {handle:?}");
        }
    }

    fn recompute_responsive(&mut self) {
        let width = self.dom.viewport_width();
        let open_marker = self
            .dom
            .has_class(&self.nodes.panel, classes::PANEL_OPEN_MARKER);
        if let Some(effects) = responsive::recompute(&mut self.state, width, open_marker) {
            self.apply(&effects);
        }
    }

    fn complete_close(&mut self) {
        self.cancel_close_fallback();
        if let Some(effects) = visibility::finish_close(&mut self.state) {
            self.focus_trap = None;
            self.apply(&effects);
        }
    }

    fn cancel_momentum(&mut self) {
        if let Some(handle) = self.state.momentum_task.take() {
            self.scheduler.cancel_timer(handle);
        }
        if self.state.gesture == GesturePhase::Settling {
            self.state.gesture = GesturePhase::Idle;
        }
    }

    fn cancel_close_fallback(&mut self) {
        if let Some(handle) = self.state.close_fallback.take() {
            self.scheduler.cancel_timer(handle);
        }
    }

    fn scroll_bounds(&self) -> ScrollBounds {
        ScrollBounds::new(
            self.dom.offset_height(&self.nodes.panel),
            self.dom.viewport_height(),
        )
    }

    fn apply(&self, effects: &[Effect]) {
        for effect in effects {
            let Some(node) = self.nodes.get(effect.target()) else {
                continue;
            };
            match effect {
                Effect::SetAttribute { name, value, .. } => {
                    self.dom.set_attribute(node, name, value)
                }
                Effect::AddClass { class, .. } => self.dom.add_class(node, class),
                Effect::RemoveClass { class, .. } => self.dom.remove_class(node, class),
                Effect::SetStyle {
                    property, value, ..
                } => self.dom.set_style(node, property, value),
                Effect::Click(_) => self.dom.click(node),
            }
        }
    }
}
