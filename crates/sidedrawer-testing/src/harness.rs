//! Drives a [`Drawer`] over a [`FakeDom`] the way a browser host would.
//!
//! # Example
//!
//! ```
//! use sidedrawer_testing::prelude::*;
//!
//! let mut harness = DrawerHarness::new(DrawerOptions::default());
//! harness.click_trigger();
//! assert!(harness.drawer().is_open());
//!
//! harness.click_backdrop();
//! harness.end_transition();
//! assert!(!harness.drawer().is_open());
//! harness.assert_aria_coherent();
//! ```

use sidedrawer_core::{
    BackdropEventKind, Drawer, DrawerOptions, EventOutcome, InputEvent, Key, KeyPress, Result,
};

use crate::fake_dom::{FakeDom, NodeId};
use crate::scheduler::ManualScheduler;

pub const PANEL_SELECTOR: &str = ".js-drawer-panel";

pub type FakeDrawer = Drawer<FakeDom, ManualScheduler>;

/// A small page with everything a drawer binds to.
///
/// ```text
/// body
/// ├── header.js-drawer-fixed-header
/// ├── button.js-drawer-btn
/// ├── nav.js-drawer-panel
/// │   └── a[href] x3
/// └── main
/// ```
#[derive(Debug, Clone)]
pub struct Page {
    pub dom: FakeDom,
    pub header: NodeId,
    pub trigger: NodeId,
    pub panel: NodeId,
    pub links: Vec<NodeId>,
    pub main: NodeId,
}

impl Page {
    pub const VIEWPORT_WIDTH: f64 = 375.0;
    pub const VIEWPORT_HEIGHT: f64 = 800.0;
    pub const PANEL_CONTENT_HEIGHT: f64 = 2000.0;

    /// A phone-sized viewport with a panel taller than the screen.
    pub fn standard() -> Self {
        Self::build(3)
    }

    pub fn without_focusables() -> Self {
        Self::build(0)
    }

    fn build(link_count: usize) -> Self {
        let dom = FakeDom::new();
        dom.set_viewport(Self::VIEWPORT_WIDTH, Self::VIEWPORT_HEIGHT);
        let body = dom.body_node();
        let header = dom.append(body, "header", &[("class", "js-drawer-fixed-header")]);
        let trigger = dom.append(body, "button", &[("class", "js-drawer-btn")]);
        let panel = dom.append(body, "nav", &[("class", "js-drawer-panel")]);
        let links = (0..link_count)
            .map(|i| {
                let href = format!("/section-{i}");
                dom.append(panel, "a", &[("href", href.as_str())])
            })
            .collect();
        let main = dom.append(body, "main", &[]);
        dom.set_content_height(panel, Self::PANEL_CONTENT_HEIGHT);
        Self {
            dom,
            header,
            trigger,
            panel,
            links,
            main,
        }
    }
}

pub struct DrawerHarness {
    page: Page,
    scheduler: ManualScheduler,
    drawer: FakeDrawer,
}

impl DrawerHarness {
    /// Binds a drawer on [`Page::standard`].
    ///
    /// # Panics
    ///
    /// If binding fails.
    pub fn new(options: DrawerOptions) -> Self {
        Self::with_page(Page::standard(), ManualScheduler::new(), options)
    }

    pub fn with_page(page: Page, scheduler: ManualScheduler, options: DrawerOptions) -> Self {
        match Self::try_with_page(page, scheduler, options) {
            Ok(harness) => harness,
            Err(err) => panic!("drawer failed to bind: {err}"),
        }
    }

    pub fn try_with_page(
        page: Page,
        scheduler: ManualScheduler,
        options: DrawerOptions,
    ) -> Result<Self> {
        crate::init_logging();
        let drawer = Drawer::new(
            page.dom.clone(),
            scheduler.clone(),
            PANEL_SELECTOR,
            options,
        )?;
        Ok(Self {
            page,
            scheduler,
            drawer,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn dom(&self) -> &FakeDom {
        &self.page.dom
    }

    pub fn scheduler(&self) -> &ManualScheduler {
        &self.scheduler
    }

    pub fn drawer(&self) -> &FakeDrawer {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut FakeDrawer {
        &mut self.drawer
    }

    pub fn backdrop(&self) -> NodeId {
        self.drawer.nodes().backdrop
    }

    pub fn body(&self) -> NodeId {
        self.drawer.nodes().body
    }

    pub fn send(&mut self, event: InputEvent<NodeId>) -> EventOutcome {
        self.drawer.handle(event)
    }

    pub fn click_trigger(&mut self) -> EventOutcome {
        self.send(InputEvent::TriggerClick)
    }

    pub fn click_backdrop(&mut self) -> EventOutcome {
        let backdrop = self.backdrop();
        self.backdrop_event(BackdropEventKind::Click, backdrop)
    }

    /// A backdrop listener firing for an event whose target is `target`,
    /// as happens when the event bubbles from a child.
    pub fn backdrop_event(&mut self, kind: BackdropEventKind, target: NodeId) -> EventOutcome {
        self.send(InputEvent::Backdrop { kind, target })
    }

    pub fn key_up_backdrop(&mut self, code: u32) -> EventOutcome {
        let backdrop = self.backdrop();
        self.backdrop_event(BackdropEventKind::KeyUp(Key::from_code(code)), backdrop)
    }

    /// A keydown inside the panel. Focus moves to `target` first, as it
    /// would in a browser.
    pub fn key_down(&mut self, target: NodeId, key: KeyPress) -> EventOutcome {
        self.page.dom.set_focused(target);
        self.send(InputEvent::KeyDown { target, key })
    }

    /// Changes the viewport width, dispatches `resize` and runs any frame
    /// the drawer requested.
    pub fn resize(&mut self, width: f64) {
        self.page.dom.set_viewport_width(width);
        self.send(InputEvent::Resize);
        self.flush_frames();
    }

    /// Delivers every pending animation frame.
    pub fn flush_frames(&mut self) -> usize {
        let frames = self.scheduler.take_frames();
        let count = frames.len();
        for frame in frames {
            self.send(InputEvent::Frame(frame));
        }
        count
    }

    /// Touch down at `from`, one move to `to`. The finger stays down.
    pub fn drag(&mut self, from: f64, to: f64) -> EventOutcome {
        self.send(InputEvent::TouchStart { y: from });
        self.send(InputEvent::TouchMove { y: to })
    }

    pub fn release(&mut self) {
        self.send(InputEvent::TouchEnd);
    }

    /// Fires the momentum interval until the drawer cancels it or
    /// `max_ticks` is reached. Returns the number of ticks delivered.
    pub fn run_momentum(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks {
            let Some(handle) = self.drawer.state().momentum_task() else {
                break;
            };
            self.send(InputEvent::Timer(handle));
            ticks += 1;
        }
        ticks
    }

    pub fn end_transition(&mut self) {
        self.send(InputEvent::TransitionEnd);
    }

    /// Lets every pending timeout elapse.
    pub fn fire_timeouts(&mut self) -> usize {
        let due = self.scheduler.take_timeouts();
        let count = due.len();
        for handle in due {
            self.send(InputEvent::Timer(handle));
        }
        count
    }

    /// Current `margin-top` of the panel in pixels.
    pub fn panel_margin(&self) -> Option<f64> {
        self.page
            .dom
            .style_of(self.page.panel, "margin-top")
            .as_deref()
            .and_then(crate::assertions::px_value)
    }

    /// Checks that the trigger and backdrop ARIA state agree with
    /// [`Drawer::is_open`].
    pub fn assert_aria_coherent(&self) {
        let open = self.drawer.is_open();
        let expanded = self
            .page
            .dom
            .attribute_of(self.page.trigger, "aria-expanded");
        let hidden = self.page.dom.attribute_of(self.backdrop(), "aria-hidden");
        assert_eq!(
            expanded.as_deref(),
            Some(if open { "true" } else { "false" }),
            "trigger aria-expanded out of sync (is_open = {open})"
        );
        assert_eq!(
            hidden.as_deref(),
            Some(if open { "false" } else { "true" }),
            "backdrop aria-hidden out of sync (is_open = {open})"
        );
    }
}
