//! Routes browser callbacks back into the mounted drawer.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use sidedrawer_core::{EventOutcome, InputEvent};
use web_sys::HtmlElement;

use crate::WebDrawer;

/// Weak link from callbacks to the drawer.
///
/// The scheduler lives inside the drawer, so the link is connected after the
/// drawer is wrapped and never keeps it alive.
#[derive(Clone, Default)]
pub struct EventSink {
    target: Rc<RefCell<Weak<RefCell<WebDrawer>>>>,
}

impl EventSink {
    pub fn connect(&self, drawer: &Rc<RefCell<WebDrawer>>) {
        *self.target.borrow_mut() = Rc::downgrade(drawer);
    }

    pub fn dispatch(&self, event: InputEvent<HtmlElement>) -> EventOutcome {
        let Some(drawer) = self.target.borrow().upgrade() else {
            log::trace!("drawer dropped; {event:?} discarded");
            return EventOutcome::IGNORED;
        };
        let Ok(mut drawer) = drawer.try_borrow_mut() else {
            log::warn!("drawer busy; {event:?} discarded");
            return EventOutcome::IGNORED;
        };
        drawer.handle(event)
    }
}
