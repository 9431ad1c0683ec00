//! Testing utilities and harness for sidedrawer
//!
//! [`FakeDom`] is a small in-memory document implementing
//! [`Dom`](sidedrawer_core::Dom), [`ManualScheduler`] hands out task handles
//! and lets tests decide when frames and timers fire, and [`DrawerHarness`]
//! wires both to a [`Drawer`](sidedrawer_core::Drawer) on a standard page.

pub mod assertions;
pub mod fake_dom;
pub mod harness;
pub mod scheduler;
mod selector;

pub use assertions::*;
pub use fake_dom::{FakeDom, Mutation, NodeId};
pub use harness::{DrawerHarness, FakeDrawer, Page, PANEL_SELECTOR};
pub use scheduler::{ManualScheduler, TimerKind};

/// Routes `log` output to stderr, filtered by `RUST_LOG`. Safe to call from
/// every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::init_logging;
    pub use crate::fake_dom::{FakeDom, Mutation, NodeId};
    pub use crate::harness::{DrawerHarness, FakeDrawer, Page, PANEL_SELECTOR};
    pub use crate::scheduler::{ManualScheduler, TimerKind};
    pub use sidedrawer_core::{
        BackdropEventKind, Direction, DrawerOptions, EventOutcome, InputEvent, Key, KeyPress,
    };
}
