//! Interaction engine for an off-canvas navigation drawer.
//!
//! A [`Drawer`] binds a hidden side panel, its trigger button and an optional
//! fixed header, then reacts to forwarded input:
//!
//! - **gestures**: touch-drag scrolling of the open panel with clamped offset
//!   and a linear momentum decay after release ([`gesture`], [`momentum`]);
//! - **visibility**: open/close transitions, focus trapping and ARIA state
//!   ([`visibility`], [`focus_trap`]);
//! - **responsive mode**: breakpoint rules recomputed on width changes
//!   ([`responsive`]).
//!
//! Transitions are functions over [`DrawerState`] returning [`Effects`]; the
//! drawer applies them through an injected [`Dom`] and defers work through an
//! injected [`Scheduler`]. Browser bindings live in
//! `sidedrawer-platform-web`, test doubles in `sidedrawer-testing`.

pub mod binder;
pub mod classes;
pub mod config;
pub mod dom;
mod drawer;
pub mod effect;
pub mod error;
pub mod event;
pub mod focus_trap;
pub mod gesture;
pub mod momentum;
pub mod responsive;
pub mod scheduler;
pub mod state;
pub mod visibility;

pub use binder::Nodes;
pub use config::{Breakpoint, Direction, DrawerConfig, DrawerOptions};
pub use dom::Dom;
pub use drawer::Drawer;
pub use effect::{Effect, Effects, Target};
pub use error::{DrawerError, Result};
pub use event::{BackdropEventKind, EventOutcome, InputEvent, Key, KeyPress};
pub use focus_trap::FocusTrap;
pub use gesture::{GesturePhase, ScrollBounds};
pub use responsive::ResponsiveMode;
pub use scheduler::{Scheduler, TaskHandle};
pub use state::{DrawerId, DrawerState};
pub use visibility::Visibility;
