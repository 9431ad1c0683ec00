//! Open/close transitions and the ARIA projection of the open state.
//!
//! Opening is synchronous. Closing is two-phase: [`begin_close`] removes the
//! directional body class, which starts the page's slide-out transition, and
//! [`finish_close`] runs when that transition ends. Until then the drawer
//! still reports itself open, so `aria-expanded` on the trigger and
//! `aria-hidden` on the backdrop always agree with [`DrawerState::is_open`].

use crate::classes;
use crate::effect::{px, Effect, Effects, Target};
use crate::state::DrawerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
    /// Waiting for the slide-out transition to end.
    Closing,
}

/// Page measurements read at the moment the drawer opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
}

/// Opens the drawer. Valid from every state; opening while closing abandons
/// the pending close.
pub fn open(state: &mut DrawerState, metrics: OpenMetrics) -> Effects {
    let direction = state.config.direction();
    state.is_open = true;
    state.visibility = Visibility::Open;
    state.scroll_offset = 0.0;
    log::debug!("drawer {} opened", state.id);

    let mut effects = Effects::new();
    effects.push(Effect::attribute(Target::Trigger, "aria-expanded", true));
    effects.push(Effect::add_class(Target::Trigger, classes::BUTTON_ACTIVE));
    effects.push(Effect::attribute(Target::Backdrop, "aria-hidden", false));
    effects.push(Effect::add_class(Target::Body, classes::body_open(direction)));
    effects.push(Effect::style(
        Target::FixedHeader,
        "transform",
        format!("translateY({})", px(metrics.scroll_top)),
    ));
    effects.push(Effect::style(
        Target::Panel,
        "height",
        px(metrics.viewport_height),
    ));
    effects.push(Effect::style(
        Target::Panel,
        "transform",
        format!("translateX(100%) translateY({})", px(metrics.scroll_top)),
    ));
    effects.push(Effect::style(Target::Panel, "margin-top", px(0.0)));
    effects
}

/// Starts closing. Returns `None` unless the drawer is open.
pub fn begin_close(state: &mut DrawerState) -> Option<Effects> {
    if state.visibility != Visibility::Open {
        return None;
    }
    state.visibility = Visibility::Closing;
    log::debug!("drawer {} closing", state.id);

    let mut effects = Effects::new();
    effects.push(Effect::remove_class(
        Target::Body,
        classes::body_open(state.config.direction()),
    ));
    Some(effects)
}

/// Completes a close. Returns `None` unless a close is pending, so stray
/// `transitionend` events from unrelated transitions are harmless.
pub fn finish_close(state: &mut DrawerState) -> Option<Effects> {
    if state.visibility != Visibility::Closing {
        return None;
    }
    state.visibility = Visibility::Closed;
    state.is_open = false;
    log::debug!("drawer {} closed", state.id);

    let mut effects = Effects::new();
    effects.push(Effect::style(
        Target::FixedHeader,
        "transform",
        format!("translateY({})", px(0.0)),
    ));
    effects.push(Effect::attribute(Target::Trigger, "aria-expanded", false));
    effects.push(Effect::remove_class(Target::Trigger, classes::BUTTON_ACTIVE));
    effects.push(Effect::attribute(Target::Backdrop, "aria-hidden", true));
    Some(effects)
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;
