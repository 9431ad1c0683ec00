//! Touch-drag scrolling of the open panel.
//!
//! While the drawer is open the whole window's vertical touch movement is
//! routed into the panel: each move shifts the panel's `margin-top` by the
//! finger delta, clamped so the panel never reveals space above its top edge
//! or below its content. Releasing hands the last delta to
//! [`momentum`](crate::momentum) as a per-tick velocity.

use crate::effect::{px, Effect, Effects, Target};
use crate::momentum;
use crate::state::DrawerState;

/// Phase of the current touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Range the scroll offset may take: `[-max_overflow, 0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    max_overflow: f64,
}

impl ScrollBounds {
    /// Bounds for a panel whose content is `content_height` tall inside a
    /// viewport `viewport_height` tall. Content that fits gives a zero range.
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            max_overflow: (content_height - viewport_height).max(0.0),
        }
    }

    pub fn max_overflow(self) -> f64 {
        self.max_overflow
    }

    /// Clamps `offset` into range. The flag reports whether it was outside.
    pub fn clamp(self, offset: f64) -> (f64, bool) {
        if offset < -self.max_overflow {
            (-self.max_overflow, true)
        } else if offset > 0.0 {
            (0.0, true)
        } else {
            (offset, false)
        }
    }
}

fn margin(offset: f64) -> Effect {
    Effect::style(Target::Panel, "margin-top", px(offset))
}

/// Starts a touch sequence from any phase.
///
/// The caller cancels any running momentum timer first.
pub fn touch_start(state: &mut DrawerState, y: f64) -> Effects {
    state.gesture = GesturePhase::Dragging;
    state.velocity = 0.0;
    state.drag_anchor_y = y;
    let mut effects = Effects::new();
    effects.push(Effect::style(Target::Panel, "height", "auto"));
    effects
}

/// Tracks a finger move.
///
/// Returns `None` when the move is not ours to handle (drawer not open, or no
/// drag in progress); the platform then keeps its default scrolling.
pub fn touch_move(state: &mut DrawerState, y: f64, bounds: ScrollBounds) -> Option<Effects> {
    if !state.is_open || state.gesture != GesturePhase::Dragging {
        return None;
    }
    let delta = y - state.drag_anchor_y;
    let (offset, _) = bounds.clamp(state.scroll_offset + delta);
    state.scroll_offset = offset;
    state.drag_anchor_y = y;
    state.velocity = delta;
    log::trace!("drag delta {delta}, offset {offset}");

    let mut effects = Effects::new();
    effects.push(margin(offset));
    Some(effects)
}

/// Ends the touch sequence. Returns `true` when a momentum run should start.
pub fn touch_end(state: &mut DrawerState) -> bool {
    if state.gesture != GesturePhase::Dragging {
        return false;
    }
    state.gesture = GesturePhase::Settling;
    true
}

/// One momentum tick. The flag is `true` once the run is over and the phase
/// is back to idle; the caller must then stop the timer.
pub fn momentum_tick(state: &mut DrawerState, bounds: ScrollBounds) -> (Effects, bool) {
    let step = momentum::step(state.velocity, state.scroll_offset, bounds);
    state.velocity = step.velocity;
    state.scroll_offset = step.offset;
    let finished = step.outcome.is_finished();
    if finished {
        state.gesture = GesturePhase::Idle;
        log::trace!("momentum settled at {} ({:?})", step.offset, step.outcome);
    }

    let mut effects = Effects::new();
    effects.push(margin(state.scroll_offset));
    (effects, finished)
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
