//! Breakpoint-driven responsive mode.
//!
//! Below (or at) the breakpoint the drawer behaves as an off-canvas panel;
//! above it the panel is shown inline. The decision is recomputed only when
//! the viewport width actually changes.

use crate::classes;
use crate::config::Breakpoint;
use crate::effect::{Effect, Effects, Target};
use crate::state::DrawerState;

/// Mode the responsive monitor last put the drawer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsiveMode {
    #[default]
    Unresolved,
    /// Off-canvas: the panel is hidden until opened.
    Hidden,
    /// Inline: the panel is part of the page.
    Visible,
}

/// Outcome of applying the breakpoint rule to one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The panel is pinned open and the breakpoint leaves it alone.
    Untouched,
    Hidden,
    Visible,
}

/// The breakpoint rule.
///
/// `open_marker` reports whether the panel carries
/// [`PANEL_OPEN_MARKER`](crate::classes::PANEL_OPEN_MARKER). It is read from
/// the document rather than from [`DrawerState::is_open`]: pages pin the
/// panel open by setting that class themselves.
pub fn decide(breakpoint: Breakpoint, width: f64, open_marker: bool) -> Decision {
    if open_marker && (breakpoint.keeps_explicit_open() || breakpoint.covers(width)) {
        Decision::Untouched
    } else if breakpoint.is_always_hidden() || breakpoint.covers(width) {
        Decision::Hidden
    } else {
        Decision::Visible
    }
}

/// Recomputes responsive mode for a newly observed `width`.
///
/// Returns `None` when the width is unchanged (height-only resize).
pub fn recompute(state: &mut DrawerState, width: f64, open_marker: bool) -> Option<Effects> {
    if state.viewport_width == Some(width) {
        return None;
    }
    state.viewport_width = Some(width);

    let mut effects = Effects::new();
    match decide(state.config.breakpoint(), width, open_marker) {
        Decision::Untouched => {
            log::debug!("width {width}: panel pinned open, responsive mode untouched");
        }
        Decision::Visible => {
            log::debug!("width {width}: entering responsive-visible mode");
            state.responsive = ResponsiveMode::Visible;
            effects.push(Effect::remove_class(Target::Body, classes::BODY_ACTIVE));
            effects.push(Effect::style(Target::Panel, "transform", ""));
            effects.push(Effect::attribute(Target::Panel, "aria-hidden", false));
            effects.push(Effect::Click(Target::Panel));
        }
        Decision::Hidden => {
            log::debug!("width {width}: entering responsive-hidden mode");
            state.responsive = ResponsiveMode::Hidden;
            effects.push(Effect::add_class(Target::Body, classes::BODY_ACTIVE));
            effects.push(Effect::attribute(Target::Panel, "aria-hidden", true));
        }
    }
    Some(effects)
}

#[cfg(test)]
#[path = "tests/responsive_tests.rs"]
mod tests;
