use super::*;
use crate::config::DrawerOptions;
use crate::effect::{Effect, Target};
use crate::test_support::state_with;

#[test]
fn always_hidden_sentinel_hides_at_every_width() {
    for width in [0.0, 320.0, 768.0, 1920.0, 10_000.0] {
        assert_eq!(
            decide(Breakpoint::ALWAYS_HIDDEN, width, false),
            Decision::Hidden
        );
    }
}

#[test]
fn threshold_hides_at_or_below_and_shows_above() {
    let bp = Breakpoint::new(768);
    assert_eq!(decide(bp, 500.0, false), Decision::Hidden);
    assert_eq!(decide(bp, 768.0, false), Decision::Hidden);
    assert_eq!(decide(bp, 1000.0, false), Decision::Visible);
}

#[test]
fn keep_open_sentinel_respects_marker_at_any_width() {
    for width in [1.0, 500.0, 1000.0, 4000.0] {
        assert_eq!(
            decide(Breakpoint::KEEP_OPEN, width, true),
            Decision::Untouched
        );
    }
    assert_eq!(decide(Breakpoint::KEEP_OPEN, 1000.0, false), Decision::Visible);
}

#[test]
fn marker_only_pins_below_an_ordinary_threshold() {
    let bp = Breakpoint::new(768);
    assert_eq!(decide(bp, 500.0, true), Decision::Untouched);
    assert_eq!(decide(bp, 1000.0, true), Decision::Visible);
}

#[test]
fn always_hidden_with_marker_is_not_pinned() {
    // -1 never covers a real width, so the marker alone does not pin it
    assert_eq!(
        decide(Breakpoint::ALWAYS_HIDDEN, 800.0, true),
        Decision::Hidden
    );
}

#[test]
fn unchanged_width_is_skipped() {
    let mut state = state_with(DrawerOptions::default());
    assert!(recompute(&mut state, 800.0, false).is_some());
    assert!(recompute(&mut state, 800.0, false).is_none());
    assert_eq!(state.viewport_width(), Some(800.0));
}

#[test]
fn hidden_mode_effects() {
    let mut state = state_with(DrawerOptions::default().with_breakpoint(768));
    let effects = recompute(&mut state, 500.0, false).expect("width changed");

    assert_eq!(state.responsive(), ResponsiveMode::Hidden);
    assert_eq!(
        effects.as_slice(),
        &[
            Effect::add_class(Target::Body, "js-drawer-body-active"),
            Effect::attribute(Target::Panel, "aria-hidden", "true"),
        ]
    );
}

#[test]
fn visible_mode_effects_clear_transform_and_activate_panel() {
    let mut state = state_with(DrawerOptions::default().with_breakpoint(768));
    let effects = recompute(&mut state, 1000.0, false).expect("width changed");

    assert_eq!(state.responsive(), ResponsiveMode::Visible);
    assert_eq!(
        effects.as_slice(),
        &[
            Effect::remove_class(Target::Body, "js-drawer-body-active"),
            Effect::style(Target::Panel, "transform", ""),
            Effect::attribute(Target::Panel, "aria-hidden", "false"),
            Effect::Click(Target::Panel),
        ]
    );
}

#[test]
fn pinned_panel_records_width_without_effects() {
    let mut state = state_with(DrawerOptions::default().with_breakpoint(1));
    let effects = recompute(&mut state, 1200.0, true).expect("width changed");
    assert!(effects.is_empty());
    assert_eq!(state.responsive(), ResponsiveMode::Unresolved);
    assert_eq!(state.viewport_width(), Some(1200.0));
}

#[test]
fn open_flag_is_not_consulted_only_the_marker_class() {
    // The drawer's own open flag and the page's marker class can disagree;
    // the rule follows the marker.
    let mut state = state_with(DrawerOptions::default().with_breakpoint(1));
    state.is_open = true;
    let effects = recompute(&mut state, 1200.0, false).expect("width changed");
    assert_eq!(state.responsive(), ResponsiveMode::Visible);
    assert!(effects.contains(&Effect::Click(Target::Panel)));
}
