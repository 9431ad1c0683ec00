use super::*;
use crate::config::{Direction, DrawerOptions};
use crate::effect::{Effect, Target};
use crate::test_support::state_with;

fn metrics() -> OpenMetrics {
    OpenMetrics {
        scroll_top: 120.0,
        viewport_height: 800.0,
    }
}

#[test]
fn open_projects_state_onto_trigger_backdrop_and_body() {
    let mut state = state_with(DrawerOptions::default());
    state.scroll_offset = -300.0;

    let effects = open(&mut state, metrics());

    assert!(state.is_open());
    assert_eq!(state.visibility(), Visibility::Open);
    assert_eq!(state.scroll_offset(), 0.0);
    assert!(effects.contains(&Effect::attribute(Target::Trigger, "aria-expanded", "true")));
    assert!(effects.contains(&Effect::add_class(Target::Trigger, "js-drawer-btn-active")));
    assert!(effects.contains(&Effect::attribute(Target::Backdrop, "aria-hidden", "false")));
    assert!(effects.contains(&Effect::add_class(Target::Body, "js-drawer-body-right")));
}

#[test]
fn open_positions_panel_and_header_at_page_scroll() {
    let mut state = state_with(DrawerOptions::default());
    let effects = open(&mut state, metrics());

    assert!(effects.contains(&Effect::style(
        Target::FixedHeader,
        "transform",
        "translateY(120px)"
    )));
    assert!(effects.contains(&Effect::style(Target::Panel, "height", "800px")));
    assert!(effects.contains(&Effect::style(
        Target::Panel,
        "transform",
        "translateX(100%) translateY(120px)"
    )));
    assert!(effects.contains(&Effect::style(Target::Panel, "margin-top", "0px")));
}

#[test]
fn close_is_ignored_unless_open() {
    let mut state = state_with(DrawerOptions::default());
    assert!(begin_close(&mut state).is_none());
    assert_eq!(state.visibility(), Visibility::Closed);
}

#[test]
fn begin_close_removes_directional_class_but_stays_open() {
    let mut state = state_with(DrawerOptions::default().with_direction(Direction::Left));
    open(&mut state, metrics());

    let effects = begin_close(&mut state).expect("closing");

    assert_eq!(state.visibility(), Visibility::Closing);
    assert!(state.is_open(), "open until the transition ends");
    assert_eq!(
        effects.as_slice(),
        &[Effect::remove_class(Target::Body, "js-drawer-body-left")]
    );
    assert!(begin_close(&mut state).is_none(), "second close is a no-op");
}

#[test]
fn finish_close_resets_aria_and_header() {
    let mut state = state_with(DrawerOptions::default());
    open(&mut state, metrics());
    begin_close(&mut state);

    let effects = finish_close(&mut state).expect("closed");

    assert!(!state.is_open());
    assert_eq!(state.visibility(), Visibility::Closed);
    assert!(effects.contains(&Effect::attribute(Target::Trigger, "aria-expanded", "false")));
    assert!(effects.contains(&Effect::remove_class(Target::Trigger, "js-drawer-btn-active")));
    assert!(effects.contains(&Effect::attribute(Target::Backdrop, "aria-hidden", "true")));
    assert!(effects.contains(&Effect::style(
        Target::FixedHeader,
        "transform",
        "translateY(0px)"
    )));
}

#[test]
fn stray_transition_end_does_not_close() {
    let mut state = state_with(DrawerOptions::default());
    assert!(finish_close(&mut state).is_none());

    open(&mut state, metrics());
    assert!(finish_close(&mut state).is_none());
    assert!(state.is_open());
}

#[test]
fn reopening_while_closing_abandons_the_close() {
    let mut state = state_with(DrawerOptions::default());
    open(&mut state, metrics());
    begin_close(&mut state);
    open(&mut state, metrics());

    assert_eq!(state.visibility(), Visibility::Open);
    assert!(finish_close(&mut state).is_none());
    assert!(state.is_open());
}
