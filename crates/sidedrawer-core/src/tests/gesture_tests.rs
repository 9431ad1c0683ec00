use super::*;
use crate::effect::{Effect, Target};
use crate::test_support::{open_state, state_with};
use crate::DrawerOptions;

fn margin_of(effects: &Effects) -> Option<&str> {
    effects.iter().find_map(|effect| match effect {
        Effect::SetStyle {
            target: Target::Panel,
            property: "margin-top",
            value,
        } => Some(value.as_str()),
        _ => None,
    })
}

#[test]
fn touch_start_resets_velocity_and_anchor() {
    let mut state = open_state();
    state.velocity = 12.0;
    state.gesture = GesturePhase::Settling;

    let effects = touch_start(&mut state, 500.0);

    assert_eq!(state.gesture, GesturePhase::Dragging);
    assert_eq!(state.velocity, 0.0);
    assert_eq!(state.drag_anchor_y, 500.0);
    assert_eq!(
        effects.as_slice(),
        &[Effect::style(Target::Panel, "height", "auto")]
    );
}

#[test]
fn touch_move_is_ignored_while_closed() {
    let mut state = state_with(DrawerOptions::default());
    touch_start(&mut state, 500.0);

    let bounds = ScrollBounds::new(2000.0, 800.0);
    assert!(touch_move(&mut state, 300.0, bounds).is_none());
    assert_eq!(state.scroll_offset, 0.0);
    assert_eq!(state.drag_anchor_y, 500.0);
}

#[test]
fn touch_move_requires_a_drag_in_progress() {
    let mut state = open_state();
    let bounds = ScrollBounds::new(2000.0, 800.0);
    assert!(touch_move(&mut state, 300.0, bounds).is_none());
}

#[test]
fn drag_moves_offset_by_delta_and_records_velocity() {
    let mut state = open_state();
    let bounds = ScrollBounds::new(2000.0, 800.0);
    touch_start(&mut state, 500.0);

    let effects = touch_move(&mut state, 300.0, bounds).expect("handled");

    assert_eq!(state.scroll_offset, -200.0);
    assert_eq!(state.velocity, -200.0);
    assert_eq!(state.drag_anchor_y, 300.0);
    assert_eq!(margin_of(&effects), Some("-200px"));
}

#[test]
fn drag_is_clamped_to_content_height() {
    let mut state = open_state();
    let bounds = ScrollBounds::new(1000.0, 800.0);
    touch_start(&mut state, 700.0);
    touch_move(&mut state, 100.0, bounds);
    assert_eq!(state.scroll_offset, -200.0);
    assert_eq!(state.velocity, -600.0);

    touch_move(&mut state, 900.0, bounds);
    assert_eq!(state.scroll_offset, 0.0);
}

#[test]
fn offset_stays_within_bounds_for_any_drag_sequence() {
    let bounds = ScrollBounds::new(1750.0, 640.0);
    let mut state = open_state();
    touch_start(&mut state, 400.0);

    // deterministic pseudo-random walk
    let mut seed: u64 = 0x5eed;
    let mut y = 400.0;
    for _ in 0..500 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let step = ((seed >> 33) % 401) as f64 - 200.0;
        y += step;
        touch_move(&mut state, y, bounds);
        assert!(state.scroll_offset <= 0.0);
        assert!(state.scroll_offset >= -bounds.max_overflow());
    }
}

#[test]
fn short_content_absorbs_every_delta() {
    let bounds = ScrollBounds::new(500.0, 800.0);
    assert_eq!(bounds.max_overflow(), 0.0);

    let mut state = open_state();
    touch_start(&mut state, 500.0);
    let effects = touch_move(&mut state, 100.0, bounds).expect("handled");
    assert_eq!(state.scroll_offset, 0.0);
    assert_eq!(margin_of(&effects), Some("0px"));
}

#[test]
fn touch_end_only_settles_an_active_drag() {
    let mut state = open_state();
    assert!(!touch_end(&mut state));
    assert_eq!(state.gesture, GesturePhase::Idle);

    touch_start(&mut state, 10.0);
    assert!(touch_end(&mut state));
    assert_eq!(state.gesture, GesturePhase::Settling);
}

#[test]
fn momentum_tick_reapplies_offset_and_settles_to_idle() {
    let mut state = open_state();
    let bounds = ScrollBounds::new(2000.0, 800.0);
    touch_start(&mut state, 500.0);
    touch_move(&mut state, 490.0, bounds);
    touch_end(&mut state);

    let (effects, finished) = momentum_tick(&mut state, bounds);
    assert!(!finished);
    assert!(margin_of(&effects).is_some());
    assert!(state.scroll_offset < -10.0);

    let mut ticks = 1;
    loop {
        let (effects, finished) = momentum_tick(&mut state, bounds);
        assert!(margin_of(&effects).is_some(), "offset reapplied every tick");
        ticks += 1;
        if finished {
            break;
        }
        assert!(ticks < 100, "run should settle");
    }
    assert_eq!(state.gesture, GesturePhase::Idle);
}
