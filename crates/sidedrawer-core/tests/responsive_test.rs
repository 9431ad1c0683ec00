//! Tests for breakpoint-driven responsive mode
//!
//! Resizes are coalesced to one recompute per animation frame, and a
//! recompute for an unchanged width writes nothing.

use sidedrawer_core::{Dom, ResponsiveMode, TaskHandle};
use sidedrawer_testing::prelude::*;

fn harness_at(width: f64, options: DrawerOptions) -> DrawerHarness {
    let page = Page::standard();
    page.dom.set_viewport(width, Page::VIEWPORT_HEIGHT);
    DrawerHarness::with_page(page, ManualScheduler::new(), options)
}

fn assert_hidden(harness: &DrawerHarness) {
    assert_eq!(harness.drawer().state().responsive(), ResponsiveMode::Hidden);
    assert_has_class(harness.dom(), harness.body(), "js-drawer-body-active", "body");
    assert_attribute(harness.dom(), harness.page().panel, "aria-hidden", "true", "panel");
}

#[test]
fn test_breakpoint_switches_between_hidden_and_visible() {
    let options = DrawerOptions::default()
        .with_direction(Direction::Left)
        .with_breakpoint(768);
    let mut harness = harness_at(500.0, options);
    assert_hidden(&harness);

    let panel = harness.page().panel;
    harness.dom().set_style(&panel, "transform", "translateX(100%)");
    harness.resize(1000.0);

    assert_eq!(harness.drawer().state().responsive(), ResponsiveMode::Visible);
    assert_lacks_class(harness.dom(), harness.body(), "js-drawer-body-active", "body");
    assert_style(harness.dom(), panel, "transform", None, "transform cleared");
    assert_attribute(harness.dom(), panel, "aria-hidden", "false", "panel");
    assert_eq!(harness.dom().click_count(panel), 1);

    harness.resize(768.0);
    assert_hidden(&harness);
}

#[test]
fn test_width_equal_to_breakpoint_is_hidden() {
    let harness = harness_at(768.0, DrawerOptions::default().with_breakpoint(768));
    assert_hidden(&harness);
}

#[test]
fn test_always_hidden_at_every_width() {
    let mut harness = harness_at(375.0, DrawerOptions::default());
    assert_hidden(&harness);
    for width in [1000.0, 1920.0, 5000.0] {
        harness.resize(width);
        assert_hidden(&harness);
    }
    assert_eq!(harness.dom().click_count(harness.page().panel), 0);
}

#[test]
fn test_keep_open_breakpoint_respects_marker() {
    let page = Page::standard();
    page.dom.add_class(&page.panel, "js-drawer-open");
    let harness = DrawerHarness::with_page(
        page,
        ManualScheduler::new(),
        DrawerOptions::default().with_breakpoint(1),
    );

    assert_eq!(
        harness.drawer().state().responsive(),
        ResponsiveMode::Unresolved
    );
    assert_lacks_class(harness.dom(), harness.body(), "js-drawer-body-active", "body");
    assert_eq!(harness.drawer().state().viewport_width(), Some(Page::VIEWPORT_WIDTH));
}

#[test]
fn test_keep_open_breakpoint_without_marker_is_visible() {
    let harness = harness_at(375.0, DrawerOptions::default().with_breakpoint(1));
    assert_eq!(harness.drawer().state().responsive(), ResponsiveMode::Visible);
}

#[test]
fn test_marker_is_read_from_the_document_not_the_open_state() {
    // The page pins the panel open itself; the drawer was never opened.
    let page = Page::standard();
    page.dom.add_class(&page.panel, "js-drawer-open");
    page.dom.set_viewport(500.0, Page::VIEWPORT_HEIGHT);
    let mut harness = DrawerHarness::with_page(
        page,
        ManualScheduler::new(),
        DrawerOptions::default().with_breakpoint(768),
    );

    assert!(!harness.drawer().is_open());
    assert_eq!(
        harness.drawer().state().responsive(),
        ResponsiveMode::Unresolved
    );

    // Opening through the drawer never adds the marker, so it does not pin.
    let panel = harness.page().panel;
    harness.dom().remove_class(&panel, "js-drawer-open");
    harness.click_trigger();
    harness.resize(600.0);
    assert_hidden(&harness);
}

#[test]
fn test_unchanged_width_writes_nothing() {
    let mut harness = harness_at(500.0, DrawerOptions::default().with_breakpoint(768));
    harness.dom().clear_mutations();

    // Height-only resize.
    harness.dom().set_viewport(500.0, 600.0);
    harness.send(InputEvent::Resize);
    assert_eq!(harness.flush_frames(), 1);

    assert_eq!(harness.dom().mutation_count(), 0);
}

#[test]
fn test_resize_burst_recomputes_once() {
    let mut harness = harness_at(500.0, DrawerOptions::default().with_breakpoint(768));
    let panel = harness.page().panel;

    harness.dom().set_viewport_width(900.0);
    harness.send(InputEvent::Resize);
    harness.dom().set_viewport_width(1000.0);
    harness.send(InputEvent::Resize);
    harness.dom().set_viewport_width(1100.0);
    harness.send(InputEvent::Resize);

    assert_eq!(harness.scheduler().pending_frames().len(), 1);
    assert_eq!(harness.scheduler().cancelled().len(), 2);
    assert_eq!(harness.flush_frames(), 1);

    assert_eq!(harness.drawer().state().viewport_width(), Some(1100.0));
    assert_eq!(harness.dom().click_count(panel), 1);
}

#[test]
fn test_cancelled_frame_is_ignored() {
    let mut harness = harness_at(500.0, DrawerOptions::default().with_breakpoint(768));
    harness.dom().set_viewport_width(1000.0);
    harness.send(InputEvent::Resize);
    let superseded = harness.scheduler().pending_frames()[0];
    harness.send(InputEvent::Resize);

    harness.send(InputEvent::Frame(superseded));
    assert_eq!(harness.drawer().state().responsive(), ResponsiveMode::Hidden);

    harness.send(InputEvent::Frame(TaskHandle::new(9_999)));
    assert_eq!(harness.drawer().state().responsive(), ResponsiveMode::Hidden);

    harness.flush_frames();
    assert_eq!(harness.drawer().state().responsive(), ResponsiveMode::Visible);
}

#[test]
fn test_without_frames_recomputes_synchronously() {
    let page = Page::standard();
    page.dom.set_viewport(500.0, Page::VIEWPORT_HEIGHT);
    let mut harness = DrawerHarness::with_page(
        page,
        ManualScheduler::without_frames(),
        DrawerOptions::default().with_breakpoint(768),
    );

    harness.dom().set_viewport_width(1000.0);
    harness.send(InputEvent::Resize);

    assert_eq!(harness.drawer().state().responsive(), ResponsiveMode::Visible);
    assert!(harness.scheduler().pending_frames().is_empty());
}
