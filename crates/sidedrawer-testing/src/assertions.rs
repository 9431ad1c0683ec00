//! Assertion utilities for drawer tests
//!
//! Failures print the node's current classes or attributes so a broken
//! contract is readable without a debugger.

use crate::fake_dom::{FakeDom, NodeId};

/// Assert that a value is within `tolerance` of the expected value.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_has_class(dom: &FakeDom, node: NodeId, class: &str, msg: &str) {
    let classes = dom.classes_of(node);
    assert!(
        classes.iter().any(|c| c == class),
        "{}: class '{}' missing on {:?}, found {:?}",
        msg,
        class,
        node,
        classes
    );
}

pub fn assert_lacks_class(dom: &FakeDom, node: NodeId, class: &str, msg: &str) {
    let classes = dom.classes_of(node);
    assert!(
        !classes.iter().any(|c| c == class),
        "{}: class '{}' unexpectedly present on {:?}",
        msg,
        class,
        node
    );
}

/// Assert that `name` is set to `expected` on `node`.
pub fn assert_attribute(dom: &FakeDom, node: NodeId, name: &str, expected: &str, msg: &str) {
    let actual = dom.attribute_of(node, name);
    assert_eq!(
        actual.as_deref(),
        Some(expected),
        "{}: attribute '{}' on {:?}",
        msg,
        name,
        node
    );
}

/// Assert that an inline style is set to `expected`, or absent when
/// `expected` is `None`.
pub fn assert_style(dom: &FakeDom, node: NodeId, property: &str, expected: Option<&str>, msg: &str) {
    let actual = dom.style_of(node, property);
    assert_eq!(
        actual.as_deref(),
        expected,
        "{}: style '{}' on {:?}",
        msg,
        property,
        node
    );
}

/// Parses a `margin-top`-style pixel value.
pub fn px_value(value: &str) -> Option<f64> {
    value.strip_suffix("px")?.parse().ok()
}
