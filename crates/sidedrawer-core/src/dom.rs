//! Document access capability consumed by the drawer.
//!
//! The drawer never touches a global `window`/`document`. Hosts hand it an
//! implementation of [`Dom`]: `sidedrawer-platform-web` wraps `web-sys`, and
//! `sidedrawer-testing` provides an in-memory document for tests.
//!
//! Every method is infallible. Nodes can be removed from the page between
//! binding and use, so implementations treat a detached node as a no-op
//! target (reads return neutral values).

/// Primitive DOM operations the drawer depends on.
pub trait Dom {
    /// Handle to an element. Equality must mean "same element".
    type Node: Clone + PartialEq + std::fmt::Debug;

    /// The document `<body>`.
    fn body(&self) -> Option<Self::Node>;

    /// First element in the document matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// Descendants of `root` matching `selector`, in document order.
    fn query_all(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Creates an empty `<div>` with `class_name` and inserts it as the next
    /// sibling of `anchor`.
    fn insert_after(&self, anchor: &Self::Node, class_name: &str) -> Option<Self::Node>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn add_class(&self, node: &Self::Node, class_name: &str);

    fn remove_class(&self, node: &Self::Node, class_name: &str);

    fn has_class(&self, node: &Self::Node, class_name: &str) -> bool;

    /// Sets an inline style property. An empty `value` clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn focus(&self, node: &Self::Node);

    /// Dispatches a synthetic activation (`click`) on `node`.
    fn click(&self, node: &Self::Node);

    /// Rendered height of `node` including overflowing content, in CSS pixels.
    fn offset_height(&self, node: &Self::Node) -> f64;

    fn viewport_width(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Current vertical page scroll position.
    fn scroll_top(&self) -> f64;

    /// A fresh identifier, unique within the document.
    fn unique_id(&self) -> String;
}
