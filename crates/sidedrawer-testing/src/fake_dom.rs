//! In-memory document implementing [`Dom`].
//!
//! `FakeDom` is a cheap handle: clones share the same document, so a test can
//! keep one clone for inspection after moving another into a drawer.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use sidedrawer_core::Dom;

use crate::selector::{self, Matchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One write performed through the [`Dom`] trait.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Insert { after: NodeId, node: NodeId },
    SetAttribute { node: NodeId, name: String, value: String },
    AddClass { node: NodeId, class: String },
    RemoveClass { node: NodeId, class: String },
    SetStyle { node: NodeId, property: String, value: String },
    Focus(NodeId),
    Click(NodeId),
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    content_height: f64,
    attached: bool,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            parent,
            children: Vec::new(),
            content_height: 0.0,
            attached: true,
        }
    }
}

impl Matchable for Element {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug)]
struct Document {
    elements: Vec<Element>,
    body: NodeId,
    viewport_width: f64,
    viewport_height: f64,
    scroll_top: f64,
    focused: Option<NodeId>,
    mutations: Vec<Mutation>,
    next_unique_id: u32,
}

impl Document {
    fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0).filter(|element| element.attached)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        let element = self.elements.get_mut(node.0).filter(|e| e.attached);
        if element.is_none() {
            log::warn!("fake dom: write to detached node {node:?} ignored");
        }
        element
    }

    /// Descendants of `root` in document order, `root` excluded.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.element(root) {
            Some(element) => element.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(element) = self.element(node) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        out
    }

    fn select(&self, root: NodeId, include_root: bool, selector: &str) -> Vec<NodeId> {
        let compounds = selector::parse(selector);
        let mut candidates = Vec::new();
        if include_root {
            candidates.push(root);
        }
        candidates.extend(self.descendants(root));
        candidates
            .into_iter()
            .filter(|node| {
                self.element(*node)
                    .is_some_and(|element| compounds.iter().any(|c| c.matches(element)))
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct FakeDom {
    doc: Rc<RefCell<Document>>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    /// An empty document with a `<body>` and a 1024x768 viewport.
    pub fn new() -> Self {
        let body = Element::new("body", None);
        Self {
            doc: Rc::new(RefCell::new(Document {
                elements: vec![body],
                body: NodeId(0),
                viewport_width: 1024.0,
                viewport_height: 768.0,
                scroll_top: 0.0,
                focused: None,
                mutations: Vec::new(),
                next_unique_id: 1,
            })),
        }
    }

    pub fn body_node(&self) -> NodeId {
        self.doc.borrow().body
    }

    /// Appends a child element. A `class` entry is split into classes; every
    /// other pair becomes an attribute. Setup writes are not recorded as
    /// mutations.
    pub fn append(&self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let mut doc = self.doc.borrow_mut();
        let id = NodeId(doc.elements.len());
        let mut element = Element::new(tag, Some(parent));
        for (name, value) in attributes {
            if *name == "class" {
                element
                    .classes
                    .extend(value.split_whitespace().map(str::to_owned));
            } else {
                element
                    .attributes
                    .insert((*name).to_owned(), (*value).to_owned());
            }
        }
        doc.elements.push(element);
        doc.elements[parent.0].children.push(id);
        id
    }

    /// Removes `node` and its subtree from the document.
    pub fn detach(&self, node: NodeId) {
        let mut doc = self.doc.borrow_mut();
        let mut subtree = doc.descendants(node);
        subtree.push(node);
        if let Some(parent) = doc.elements.get(node.0).and_then(|e| e.parent) {
            doc.elements[parent.0].children.retain(|child| *child != node);
        }
        for id in subtree {
            doc.elements[id.0].attached = false;
        }
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        let mut doc = self.doc.borrow_mut();
        doc.viewport_width = width;
        doc.viewport_height = height;
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.doc.borrow_mut().viewport_width = width;
    }

    pub fn set_scroll_top(&self, scroll_top: f64) {
        self.doc.borrow_mut().scroll_top = scroll_top;
    }

    /// Height of the element's content. `offset_height` reports it unless an
    /// inline `height` in pixels overrides it.
    pub fn set_content_height(&self, node: NodeId, height: f64) {
        if let Some(element) = self.doc.borrow_mut().elements.get_mut(node.0) {
            element.content_height = height;
        }
    }

    /// Marks `node` as the current keyboard focus, as a user would.
    pub fn set_focused(&self, node: NodeId) {
        self.doc.borrow_mut().focused = Some(node);
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.doc.borrow().focused
    }

    pub fn attribute_of(&self, node: NodeId, name: &str) -> Option<String> {
        self.doc
            .borrow()
            .element(node)
            .and_then(|element| element.attributes.get(name).cloned())
    }

    pub fn classes_of(&self, node: NodeId) -> Vec<String> {
        self.doc
            .borrow()
            .element(node)
            .map(|element| element.classes.clone())
            .unwrap_or_default()
    }

    pub fn style_of(&self, node: NodeId, property: &str) -> Option<String> {
        self.doc
            .borrow()
            .element(node)
            .and_then(|element| element.styles.get(property).cloned())
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let doc = self.doc.borrow();
        let parent = doc.element(node)?.parent?;
        let siblings = &doc.element(parent)?.children;
        let index = siblings.iter().position(|child| *child == node)?;
        siblings.get(index + 1).copied()
    }

    pub fn tag_of(&self, node: NodeId) -> Option<String> {
        self.doc.borrow().element(node).map(|e| e.tag.clone())
    }

    pub fn element_count(&self) -> usize {
        self.doc.borrow().elements.len()
    }

    pub fn click_count(&self, node: NodeId) -> usize {
        self.doc
            .borrow()
            .mutations
            .iter()
            .filter(|m| **m == Mutation::Click(node))
            .count()
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.doc.borrow().mutations.clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.doc.borrow().mutations.len()
    }

    pub fn clear_mutations(&self) {
        self.doc.borrow_mut().mutations.clear();
    }

    fn record(&self, mutation: Mutation) {
        self.doc.borrow_mut().mutations.push(mutation);
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        let doc = self.doc.borrow();
        doc.element(doc.body).map(|_| doc.body)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        let doc = self.doc.borrow();
        doc.select(doc.body, true, selector).into_iter().next()
    }

    fn query_all(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.doc.borrow().select(*root, false, selector)
    }

    fn insert_after(&self, anchor: &NodeId, class_name: &str) -> Option<NodeId> {
        let parent = self.doc.borrow().element(*anchor)?.parent?;
        let node = {
            let mut doc = self.doc.borrow_mut();
            let index = doc.elements[parent.0]
                .children
                .iter()
                .position(|child| child == anchor)?;
            let node = NodeId(doc.elements.len());
            let mut element = Element::new("div", Some(parent));
            element.classes.push(class_name.to_owned());
            doc.elements.push(element);
            doc.elements[parent.0].children.insert(index + 1, node);
            node
        };
        self.record(Mutation::Insert {
            after: *anchor,
            node,
        });
        Some(node)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        {
            let mut doc = self.doc.borrow_mut();
            let Some(element) = doc.element_mut(*node) else {
                return;
            };
            element
                .attributes
                .insert(name.to_owned(), value.to_owned());
        }
        self.record(Mutation::SetAttribute {
            node: *node,
            name: name.to_owned(),
            value: value.to_owned(),
        });
    }

    fn add_class(&self, node: &NodeId, class_name: &str) {
        {
            let mut doc = self.doc.borrow_mut();
            let Some(element) = doc.element_mut(*node) else {
                return;
            };
            if !element.has_class(class_name) {
                element.classes.push(class_name.to_owned());
            }
        }
        self.record(Mutation::AddClass {
            node: *node,
            class: class_name.to_owned(),
        });
    }

    fn remove_class(&self, node: &NodeId, class_name: &str) {
        {
            let mut doc = self.doc.borrow_mut();
            let Some(element) = doc.element_mut(*node) else {
                return;
            };
            element.classes.retain(|class| class != class_name);
        }
        self.record(Mutation::RemoveClass {
            node: *node,
            class: class_name.to_owned(),
        });
    }

    fn has_class(&self, node: &NodeId, class_name: &str) -> bool {
        self.doc
            .borrow()
            .element(*node)
            .is_some_and(|element| element.has_class(class_name))
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        {
            let mut doc = self.doc.borrow_mut();
            let Some(element) = doc.element_mut(*node) else {
                return;
            };
            if value.is_empty() {
                element.styles.remove(property);
            } else {
                element.styles.insert(property.to_owned(), value.to_owned());
            }
        }
        self.record(Mutation::SetStyle {
            node: *node,
            property: property.to_owned(),
            value: value.to_owned(),
        });
    }

    fn focus(&self, node: &NodeId) {
        {
            let mut doc = self.doc.borrow_mut();
            if doc.element(*node).is_none() {
                return;
            }
            doc.focused = Some(*node);
        }
        self.record(Mutation::Focus(*node));
    }

    fn click(&self, node: &NodeId) {
        if self.doc.borrow().element(*node).is_none() {
            return;
        }
        self.record(Mutation::Click(*node));
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        let doc = self.doc.borrow();
        let Some(element) = doc.element(*node) else {
            return 0.0;
        };
        element
            .styles
            .get("height")
            .and_then(|height| height.strip_suffix("px"))
            .and_then(|px| px.parse::<f64>().ok())
            .unwrap_or(element.content_height)
    }

    fn viewport_width(&self) -> f64 {
        self.doc.borrow().viewport_width
    }

    fn viewport_height(&self) -> f64 {
        self.doc.borrow().viewport_height
    }

    fn scroll_top(&self) -> f64 {
        self.doc.borrow().scroll_top
    }

    fn unique_id(&self) -> String {
        let mut doc = self.doc.borrow_mut();
        let id = doc.next_unique_id;
        doc.next_unique_id += 1;
        format!("drawer{id}")
    }
}
