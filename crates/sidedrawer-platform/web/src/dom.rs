//! [`Dom`] over the live browser document.

use sidedrawer_core::Dom;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Dom for WebDom {
    type Node = HtmlElement;

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn query(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.and_then(|element| element.dyn_into::<HtmlElement>().ok()),
            Err(err) => {
                log::warn!("invalid selector `{selector}`: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, root: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
        let list = match root.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("invalid selector `{selector}`: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn insert_after(&self, anchor: &HtmlElement, class_name: &str) -> Option<HtmlElement> {
        let element = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        element.set_class_name(class_name);
        if let Err(err) = anchor.after_with_node_1(&element) {
            log::error!("inserting `{class_name}` failed: {err:?}");
            return None;
        }
        Some(element)
    }

    fn set_attribute(&self, node: &HtmlElement, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            log::warn!("set_attribute({name}) failed: {err:?}");
        }
    }

    fn add_class(&self, node: &HtmlElement, class_name: &str) {
        if let Err(err) = node.class_list().add_1(class_name) {
            log::warn!("adding class `{class_name}` failed: {err:?}");
        }
    }

    fn remove_class(&self, node: &HtmlElement, class_name: &str) {
        if let Err(err) = node.class_list().remove_1(class_name) {
            log::warn!("removing class `{class_name}` failed: {err:?}");
        }
    }

    fn has_class(&self, node: &HtmlElement, class_name: &str) -> bool {
        node.class_list().contains(class_name)
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        let style = node.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            log::warn!("style {property}: {value} failed: {err:?}");
        }
    }

    fn focus(&self, node: &HtmlElement) {
        if let Err(err) = node.focus() {
            log::debug!("focus failed: {err:?}");
        }
    }

    fn click(&self, node: &HtmlElement) {
        node.click();
    }

    fn offset_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_height())
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_top(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn unique_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
