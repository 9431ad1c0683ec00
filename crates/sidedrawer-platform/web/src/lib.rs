//! Browser bindings for sidedrawer.
//!
//! [`mount`] binds a drawer to the live document, wires DOM listeners and
//! returns the shared drawer. From JavaScript use [`JsDrawer`]:
//!
//! ```js
//! const drawer = new JsDrawer(".js-drawer-panel", '{"direction": "left"}');
//! drawer.open();
//! ```

mod dom;
mod listeners;
mod scheduler;
mod sink;

use std::cell::RefCell;
use std::rc::Rc;

use sidedrawer_core::{Drawer, DrawerError, DrawerOptions};
use wasm_bindgen::prelude::*;

pub use dom::WebDom;
pub use scheduler::WebScheduler;
pub use sink::EventSink;

pub type WebDrawer = Drawer<WebDom, WebScheduler>;

fn to_js(err: DrawerError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Binds a drawer to the panel matching `panel_selector` in the current
/// document and starts listening for input.
pub fn mount(panel_selector: &str, options: DrawerOptions) -> Result<Rc<RefCell<WebDrawer>>, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let sink = EventSink::default();
    let drawer = Drawer::new(
        WebDom::new(window.clone(), document),
        WebScheduler::new(window.clone(), sink.clone()),
        panel_selector,
        options,
    )
    .map_err(to_js)?;
    let nodes = drawer.nodes().clone();
    let drawer = Rc::new(RefCell::new(drawer));
    sink.connect(&drawer);
    listeners::attach(&window, &nodes, &sink)?;
    Ok(drawer)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// JavaScript handle to a mounted drawer.
#[wasm_bindgen]
pub struct JsDrawer {
    inner: Rc<RefCell<WebDrawer>>,
}

#[wasm_bindgen]
impl JsDrawer {
    /// `options_json` is an optional JSON object in the `DrawerOptions`
    /// shape; missing keys take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(panel_selector: &str, options_json: Option<String>) -> Result<JsDrawer, JsValue> {
        let options = match options_json {
            Some(json) => DrawerOptions::from_json(&json).map_err(to_js)?,
            None => DrawerOptions::default(),
        };
        let inner = mount(panel_selector, options)?;
        Ok(JsDrawer { inner })
    }

    pub fn open(&self) {
        match self.inner.try_borrow_mut() {
            Ok(mut drawer) => drawer.open(),
            Err(_) => log::warn!("drawer busy; open() ignored"),
        }
    }

    pub fn close(&self) {
        match self.inner.try_borrow_mut() {
            Ok(mut drawer) => drawer.close(),
            Err(_) => log::warn!("drawer busy; close() ignored"),
        }
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|drawer| drawer.is_open())
            .unwrap_or(false)
    }
}
