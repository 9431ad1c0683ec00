//! Drawer options and the frozen configuration derived from them.
//!
//! Options mirror the keys a page passes when it constructs a drawer, so they
//! deserialize from camelCase JSON. Every key is optional.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_BUTTON_SELECTOR: &str = ".js-drawer-btn";
pub const DEFAULT_FIXED_HEADER_SELECTOR: &str = ".js-drawer-fixed-header";
pub const DEFAULT_BUTTON_LABEL: &str = "Menu";
pub const DEFAULT_CLOSE_LABEL: &str = "Close";
pub const DEFAULT_FOCUSABLE_ELEMENTS: &str = "a[href], area[href], input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), button:not([disabled]), iframe, object, \
     embed, *[tabindex], *[contenteditable]";

/// Side of the viewport the panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// Viewport width threshold for responsive mode, in CSS pixels.
///
/// Two values are sentinels rather than thresholds: `-1` keeps the drawer in
/// responsive-hidden mode at every width, and `1` leaves an explicitly opened
/// panel alone on every resize. Both are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(i32);

impl Breakpoint {
    pub const ALWAYS_HIDDEN: Breakpoint = Breakpoint(-1);
    pub const KEEP_OPEN: Breakpoint = Breakpoint(1);

    pub const fn new(px: i32) -> Self {
        Self(px)
    }

    pub fn px(self) -> i32 {
        self.0
    }

    pub fn is_always_hidden(self) -> bool {
        self == Self::ALWAYS_HIDDEN
    }

    pub fn keeps_explicit_open(self) -> bool {
        self == Self::KEEP_OPEN
    }

    /// True when `width` is at or below the threshold.
    pub fn covers(self, width: f64) -> bool {
        f64::from(self.0) >= width
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::ALWAYS_HIDDEN
    }
}

/// Options recognised at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawerOptions {
    pub direction: Direction,
    pub breakpoint: Breakpoint,
    /// Selector for the trigger button.
    pub btn: String,
    pub btn_label: String,
    pub close_label: String,
    /// Selector for a header kept in place while the page is locked.
    /// `None`, or a selector that matches nothing, disables the behavior.
    pub fixed_header: Option<String>,
    pub focusable_elements: String,
    /// Completes a close after this many milliseconds when no
    /// `transitionend` arrives. Off by default.
    pub close_fallback_ms: Option<u32>,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            breakpoint: Breakpoint::default(),
            btn: DEFAULT_BUTTON_SELECTOR.into(),
            btn_label: DEFAULT_BUTTON_LABEL.into(),
            close_label: DEFAULT_CLOSE_LABEL.into(),
            fixed_header: Some(DEFAULT_FIXED_HEADER_SELECTOR.into()),
            focusable_elements: DEFAULT_FOCUSABLE_ELEMENTS.into(),
            close_fallback_ms: None,
        }
    }
}

impl DrawerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON object such as
    /// `{"direction": "left", "breakpoint": 768}`. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_breakpoint(mut self, px: i32) -> Self {
        self.breakpoint = Breakpoint::new(px);
        self
    }

    pub fn with_button(mut self, selector: impl Into<String>) -> Self {
        self.btn = selector.into();
        self
    }

    pub fn with_labels(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.btn_label = open.into();
        self.close_label = close.into();
        self
    }

    pub fn with_fixed_header(mut self, selector: Option<&str>) -> Self {
        self.fixed_header = selector.map(str::to_owned);
        self
    }

    pub fn with_focusable_elements(mut self, selector: impl Into<String>) -> Self {
        self.focusable_elements = selector.into();
        self
    }

    pub fn with_close_fallback(mut self, millis: Option<u32>) -> Self {
        self.close_fallback_ms = millis;
        self
    }
}

/// Configuration frozen at construction.
///
/// Selectors are consumed by the binder; what remains is read by the
/// transitions for the lifetime of the drawer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    direction: Direction,
    breakpoint: Breakpoint,
    btn_label: String,
    close_label: String,
    focusable_elements: String,
    close_fallback_ms: Option<u32>,
}

impl DrawerConfig {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn btn_label(&self) -> &str {
        &self.btn_label
    }

    pub fn close_label(&self) -> &str {
        &self.close_label
    }

    pub fn focusable_elements(&self) -> &str {
        &self.focusable_elements
    }

    pub fn close_fallback_ms(&self) -> Option<u32> {
        self.close_fallback_ms
    }
}

impl From<&DrawerOptions> for DrawerConfig {
    fn from(options: &DrawerOptions) -> Self {
        Self {
            direction: options.direction,
            breakpoint: options.breakpoint,
            btn_label: options.btn_label.clone(),
            close_label: options.close_label.clone(),
            focusable_elements: options.focusable_elements.clone(),
            close_fallback_ms: options.close_fallback_ms,
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
