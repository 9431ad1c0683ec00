//! Class names and attribute prefixes written by the drawer.
//!
//! Stylesheets and page scripts depend on these strings; changing one is a
//! breaking change to the markup contract.

use crate::config::Direction;

/// Class of the synthesized backdrop element.
pub const BACKDROP: &str = "js-drawer";
/// Class tagged onto the trigger button.
pub const BUTTON: &str = "js-drawer-btn";
/// Class added to the trigger while the drawer is open.
pub const BUTTON_ACTIVE: &str = "js-drawer-btn-active";
/// Marker class placed on `<body>` once a drawer is bound.
pub const BODY: &str = "js-drawer-body";
/// Body class for responsive-hidden mode.
pub const BODY_ACTIVE: &str = "js-drawer-body-active";
/// Panel class that page scripts set to pin the drawer open.
///
/// The drawer never writes this class; the responsive monitor only reads it.
pub const PANEL_OPEN_MARKER: &str = "js-drawer-open";

/// Prefix for the trigger id; the drawer id is appended.
pub const BUTTON_ID_PREFIX: &str = "drawer-btn-";

/// Directional class placed on the panel.
pub fn sidebar(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "js-drawer-sidebar-left",
        Direction::Right => "js-drawer-sidebar-right",
    }
}

/// Directional body class present while the drawer is open.
pub fn body_open(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "js-drawer-body-left",
        Direction::Right => "js-drawer-body-right",
    }
}
