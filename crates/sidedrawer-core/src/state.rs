//! The single mutable record a drawer owns.

use crate::config::DrawerConfig;
use crate::gesture::GesturePhase;
use crate::responsive::ResponsiveMode;
use crate::scheduler::TaskHandle;
use crate::visibility::Visibility;

/// Identifier tying the trigger and panel together through ARIA attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawerId(String);

impl DrawerId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id given to the trigger button.
    pub fn button_id(&self) -> String {
        format!("{}{}", crate::classes::BUTTON_ID_PREFIX, self.0)
    }
}

impl std::fmt::Display for DrawerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interaction state of one drawer.
///
/// Fields are written only by the transition functions in this crate and
/// by the [`Drawer`](crate::Drawer) shell that owns the record.
#[derive(Debug, Clone)]
pub struct DrawerState {
    pub(crate) id: DrawerId,
    pub(crate) config: DrawerConfig,
    pub(crate) is_open: bool,
    pub(crate) visibility: Visibility,
    pub(crate) viewport_width: Option<f64>,
    pub(crate) responsive: ResponsiveMode,
    pub(crate) scroll_offset: f64,
    pub(crate) drag_anchor_y: f64,
    pub(crate) velocity: f64,
    pub(crate) gesture: GesturePhase,
    pub(crate) momentum_task: Option<TaskHandle>,
    pub(crate) resize_frame: Option<TaskHandle>,
    pub(crate) close_fallback: Option<TaskHandle>,
}

impl DrawerState {
    pub fn new(id: DrawerId, config: DrawerConfig) -> Self {
        Self {
            id,
            config,
            is_open: false,
            visibility: Visibility::Closed,
            viewport_width: None,
            responsive: ResponsiveMode::Unresolved,
            scroll_offset: 0.0,
            drag_anchor_y: 0.0,
            velocity: 0.0,
            gesture: GesturePhase::Idle,
            momentum_task: None,
            resize_frame: None,
            close_fallback: None,
        }
    }

    pub fn id(&self) -> &DrawerId {
        &self.id
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    pub fn responsive(&self) -> ResponsiveMode {
        self.responsive
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn drag_anchor_y(&self) -> f64 {
        self.drag_anchor_y
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn gesture(&self) -> GesturePhase {
        self.gesture
    }

    pub fn momentum_task(&self) -> Option<TaskHandle> {
        self.momentum_task
    }

    pub fn resize_frame(&self) -> Option<TaskHandle> {
        self.resize_frame
    }

    pub fn close_fallback(&self) -> Option<TaskHandle> {
        self.close_fallback
    }
}
