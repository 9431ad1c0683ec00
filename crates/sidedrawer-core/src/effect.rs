//! Render operations produced by state transitions.
//!
//! Transitions never touch the document. They return [`Effects`] addressed
//! to logical [`Target`]s, and the [`Drawer`](crate::Drawer) applies them
//! through its [`Dom`](crate::Dom). Effects aimed at an element the page does
//! not have (an unconfigured fixed header) are dropped at that point.

use smallvec::SmallVec;

/// Element roles the drawer renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Panel,
    Trigger,
    Backdrop,
    Body,
    FixedHeader,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetAttribute {
        target: Target,
        name: &'static str,
        value: String,
    },
    AddClass {
        target: Target,
        class: &'static str,
    },
    RemoveClass {
        target: Target,
        class: &'static str,
    },
    /// Inline style write; an empty value clears the property.
    SetStyle {
        target: Target,
        property: &'static str,
        value: String,
    },
    /// Synthetic activation of the target.
    Click(Target),
}

impl Effect {
    pub fn attribute(target: Target, name: &'static str, value: impl ToString) -> Self {
        Effect::SetAttribute {
            target,
            name,
            value: value.to_string(),
        }
    }

    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Effect::SetStyle {
            target,
            property,
            value: value.into(),
        }
    }

    pub fn add_class(target: Target, class: &'static str) -> Self {
        Effect::AddClass { target, class }
    }

    pub fn remove_class(target: Target, class: &'static str) -> Self {
        Effect::RemoveClass { target, class }
    }

    pub fn target(&self) -> Target {
        match self {
            Effect::SetAttribute { target, .. }
            | Effect::AddClass { target, .. }
            | Effect::RemoveClass { target, .. }
            | Effect::SetStyle { target, .. } => *target,
            Effect::Click(target) => *target,
        }
    }
}

pub type Effects = SmallVec<[Effect; 8]>;

/// `px` formatting shared by every inline length the drawer writes.
pub(crate) fn px(value: f64) -> String {
    // normalizes -0.0 so a clamped offset renders as `0px`
    format!("{}px", value + 0.0)
}
