//! Error types raised while binding a drawer to the page.

use thiserror::Error;

/// Failures that abort construction of a [`Drawer`](crate::Drawer).
///
/// Nothing after construction produces an error: once bound, missing or
/// detached nodes degrade to no-ops inside the [`Dom`](crate::Dom)
/// implementation.
#[derive(Debug, Error)]
pub enum DrawerError {
    /// A required selector resolved to no element.
    #[error("{role} selector `{selector}` did not match any element")]
    SelectorNotFound {
        role: &'static str,
        selector: String,
    },
    /// The backdrop sibling could not be created next to the panel.
    #[error("could not insert the backdrop after the panel")]
    BackdropInsertion,
    /// Options supplied as JSON failed to parse.
    #[error("invalid drawer options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl DrawerError {
    pub(crate) fn not_found(role: &'static str, selector: impl Into<String>) -> Self {
        DrawerError::SelectorNotFound {
            role,
            selector: selector.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrawerError>;
