//! User-facing outcome messages.
//!
//! The embedding UI renders these as a modal or inline message. Nothing
//! structured beyond a title and a human-readable body is surfaced; remote
//! failures carry the HTTP status text inside the body.

use std::fmt::Display;

/// Validation body shown when a required field is blank.
pub const MSG_FILL_ALL: &str = "Please fill in all the fields.";
/// Validation body shown when the error map has entries.
pub const MSG_FIX_ERRORS: &str = "Please fix the errors before saving.";

/// A human-readable message describing the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    /// Pre-submission validation failure.
    pub fn validation(body: &str) -> Self {
        Self {
            title: "Validation Error".to_string(),
            body: body.to_string(),
        }
    }

    /// A create or update was confirmed by the server.
    pub fn saved() -> Self {
        Self {
            title: "Success".to_string(),
            body: "Item saved successfully.".to_string(),
        }
    }

    /// A delete was confirmed by the server (or the record was already gone).
    pub fn deleted() -> Self {
        Self {
            title: "Success".to_string(),
            body: "Item deleted successfully.".to_string(),
        }
    }

    /// A create or update failed after reaching the network.
    pub fn save_failed(detail: &impl Display) -> Self {
        Self {
            title: "Error".to_string(),
            body: format!(
                "An error occurred while saving the item:\n{detail}.\nPlease try again."
            ),
        }
    }

    /// A delete failed after reaching the network.
    pub fn delete_failed(detail: &impl Display) -> Self {
        Self {
            title: "Error".to_string(),
            body: format!(
                "An error occurred while deleting the item:\n{detail}.\nPlease try again."
            ),
        }
    }
}
