//! Error type for field construction and table arithmetic.

use thiserror::Error;

/// Errors raised by the field layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The defining polynomial cannot describe a supported field.
    #[error("invalid field parameters: {reason}")]
    InvalidParameters {
        /// What was wrong with the parameters.
        reason: String,
    },

    /// A value presented as a field element has no entry in the table
    /// (the zero element, or a value wider than the field).
    #[error("element {element:#x} is not a nonzero field element")]
    ElementNotFound {
        /// The rejected value.
        element: u32,
    },

    /// The discrete-log table failed its construction-time self-check.
    #[error("discrete-log table is inconsistent: {reason}")]
    TableInconsistent {
        /// Which check failed.
        reason: String,
    },
}
