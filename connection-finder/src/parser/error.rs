//! Parser error types.

use crate::domain::ColumnMismatch;

/// Errors from reading a result page.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// A selector in the page layout is not valid CSS
    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    /// The connection table could not be split into rows
    #[error(transparent)]
    Columns(#[from] ColumnMismatch),
}
