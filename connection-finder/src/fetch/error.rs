//! Fetch loop error types.

use crate::hafas::HafasError;
use crate::parser::{ErrorReport, ParseError};
use crate::query::TimeError;

/// Errors that end a fetch run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server rejected the search input
    #[error("search rejected by the server:\n{0}")]
    Validation(ErrorReport),

    /// Request could not be completed
    #[error(transparent)]
    Source(#[from] HafasError),

    /// Response could not be read
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A departure time could not be advanced
    #[error("cannot page past departure: {0}")]
    Time(#[from] TimeError),
}
