//! Upstream client error types.

/// Errors from talking to the upstream journey planner.
#[derive(Debug, thiserror::Error)]
pub enum HafasError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server error {status}: {body}")]
    Status { status: u16, body: String },

    /// Client could not be configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}
