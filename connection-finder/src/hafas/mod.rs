//! Client for the upstream journey planner (a HAFAS `query.exe` form).
//!
//! The planner has no API: a search is the HTML search form posted as an
//! URL-encoded body, and the answer is the HTML result page. Anything that
//! can answer a search implements [`ConnectionSource`], so the fetch loop can
//! run against a scripted source in tests.

mod client;
mod error;
#[cfg(test)]
pub mod mock;

pub use client::{HafasClient, HafasConfig};
pub use error::HafasError;

use std::future::Future;

/// Answers search form submissions with result pages.
pub trait ConnectionSource {
    /// Submit the search form and return the raw response body.
    fn search(
        &self,
        form: &[(String, String)],
    ) -> impl Future<Output = Result<String, HafasError>>;
}
