//! Extraction of connections and input errors from result pages.
//!
//! The upstream answers a search with an HTML page. [`ResultsParser`] holds
//! the most recent page and reads the connection table and the form's error
//! regions out of it, addressed through a [`PageLayout`]. Callers never see
//! the markup.

mod error;
mod layout;
mod report;
mod results;

pub use error::ParseError;
pub use layout::PageLayout;
pub use report::{ErrorReport, FieldError, InputField};
pub use results::ResultsParser;
