//! Domain types for connection results.
//!
//! Everything here is a display string as rendered by the upstream page;
//! times are not parsed into clock values outside of paging.

mod error;
mod journey;

pub use error::ColumnMismatch;
pub use journey::{JourneyColumns, JourneyRow, ResultSet};
