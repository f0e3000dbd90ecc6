//! The fetch-and-accumulate loop.
//!
//! One search rarely lists enough connections, so the loop keeps asking
//! for the next page, starting one minute after the latest departure seen
//! so far, until enough rows are gathered. When the upstream stops
//! returning newer connections it is usually throttling, and the loop backs
//! off before asking again.

mod backoff;
mod config;
mod dump;
mod error;
mod fetcher;

pub use backoff::StallBackoff;
pub use config::FetchConfig;
pub use dump::ResponseDump;
pub use error::FetchError;
pub use fetcher::{ConnectionFetcher, FetchObserver, NoProgress};
