//! Fetch loop configuration.

use std::time::Duration;

/// Tuning of the fetch loop.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Stop once at least this many connections are gathered.
    pub min_connections: usize,

    /// Pause before every request after the first (milliseconds).
    pub request_spacing_ms: u64,

    /// Base unit of the stall back-off (milliseconds).
    pub backoff_unit_ms: u64,

    /// The back-off factor doubles modulo this value.
    pub backoff_ceiling: u32,
}

impl FetchConfig {
    /// Create a configuration gathering `min_connections` connections with
    /// default timing.
    pub fn new(min_connections: usize) -> Self {
        Self {
            min_connections,
            ..Self::default()
        }
    }

    /// Set the pause between requests.
    pub fn with_request_spacing_ms(mut self, ms: u64) -> Self {
        self.request_spacing_ms = ms;
        self
    }

    /// Set the back-off unit.
    pub fn with_backoff_unit_ms(mut self, ms: u64) -> Self {
        self.backoff_unit_ms = ms;
        self
    }

    /// Set the back-off modulus.
    pub fn with_backoff_ceiling(mut self, ceiling: u32) -> Self {
        self.backoff_ceiling = ceiling;
        self
    }

    /// Returns the request spacing as a Duration.
    pub fn request_spacing(&self) -> Duration {
        Duration::from_millis(self.request_spacing_ms)
    }

    /// Returns the back-off unit as a Duration.
    pub fn backoff_unit(&self) -> Duration {
        Duration::from_millis(self.backoff_unit_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            min_connections: 3,
            request_spacing_ms: 250,
            backoff_unit_ms: 1000,
            backoff_ceiling: 13,
        }
    }
}
