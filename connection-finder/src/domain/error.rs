//! Domain error types.

/// The six columns extracted from one result page disagree in length, so
/// their rows cannot be paired up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "result columns have different lengths \
     (start {start}, destination {destination}, departure {departure}, \
     arrival {arrival}, duration {duration}, product {product})"
)]
pub struct ColumnMismatch {
    pub start: usize,
    pub destination: usize,
    pub departure: usize,
    pub arrival: usize,
    pub duration: usize,
    pub product: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ColumnMismatch {
            start: 2,
            destination: 2,
            departure: 2,
            arrival: 1,
            duration: 2,
            product: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("different lengths"));
        assert!(msg.contains("arrival 1"));
    }
}
