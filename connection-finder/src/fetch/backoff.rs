//! Back-off for when the upstream stops returning newer connections.

use std::time::Duration;

/// Wait schedule for consecutive stalls.
///
/// The first stall waits one unit. Each further stall doubles the factor
/// modulo the ceiling, so the wait stays below `ceiling` units and
/// occasionally drops back to a short one. A factor of zero restarts at one.
#[derive(Debug, Clone)]
pub struct StallBackoff {
    unit: Duration,
    ceiling: u32,
    factor: u32,
}

impl StallBackoff {
    pub fn new(unit: Duration, ceiling: u32) -> Self {
        Self {
            unit,
            ceiling: ceiling.max(1),
            factor: 1,
        }
    }

    /// The wait for this stall; advances the schedule.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.unit * self.factor;
        let doubled = (u64::from(self.factor) * 2) % u64::from(self.ceiling);
        // below the u32 ceiling, so it fits
        self.factor = doubled as u32;
        if self.factor == 0 {
            self.factor = 1;
        }
        delay
    }

    /// Start over after progress.
    pub fn reset(&mut self) {
        self.factor = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secs(backoff: &mut StallBackoff, n: usize) -> Vec<u64> {
        (0..n).map(|_| backoff.next_delay().as_secs()).collect()
    }

    #[test]
    fn default_schedule() {
        let mut backoff = StallBackoff::new(Duration::from_secs(1), 13);
        assert_eq!(
            secs(&mut backoff, 14),
            vec![1, 2, 4, 8, 3, 6, 12, 11, 9, 5, 10, 7, 1, 2]
        );
    }

    #[test]
    fn reset_starts_over() {
        let mut backoff = StallBackoff::new(Duration::from_secs(1), 13);
        secs(&mut backoff, 5);
        backoff.reset();
        assert_eq!(secs(&mut backoff, 3), vec![1, 2, 4]);
    }

    #[test]
    fn power_of_two_ceiling_restarts_at_one() {
        let mut backoff = StallBackoff::new(Duration::from_secs(1), 8);
        assert_eq!(secs(&mut backoff, 5), vec![1, 2, 4, 1, 2]);
    }

    #[test]
    fn zero_ceiling_does_not_panic() {
        let mut backoff = StallBackoff::new(Duration::from_secs(1), 0);
        assert_eq!(secs(&mut backoff, 3), vec![1, 1, 1]);
    }

    #[test]
    fn large_ceiling_keeps_doubling() {
        let mut backoff = StallBackoff::new(Duration::from_millis(1), u32::MAX);
        let factors: Vec<u64> = (0..40)
            .map(|_| backoff.next_delay().as_millis() as u64)
            .collect();

        // 2^32 mod (2^32 - 1) == 1, so the schedule starts over after 2^31
        assert_eq!(factors[31], 1 << 31);
        assert_eq!(factors[32], 1);
        assert_eq!(factors[39], 1 << 7);
    }

    proptest! {
        /// Waits are positive and bounded by the ceiling
        #[test]
        fn delays_are_bounded(ceiling in 2u32..64, stalls in 1usize..200) {
            let unit = Duration::from_millis(10);
            let mut backoff = StallBackoff::new(unit, ceiling);
            for _ in 0..stalls {
                let delay = backoff.next_delay();
                prop_assert!(delay >= unit);
                prop_assert!(delay < unit * ceiling);
            }
        }

        /// Same inputs, same schedule
        #[test]
        fn schedule_is_deterministic(ceiling in 1u32..64, stalls in 0usize..100) {
            let unit = Duration::from_millis(10);
            let mut a = StallBackoff::new(unit, ceiling);
            let mut b = StallBackoff::new(unit, ceiling);
            let a: Vec<_> = (0..stalls).map(|_| a.next_delay()).collect();
            let b: Vec<_> = (0..stalls).map(|_| b.next_delay()).collect();
            prop_assert_eq!(a, b);
        }
    }
}
