use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkRates {
    pub upload: f64,
    pub download: f64,
}

#[derive(Debug)]
struct Baseline {
    bytes_sent: u64,
    bytes_recv: u64,
    at: Instant,
}

/// Turns pairs of cumulative byte counters into bytes-per-second rates.
/// Owned by the sampling loop and fed one observation per tick.
#[derive(Debug, Default)]
pub struct RateTracker {
    baseline: Option<Baseline>,
}

impl RateTracker {
    pub fn new() -> Self {
        RateTracker { baseline: None }
    }

    /// Returns the throughput since the previous observation, or `None` while
    /// no baseline is established or no time has passed. A counter that went
    /// backwards (interface reset, wrap) clamps its rate to zero.
    pub fn update(&mut self, bytes_sent: u64, bytes_recv: u64, at: Instant) -> Option<NetworkRates> {
        let rates = self.baseline.as_ref().and_then(|prev| {
            let elapsed = at.duration_since(prev.at).as_secs_f64();
            if elapsed > 0.0 {
                Some(NetworkRates {
                    upload: bytes_sent.saturating_sub(prev.bytes_sent) as f64 / elapsed,
                    download: bytes_recv.saturating_sub(prev.bytes_recv) as f64 / elapsed,
                })
            } else {
                None
            }
        });

        self.baseline = Some(Baseline {
            bytes_sent,
            bytes_recv,
            at,
        });
        rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_first_observation_yields_no_rate() {
        let mut tracker = RateTracker::new();
        assert_eq!(tracker.update(1000, 1000, Instant::now()), None);
    }

    #[test]
    fn test_rate_from_counter_delta() {
        let mut tracker = RateTracker::new();
        let t0 = Instant::now();
        tracker.update(1000, 1000, t0);

        let rates = tracker.update(2000, 5000, t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(rates.upload, 500.0);
        assert_eq!(rates.download, 2000.0);
    }

    #[test]
    fn test_zero_elapsed_yields_no_rate() {
        let mut tracker = RateTracker::new();
        let t0 = Instant::now();
        tracker.update(1000, 1000, t0);
        assert_eq!(tracker.update(2000, 2000, t0), None);
    }

    #[test]
    fn test_counter_regression_clamps_to_zero() {
        let mut tracker = RateTracker::new();
        let t0 = Instant::now();
        tracker.update(2000, 2000, t0);

        let rates = tracker.update(1000, 1000, t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(rates.upload, 0.0);
        assert_eq!(rates.download, 0.0);
    }

    #[test]
    fn test_identical_counters_yield_zero_rate() {
        let mut tracker = RateTracker::new();
        let t0 = Instant::now();
        tracker.update(1000, 1000, t0);

        for tick in 1..4 {
            let rates = tracker
                .update(1000, 1000, t0 + Duration::from_secs(tick))
                .unwrap();
            assert_eq!(rates.upload, 0.0);
            assert_eq!(rates.download, 0.0);
        }
    }

    #[test]
    fn test_each_observation_becomes_the_new_baseline() {
        let mut tracker = RateTracker::new();
        let t0 = Instant::now();
        tracker.update(0, 0, t0);
        tracker.update(1000, 1000, t0 + Duration::from_secs(1));

        let rates = tracker.update(1500, 1500, t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(rates.upload, 500.0);
    }
}
