use std::io::Write;

use crate::collect::rate::{NetworkRates, RateTracker};
use crate::collect::sample::{HostInfo, Sample};
use crate::collect::source::MetricsSource;
use crate::render::screen::Screen;

/// Drives the sample/render cycle. `init` runs once (full paint, CPU delta
/// baseline, rate-tracker seed); `tick` runs forever on the caller's timer.
pub struct Dashboard<S: MetricsSource> {
    source: S,
    tracker: RateTracker,
    screen: Screen,
    host: HostInfo,
}

impl<S: MetricsSource> Dashboard<S> {
    pub fn new(mut source: S) -> Self {
        let host = source.host_info();
        Dashboard {
            source,
            tracker: RateTracker::new(),
            screen: Screen::new(),
            host,
        }
    }

    pub fn init(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        self.screen.paint_static(&self.host);
        self.screen.present(out)?;

        // Throwaway sample: the CPU reading needs one discarded read to
        // establish its delta baseline, and the network counters seed the
        // rate tracker so the first rendered tick already has a rate.
        let sample = self.source.sample();
        self.observe_rates(&sample);
        Ok(())
    }

    pub fn tick(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        let sample = self.source.sample();
        let rates = self.observe_rates(&sample);
        self.screen.paint_sample(&sample, rates.as_ref());
        self.screen.present(out)
    }

    fn observe_rates(&mut self, sample: &Sample) -> Option<NetworkRates> {
        match (sample.net_bytes_sent, sample.net_bytes_recv) {
            (Some(sent), Some(recv)) => self.tracker.update(sent, recv, sample.taken_at),
            _ => None,
        }
    }
}
