//! Period classifier port — maps a timestamp onto a [`TimePeriod`].

use lightctl_domain::period::TimePeriod;
use lightctl_domain::time::Timestamp;

/// Decides which part of the day a timestamp falls into.
pub trait PeriodClassifier {
    fn classify(&self, ts: &Timestamp) -> TimePeriod;
}

/// Default classifier: buckets by the local hour of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct HourOfDay;

impl PeriodClassifier for HourOfDay {
    fn classify(&self, ts: &Timestamp) -> TimePeriod {
        TimePeriod::classify(ts)
    }
}
