//! Time and timestamp helpers.

use chrono::{DateTime, FixedOffset, Local};

/// Wall-clock timestamp carrying its UTC offset.
///
/// The offset keeps hour-of-day local to the installation while differences
/// between two timestamps stay absolute.
pub type Timestamp = DateTime<FixedOffset>;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().fixed_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_local_time() {
        let before = Local::now().fixed_offset();
        let ts = now();
        let after = Local::now().fixed_offset();
        assert!(ts >= before);
        assert!(ts <= after);
    }
}
