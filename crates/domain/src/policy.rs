//! Actuation policy — decides whether a motion observation should switch
//! the light on, off, or leave it alone.
//!
//! The rules, evaluated in order:
//!
//! 1. Motion in the evening or at night turns the light on.
//! 2. Otherwise the light is turned off if the last motion is more than
//!    [`MOTION_TIMEOUT_SECS`] old, or if it is morning or afternoon.
//! 3. Otherwise nothing is sent.

use chrono::TimeDelta;

use crate::light::LightCommand;
use crate::period::TimePeriod;
use crate::time::Timestamp;

/// How long after the last motion the light is allowed to stay on.
pub const MOTION_TIMEOUT_SECS: i64 = 60;

fn motion_timeout() -> TimeDelta {
    TimeDelta::seconds(MOTION_TIMEOUT_SECS)
}

/// Whether strictly more than the timeout has passed since `last_motion`.
///
/// A light that has never seen motion counts as expired.
#[must_use]
pub fn motion_expired(now: Timestamp, last_motion: Option<Timestamp>) -> bool {
    last_motion.is_none_or(|last| now.signed_duration_since(last) > motion_timeout())
}

/// Pure decision step. `last_motion` must already include the current
/// observation when `motion_detected` is set.
#[must_use]
pub fn decide(
    now: Timestamp,
    period: TimePeriod,
    motion_detected: bool,
    last_motion: Option<Timestamp>,
) -> Option<LightCommand> {
    if motion_detected && period.is_dark() {
        Some(LightCommand::TurnOn)
    } else if motion_expired(now, last_motion) || period.is_daylight() {
        Some(LightCommand::TurnOff)
    } else {
        None
    }
}

/// Mutable state carried by a light actuator between observations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuatorState {
    last_motion_time: Option<Timestamp>,
}

impl ActuatorState {
    /// State with no motion seen yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with a known last motion time.
    #[must_use]
    pub fn with_last_motion(ts: Timestamp) -> Self {
        Self {
            last_motion_time: Some(ts),
        }
    }

    /// Timestamp of the most recent observation that reported motion.
    #[must_use]
    pub fn last_motion_time(&self) -> Option<Timestamp> {
        self.last_motion_time
    }

    /// Record one observation and return the command it calls for.
    pub fn observe(
        &mut self,
        now: Timestamp,
        period: TimePeriod,
        motion_detected: bool,
    ) -> Option<LightCommand> {
        if motion_detected {
            self.last_motion_time = Some(now);
        }
        decide(now, period, motion_detected, self.last_motion_time)
    }
}
