//! Toggling motion sensor — reports motion on every other read.

use std::sync::atomic::{AtomicBool, Ordering};

use lightctl_app::ports::MotionSensor;
use lightctl_domain::error::LightCtlError;

/// A simulated PIR sensor that flips its reading each time it is polled.
///
/// Starting from `false`, the first read reports motion.
#[derive(Debug, Default)]
pub struct TogglingMotionSensor {
    motion: AtomicBool,
}

impl TogglingMotionSensor {
    /// Create a sensor whose first read returns `!initial`.
    #[must_use]
    pub fn new(initial: bool) -> Self {
        Self {
            motion: AtomicBool::new(initial),
        }
    }
}

impl MotionSensor for TogglingMotionSensor {
    fn detect_motion(&self) -> Result<bool, LightCtlError> {
        let motion = !self.motion.fetch_xor(true, Ordering::SeqCst);
        tracing::trace!(motion, "motion sensor read");
        Ok(motion)
    }
}
