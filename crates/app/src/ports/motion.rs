//! Motion sensor port — consumed by the poller, never by the actuator.

use std::sync::Arc;

use lightctl_domain::error::LightCtlError;

/// Reports whether movement was sensed since the previous read.
pub trait MotionSensor {
    /// Take one reading.
    ///
    /// # Errors
    ///
    /// Returns [`LightCtlError::Device`] if the sensor could not be read.
    fn detect_motion(&self) -> Result<bool, LightCtlError>;
}

impl<T: MotionSensor + ?Sized> MotionSensor for Arc<T> {
    fn detect_motion(&self) -> Result<bool, LightCtlError> {
        (**self).detect_motion()
    }
}
