//! Clock port — source of the current time.

use std::sync::Arc;

use lightctl_domain::error::LightCtlError;
use lightctl_domain::time::{self, Timestamp};

/// Provides the current time to the actuator.
pub trait Clock {
    /// Read the current time.
    ///
    /// # Errors
    ///
    /// Returns [`LightCtlError::Device`] if the time source is unavailable.
    fn now(&self) -> Result<Timestamp, LightCtlError>;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Result<Timestamp, LightCtlError> {
        (**self).now()
    }
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp, LightCtlError> {
        Ok(time::now())
    }
}
