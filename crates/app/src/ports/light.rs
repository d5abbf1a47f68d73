//! Light switch port — the capability the actuator drives.

use std::sync::Arc;

use lightctl_domain::error::LightCtlError;
use lightctl_domain::light::LightCommand;

/// Turns a light on or off.
///
/// Both commands are idempotent; the actuator never reads back the light
/// state and does not depend on the outcome beyond error propagation.
pub trait LightSwitch {
    /// Switch the light on.
    ///
    /// # Errors
    ///
    /// Returns [`LightCtlError::Device`] if the command could not be delivered.
    fn turn_on(&self) -> Result<(), LightCtlError>;

    /// Switch the light off.
    ///
    /// # Errors
    ///
    /// Returns [`LightCtlError::Device`] if the command could not be delivered.
    fn turn_off(&self) -> Result<(), LightCtlError>;

    /// Dispatch a [`LightCommand`] to the matching method.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying call unchanged.
    fn apply(&self, command: LightCommand) -> Result<(), LightCtlError> {
        match command {
            LightCommand::TurnOn => self.turn_on(),
            LightCommand::TurnOff => self.turn_off(),
        }
    }
}

impl<T: LightSwitch + ?Sized> LightSwitch for Arc<T> {
    fn turn_on(&self) -> Result<(), LightCtlError> {
        (**self).turn_on()
    }

    fn turn_off(&self) -> Result<(), LightCtlError> {
        (**self).turn_off()
    }
}
