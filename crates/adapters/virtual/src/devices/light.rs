//! Console light — prints commands instead of driving a bulb.

use std::sync::Mutex;

use lightctl_app::ports::LightSwitch;
use lightctl_domain::error::LightCtlError;
use lightctl_domain::light::{LightCommand, LightState};

/// A simulated light that logs every command it receives.
#[derive(Debug)]
pub struct ConsoleLight {
    name: String,
    state: Mutex<LightState>,
}

impl Default for ConsoleLight {
    fn default() -> Self {
        Self::new("virtual_light")
    }
}

impl ConsoleLight {
    /// Create a light in the [`LightState::Unknown`] state.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Mutex::new(LightState::Unknown),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// State left by the last command.
    #[must_use]
    pub fn state(&self) -> LightState {
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn set(&self, command: LightCommand) {
        let new_state = command.resulting_state();
        tracing::info!(light = %self.name, %command, "Setting lights to {new_state}");
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = new_state;
    }
}

impl LightSwitch for ConsoleLight {
    fn turn_on(&self) -> Result<(), LightCtlError> {
        self.set(LightCommand::TurnOn);
        Ok(())
    }

    fn turn_off(&self) -> Result<(), LightCtlError> {
        self.set(LightCommand::TurnOff);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_unknown() {
        let light = ConsoleLight::default();
        assert_eq!(light.state(), LightState::Unknown);
        assert_eq!(light.name(), "virtual_light");
    }

    #[test]
    fn should_turn_on_when_commanded() {
        let light = ConsoleLight::new("hallway");
        light.turn_on().unwrap();
        assert_eq!(light.state(), LightState::On);
    }

    #[test]
    fn should_turn_off_after_turn_on() {
        let light = ConsoleLight::new("hallway");
        light.turn_on().unwrap();
        light.turn_off().unwrap();
        assert_eq!(light.state(), LightState::Off);
    }

    #[test]
    fn should_stay_on_when_turned_on_twice() {
        let light = ConsoleLight::default();
        light.turn_on().unwrap();
        light.turn_on().unwrap();
        assert_eq!(light.state(), LightState::On);
    }

    #[test]
    fn should_apply_command_through_port() {
        let light = ConsoleLight::default();
        light.apply(LightCommand::TurnOff).unwrap();
        assert_eq!(light.state(), LightState::Off);
    }
}
