//! Light — commands sent to a light and the state they leave it in.

use serde::{Deserialize, Serialize};

/// A single actuation sent to the light switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightCommand {
    TurnOn,
    TurnOff,
}

impl LightCommand {
    /// State the light is in once the command has been applied.
    #[must_use]
    pub fn resulting_state(self) -> LightState {
        match self {
            Self::TurnOn => LightState::On,
            Self::TurnOff => LightState::Off,
        }
    }
}

impl std::fmt::Display for LightCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnOn => f.write_str("turn_on"),
            Self::TurnOff => f.write_str("turn_off"),
        }
    }
}

/// Last known state of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightState {
    On,
    Off,
    /// Nothing has been commanded yet.
    #[default]
    Unknown,
}

impl std::fmt::Display for LightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
