//! # lightctl-adapter-virtual
//!
//! Virtual/demo devices for running the controller without hardware.
//!
//! ## Provided devices
//!
//! | Device | Port | Behaviour |
//! |--------|------|-----------|
//! | [`ConsoleLight`] | `LightSwitch` | Logs "Setting lights to on/off" and remembers its state |
//! | [`TogglingMotionSensor`] | `MotionSensor` | Alternates motion / no motion on every read |
//!
//! ## Dependency rule
//!
//! Depends on `lightctl-app` (port traits) and `lightctl-domain` only.

mod devices;

pub use devices::{ConsoleLight, TogglingMotionSensor};
