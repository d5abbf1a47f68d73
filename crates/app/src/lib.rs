//! # lightctl-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Clock` — current wall-clock time
//!   - `LightSwitch` — `turn_on` / `turn_off`
//!   - `MotionSensor` — one motion reading per poll
//!   - `PeriodClassifier` — maps a timestamp to a time period
//! - Define **driving/inbound** use-cases:
//!   - `LightActuator` — applies the actuation policy to one motion reading
//!   - `LightController` — polls the sensor on a fixed interval and feeds
//!     the actuator
//!
//! ## Dependency rule
//! Depends on `lightctl-domain` only (plus `tokio::time` for the poll timer).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod actuator;
pub mod controller;
pub mod ports;
