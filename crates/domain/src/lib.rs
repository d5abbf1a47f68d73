//! # lightctl-domain
//!
//! Pure domain model for the lightctl motion-driven light controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **time periods** (night, morning, afternoon, evening) and the
//!   hour-of-day classification rule
//! - Define **light commands** (`turn_on`, `turn_off`) and light states
//! - Contain the **actuation policy**: given the current time, a motion flag
//!   and the last motion timestamp, decide which command (if any) to issue
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod light;
pub mod period;
pub mod policy;
