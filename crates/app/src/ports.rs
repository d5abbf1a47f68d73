//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! All ports are synchronous: one actuation is a clock read, a classification
//! and at most one command, none of which may suspend.

pub mod classifier;
pub mod clock;
pub mod light;
pub mod motion;

pub use classifier::{HourOfDay, PeriodClassifier};
pub use clock::{Clock, SystemClock};
pub use light::LightSwitch;
pub use motion::MotionSensor;
