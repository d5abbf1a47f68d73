//! Virtual device implementations — light and motion sensor.

mod light;
mod sensor;

pub use light::ConsoleLight;
pub use sensor::TogglingMotionSensor;
