//! # lightctld — lightctl daemon
//!
//! Composition root that wires all adapters together and starts polling.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Construct the clock, motion sensor and light adapters
//! - Assemble the actuator and controller, injecting adapters via port traits
//! - Poll until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use lightctl_adapter_virtual::{ConsoleLight, TogglingMotionSensor};
use lightctl_app::actuator::LightActuator;
use lightctl_app::controller::LightController;
use lightctl_app::ports::SystemClock;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let light = ConsoleLight::default();
    let sensor = TogglingMotionSensor::new(config.motion.initial);

    // Use-cases
    let actuator = LightActuator::builder()
        .clock(SystemClock)
        .light_switch(light)
        .build()?;
    let mut controller =
        LightController::new(sensor, actuator).with_interval(config.poll_interval());

    controller.run_until(shutdown_signal()).await;

    Ok(())
}

/// Resolve on ctrl-c. If the signal handler cannot be installed the daemon
/// keeps running and must be killed externally.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received ctrl-c, shutting down"),
        Err(err) => {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}
