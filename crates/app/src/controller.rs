//! Light controller — polls the motion sensor and feeds the actuator.
//!
//! The controller owns the only timer in the system. On every tick it reads
//! the sensor once and passes the reading to [`LightActuator::actuate`].
//! A failed poll is logged and the loop carries on with the next tick.

use std::future::Future;
use std::time::Duration;

use lightctl_domain::error::LightCtlError;
use lightctl_domain::light::LightCommand;
use tokio::time::MissedTickBehavior;

use crate::actuator::LightActuator;
use crate::ports::{Clock, HourOfDay, LightSwitch, MotionSensor, PeriodClassifier};

/// Default delay between two sensor reads.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic poller driving a single actuator from a single sensor.
pub struct LightController<M, C, S, P = HourOfDay> {
    sensor: M,
    actuator: LightActuator<C, S, P>,
    interval: Duration,
}

impl<M, C, S, P> LightController<M, C, S, P>
where
    M: MotionSensor,
    C: Clock,
    S: LightSwitch,
    P: PeriodClassifier,
{
    /// Create a controller polling at [`DEFAULT_POLL_INTERVAL`].
    pub fn new(sensor: M, actuator: LightActuator<C, S, P>) -> Self {
        Self {
            sensor,
            actuator,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Override the poll interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Current poll interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Access the actuator, e.g. to inspect the last motion time.
    #[must_use]
    pub fn actuator(&self) -> &LightActuator<C, S, P> {
        &self.actuator
    }

    /// Read the sensor once and actuate on the result.
    ///
    /// # Errors
    ///
    /// Returns the sensor error if the reading failed, otherwise whatever
    /// [`LightActuator::actuate`] returns.
    pub fn poll(&mut self) -> Result<Option<LightCommand>, LightCtlError> {
        let motion = self.sensor.detect_motion()?;
        self.actuator.actuate(motion)
    }

    /// Poll on a fixed interval until `shutdown` resolves.
    ///
    /// The first poll happens immediately. Ticks that fall behind are delayed
    /// rather than bursted.
    #[tracing::instrument(skip_all)]
    pub async fn run_until(&mut self, shutdown: impl Future<Output = ()>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut shutdown = std::pin::pin!(shutdown);

        tracing::info!(interval = ?self.interval, "light controller started");
        loop {
            tokio::select! {
                () = &mut shutdown => break,
                _ = ticker.tick() => {
                    if let Err(err) = self.poll() {
                        tracing::warn!(%err, "poll failed, retrying next interval");
                    }
                }
            }
        }
        tracing::info!("light controller stopped");
    }
}
