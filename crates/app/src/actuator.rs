//! Light actuator — turns one motion reading into at most one light command.
//!
//! Each call reads the clock once, classifies the time of day, updates the
//! last-motion timestamp and hands the resulting command (if any) to the
//! light switch. Errors from the clock or the switch are returned as-is.

use lightctl_domain::error::{LightCtlError, ValidationError};
use lightctl_domain::light::LightCommand;
use lightctl_domain::policy::ActuatorState;
use lightctl_domain::time::Timestamp;

use crate::ports::{Clock, HourOfDay, LightSwitch, PeriodClassifier};

/// Stateful policy component owning the last-motion timestamp.
///
/// `actuate` takes `&mut self`, so calls are serialized by construction.
/// Share an actuator across tasks only behind a mutex.
#[derive(Debug)]
pub struct LightActuator<C, S, P = HourOfDay> {
    clock: C,
    switch: S,
    classifier: P,
    state: ActuatorState,
}

impl<C, S> LightActuator<C, S, HourOfDay>
where
    C: Clock,
    S: LightSwitch,
{
    /// Create an actuator with the default hour-of-day classifier and no
    /// motion seen yet.
    pub fn new(clock: C, switch: S) -> Self {
        Self {
            clock,
            switch,
            classifier: HourOfDay,
            state: ActuatorState::new(),
        }
    }

    /// Create a builder for assembling an actuator from optional parts.
    #[must_use]
    pub fn builder() -> LightActuatorBuilder<C, S, HourOfDay> {
        LightActuatorBuilder::default()
    }
}

impl<C, S, P> LightActuator<C, S, P>
where
    C: Clock,
    S: LightSwitch,
    P: PeriodClassifier,
{
    /// Evaluate the policy for one motion reading.
    ///
    /// Returns the command that was sent to the switch, or `None` when the
    /// light was left untouched.
    ///
    /// # Errors
    ///
    /// Propagates, unchanged, any error returned by the clock or the light
    /// switch.
    #[tracing::instrument(skip(self))]
    pub fn actuate(
        &mut self,
        motion_detected: bool,
    ) -> Result<Option<LightCommand>, LightCtlError> {
        let now = self.clock.now()?;
        let period = self.classifier.classify(&now);
        let command = self.state.observe(now, period, motion_detected);
        tracing::debug!(%now, %period, ?command, "actuation policy evaluated");
        if let Some(command) = command {
            self.switch.apply(command)?;
        }
        Ok(command)
    }

    /// Timestamp of the most recent reading that reported motion.
    #[must_use]
    pub fn last_motion_time(&self) -> Option<Timestamp> {
        self.state.last_motion_time()
    }

    /// Access the light switch this actuator drives.
    pub fn switch(&self) -> &S {
        &self.switch
    }
}

/// Step-by-step builder for [`LightActuator`].
#[derive(Debug)]
pub struct LightActuatorBuilder<C, S, P = HourOfDay> {
    clock: Option<C>,
    switch: Option<S>,
    classifier: P,
    last_motion: Option<Timestamp>,
}

impl<C, S> Default for LightActuatorBuilder<C, S, HourOfDay> {
    fn default() -> Self {
        Self {
            clock: None,
            switch: None,
            classifier: HourOfDay,
            last_motion: None,
        }
    }
}

impl<C, S, P> LightActuatorBuilder<C, S, P> {
    #[must_use]
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn light_switch(mut self, switch: S) -> Self {
        self.switch = Some(switch);
        self
    }

    /// Replace the time-of-day classifier.
    #[must_use]
    pub fn classifier<Q>(self, classifier: Q) -> LightActuatorBuilder<C, S, Q> {
        LightActuatorBuilder {
            clock: self.clock,
            switch: self.switch,
            classifier,
            last_motion: self.last_motion,
        }
    }

    /// Seed the last motion timestamp.
    #[must_use]
    pub fn last_motion(mut self, ts: Timestamp) -> Self {
        self.last_motion = Some(ts);
        self
    }

    /// Consume the builder and return a [`LightActuator`].
    ///
    /// # Errors
    ///
    /// Returns [`LightCtlError::Validation`] when the clock
    /// ([`ValidationError::MissingClock`]) or the light switch
    /// ([`ValidationError::MissingLightSwitch`]) was not provided.
    pub fn build(self) -> Result<LightActuator<C, S, P>, LightCtlError> {
        let clock = self.clock.ok_or(ValidationError::MissingClock)?;
        let switch = self.switch.ok_or(ValidationError::MissingLightSwitch)?;
        let state = self
            .last_motion
            .map_or_else(ActuatorState::new, ActuatorState::with_last_motion);
        Ok(LightActuator {
            clock,
            switch,
            classifier: self.classifier,
            state,
        })
    }
}
