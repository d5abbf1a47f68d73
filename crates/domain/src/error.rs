//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`LightCtlError`] via `#[from]` when crossing a port boundary.

/// Top-level error for the light controller core.
#[derive(Debug, thiserror::Error)]
pub enum LightCtlError {
    /// The actuator was assembled without a required collaborator.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A collaborator (clock, light switch, motion sensor) reported a failure.
    #[error("device error")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LightCtlError {
    /// Wrap a collaborator failure.
    pub fn device(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Device(Box::new(err))
    }
}

/// Construction-time validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no clock was provided")]
    MissingClock,

    #[error("no light switch was provided")]
    MissingLightSwitch,
}
