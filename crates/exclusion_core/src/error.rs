//! Error types for the simulation engine.

use crate::driver::DriverState;
use exclusion_data::{LatticeError, RateError};
use thiserror::Error;

/// Failures raised by the simulation engine.
///
/// A jammed lattice is not an error; it is reported through
/// [`exclusion_data::TerminationReason`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Rejected parameters, detected before any step runs.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The sampler was handed an empty event set. Indicates a logic defect
    /// in the caller.
    #[error("No events available to sample")]
    NoEventsAvailable,

    /// `run` was called on a driver that already ran.
    #[error("Driver cannot run from state {0:?}")]
    InvalidState(DriverState),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

impl From<RateError> for SimError {
    fn from(err: RateError) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

impl From<LatticeError> for SimError {
    fn from(err: LatticeError) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}
