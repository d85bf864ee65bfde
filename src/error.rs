//! Errors returned by state machine operations.

use crate::config::ConfigurationError;
use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when creating or driving a state machine.
///
/// Running out of undo or redo history is not an error; `undo` and `redo`
/// report it by returning `false`.
#[derive(Debug, Error)]
pub enum FsmError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("'{state}' is not a configured state")]
    InvalidState { state: StateId },

    #[error("State '{state}' has no transition for event '{event}'")]
    InvalidEvent { event: EventId, state: StateId },

    /// The machine sits in a state its configuration does not define. Only
    /// reachable when the configured initial state is not a real state.
    #[error("Current state '{state}' is not configured; cannot handle event '{event}'")]
    UnknownCurrentState { state: StateId, event: EventId },
}

pub type FsmResult<T> = Result<T, FsmError>;
