//! Build errors for the configuration builder.

use crate::config::ValidationError;
use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' defined more than once")]
    DuplicateState { state: StateId },

    #[error("Configuration is invalid ({} problem(s))", .0.len())]
    Invalid(Vec<ValidationError>),
}
