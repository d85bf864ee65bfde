//! Eager configuration validation.
//!
//! Machines built with `StateMachine::new` trust their configuration: a bad
//! `initial` or a dangling transition target only shows up when it is hit.
//! `Configuration::validate` checks everything up front and reports every
//! problem at once using Stillwater's `Validation`, instead of stopping at the
//! first.

use crate::config::Configuration;
use crate::core::{EventId, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems found by eager validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Initial state '{initial}' is not a configured state")]
    UnknownInitialState { initial: StateId },

    #[error("Transition '{event}' from '{from}' targets unknown state '{target}'")]
    UnknownTransitionTarget {
        from: StateId,
        event: EventId,
        target: StateId,
    },
}

impl Configuration {
    /// Check the configuration, accumulating ALL problems.
    ///
    /// Returns `Validation::Success(())` when the initial state and every
    /// transition target are configured states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::fsm_config;
    ///
    /// let config = fsm_config! {
    ///     initial: off,
    ///     states: {
    ///         on => { toggle => off },
    ///         off => { toggle => on, smash => broken },
    ///     }
    /// };
    ///
    /// assert!(config.validate().is_failure());
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ValidationError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = Vec::new();

        let initial = self.initial();
        checks.push(if self.contains_state(initial.as_str()) {
            Validation::success(())
        } else {
            Validation::fail(ValidationError::UnknownInitialState {
                initial: initial.clone(),
            })
        });

        for (from, definition) in self.states.iter() {
            for (event, target) in definition.transitions() {
                if !self.contains_state(target.as_str()) {
                    checks.push(Validation::fail(ValidationError::UnknownTransitionTarget {
                        from: from.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and collect the problems into a plain `Result`.
    pub fn validated(self) -> Result<Self, Vec<ValidationError>> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}
