//! Configuration error types.

use crate::config::validate::ValidationError;
use thiserror::Error;

/// Errors that can occur while obtaining a usable configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No configuration was supplied
    #[error("No configuration supplied")]
    Missing,

    /// Configuration text was not valid JSON of the expected shape
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration failed eager validation
    #[error("Configuration is invalid: {}", describe(.0))]
    Invalid(Vec<ValidationError>),
}

fn describe(problems: &[ValidationError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
