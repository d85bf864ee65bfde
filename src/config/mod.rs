//! Static state machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and where each event leads. It is supplied once when a
//! machine is created and never changes afterwards.
//!
//! The JSON shape is:
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "pause": "paused", "stop": "idle" } },
//!     "paused":  { "transitions": { "resume": "running" } }
//!   }
//! }
//! ```
//!
//! States keep the order they were declared in.

use crate::core::{EventId, StateId};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;
mod ordered;
pub mod validate;

pub use error::ConfigurationError;
pub use ordered::OrderedMap;
pub use validate::ValidationError;

/// Events a single state reacts to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    transitions: OrderedMap<EventId, StateId>,
}

impl StateDefinition {
    pub fn new(transitions: OrderedMap<EventId, StateId>) -> Self {
        Self { transitions }
    }

    /// Destination of `event` from this state, if the state defines one.
    pub fn target(&self, event: &str) -> Option<&StateId> {
        self.transitions.get(event)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events defined on this state, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &EventId> {
        self.transitions.keys()
    }

    pub fn transitions(&self) -> impl Iterator<Item = (&EventId, &StateId)> {
        self.transitions.iter()
    }
}

/// Complete configuration of a state machine.
///
/// Construction does not check that `initial` or the transition targets are
/// configured states. Use [`Configuration::validate`] for that.
///
/// # Example
///
/// ```rust
/// use rewind::config::Configuration;
///
/// let config = Configuration::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    initial: StateId,
    states: OrderedMap<StateId, StateDefinition>,
}

impl Configuration {
    pub fn new(initial: StateId, states: OrderedMap<StateId, StateDefinition>) -> Self {
        Self { initial, states }
    }

    /// Parse a configuration from JSON text.
    ///
    /// Blank input and a JSON `null` both count as an absent configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigurationError> {
        if text.trim().is_empty() {
            return Err(ConfigurationError::Missing);
        }
        let config: Option<Self> = serde_json::from_str(text)?;
        Self::present(config)
    }

    /// Build a configuration from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigurationError> {
        let config: Option<Self> = serde_json::from_value(value)?;
        Self::present(config)
    }

    fn present(config: Option<Self>) -> Result<Self, ConfigurationError> {
        let config = config.ok_or(ConfigurationError::Missing)?;
        debug!(
            initial = %config.initial,
            states = config.states.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Definition of `state`, if it is configured.
    pub fn definition(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// The configured key equal to `state`, if any.
    pub fn state_id(&self, state: &str) -> Option<&StateId> {
        self.states.get_key_value(state).map(|(id, _)| id)
    }

    /// All configured states, in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &StateId> {
        self.states.keys()
    }

    pub fn states(&self) -> impl Iterator<Item = (&StateId, &StateDefinition)> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PLAYER: &str = r#"{
        "initial": "idle",
        "states": {
            "idle": { "transitions": { "start": "running" } },
            "running": { "transitions": { "pause": "paused", "stop": "idle" } },
            "paused": { "transitions": { "resume": "running" } }
        }
    }"#;

    #[test]
    fn parses_nested_shape() {
        let config = Configuration::from_json(PLAYER).unwrap();

        assert_eq!(config.initial(), "idle");
        let running = config.definition("running").unwrap();
        assert_eq!(running.target("pause"), Some(&StateId::from("paused")));
        assert_eq!(running.target("stop"), Some(&StateId::from("idle")));
        assert!(running.target("resume").is_none());
    }

    #[test]
    fn states_keep_declaration_order() {
        let config = Configuration::from_json(PLAYER).unwrap();
        let ids: Vec<&str> = config.state_ids().map(StateId::as_str).collect();
        assert_eq!(ids, vec!["idle", "running", "paused"]);
    }

    #[test]
    fn transitions_may_be_omitted() {
        let config = Configuration::from_value(json!({
            "initial": "done",
            "states": { "done": {} }
        }))
        .unwrap();

        let done = config.definition("done").unwrap();
        assert_eq!(done.events().count(), 0);
    }

    #[test]
    fn null_and_blank_input_are_missing() {
        assert!(matches!(
            Configuration::from_json("null"),
            Err(ConfigurationError::Missing)
        ));
        assert!(matches!(
            Configuration::from_json("   \n"),
            Err(ConfigurationError::Missing)
        ));
        assert!(matches!(
            Configuration::from_value(serde_json::Value::Null),
            Err(ConfigurationError::Missing)
        ));
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let result = Configuration::from_json(r#"{"initial": "idle"}"#);
        assert!(matches!(result, Err(ConfigurationError::Parse(_))));

        let result = Configuration::from_json("{not json");
        assert!(matches!(result, Err(ConfigurationError::Parse(_))));
    }

    #[test]
    fn construction_does_not_validate_initial() {
        let config = Configuration::from_value(json!({
            "initial": "ghost",
            "states": { "idle": {} }
        }))
        .unwrap();

        assert_eq!(config.initial(), "ghost");
        assert!(!config.contains_state("ghost"));
    }

    #[test]
    fn configuration_survives_json_roundtrip() {
        let config = Configuration::from_json(PLAYER).unwrap();
        let text = serde_json::to_string(&config).unwrap();
        let reparsed = Configuration::from_json(&text).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn state_id_returns_configured_key() {
        let config = Configuration::from_json(PLAYER).unwrap();
        assert_eq!(config.state_id("paused").map(StateId::as_str), Some("paused"));
        assert!(config.state_id("unknown").is_none());
    }
}
