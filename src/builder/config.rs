//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::config::{Configuration, OrderedMap, StateDefinition};
use crate::core::{EventId, StateId};

/// Builder for the transitions of a single state.
#[derive(Debug, Default)]
pub struct StateBuilder {
    transitions: OrderedMap<EventId, StateId>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken when `event` fires in this state.
    /// A second call with the same event replaces the target.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    pub fn build(self) -> StateDefinition {
        StateDefinition::new(self.transitions)
    }
}

/// Builder for constructing configurations with a fluent API.
///
/// Unlike JSON loading, `build` validates eagerly: the initial state and
/// every transition target must be declared states.
///
/// # Example
///
/// ```rust
/// use rewind::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("draft")
///     .state("draft", |s| s.on("submit", "review"))
///     .state("review", |s| s.on("approve", "published").on("reject", "draft"))
///     .terminal("published")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: OrderedMap<StateId, StateDefinition>,
    duplicates: Vec<StateId>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state and its transitions.
    pub fn state<F>(self, name: impl Into<StateId>, define: F) -> Self
    where
        F: FnOnce(StateBuilder) -> StateBuilder,
    {
        let definition = define(StateBuilder::new()).build();
        self.add_state(name.into(), definition)
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal(self, name: impl Into<StateId>) -> Self {
        self.add_state(name.into(), StateDefinition::default())
    }

    /// Add a pre-built state definition.
    pub fn add_state(mut self, name: StateId, definition: StateDefinition) -> Self {
        if self.states.contains_key(name.as_str()) {
            self.duplicates.push(name);
        } else {
            self.states.insert(name, definition);
        }
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or validation fails.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        if let Some(state) = self.duplicates.into_iter().next() {
            return Err(BuildError::DuplicateState { state });
        }

        Configuration::new(initial, self.states)
            .validated()
            .map_err(BuildError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationError;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::new().terminal("idle").build();
        assert_eq!(result, Err(BuildError::MissingInitialState));
    }

    #[test]
    fn builder_requires_states() {
        let result = ConfigBuilder::new().initial("idle").build();
        assert_eq!(result, Err(BuildError::NoStates));
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let result = ConfigBuilder::new()
            .initial("idle")
            .state("idle", |s| s.on("start", "idle"))
            .terminal("idle")
            .build();

        assert_eq!(
            result,
            Err(BuildError::DuplicateState {
                state: StateId::from("idle")
            })
        );
    }

    #[test]
    fn build_runs_validation() {
        let result = ConfigBuilder::new()
            .initial("idle")
            .state("idle", |s| s.on("start", "running"))
            .build();

        match result {
            Err(BuildError::Invalid(problems)) => {
                assert!(matches!(
                    problems.as_slice(),
                    [ValidationError::UnknownTransitionTarget { .. }]
                ));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn fluent_api_builds_configuration() {
        let config = ConfigBuilder::new()
            .initial("idle")
            .state("idle", |s| s.on("start", "running"))
            .state("running", |s| s.on("pause", "paused").on("stop", "idle"))
            .state("paused", |s| s.on("resume", "running"))
            .build()
            .unwrap();

        assert_eq!(config.initial(), "idle");
        let order: Vec<&str> = config.state_ids().map(StateId::as_str).collect();
        assert_eq!(order, vec!["idle", "running", "paused"]);

        let running = config.definition("running").unwrap();
        let events: Vec<&str> = running.events().map(EventId::as_str).collect();
        assert_eq!(events, vec!["pause", "stop"]);
    }

    #[test]
    fn repeated_event_replaces_target() {
        let definition = StateBuilder::new().on("go", "a").on("go", "b").build();
        assert_eq!(definition.target("go"), Some(&StateId::from("b")));
        assert_eq!(definition.events().count(), 1);
    }
}
