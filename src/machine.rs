//! The state machine: one current state, event lookups, and undo/redo.

use crate::config::{Configuration, ConfigurationError};
use crate::core::{StateId, UndoLog};
use crate::error::{FsmError, FsmResult};
use tracing::debug;

/// Finite state machine driven by a static [`Configuration`].
///
/// Every forward move (`change_state` or `trigger`) pushes the state being
/// left onto the history and drops any pending redo. `undo` and `redo` walk
/// that history. `reset` jumps back to the initial state without recording
/// anything.
///
/// # Example
///
/// ```rust
/// use rewind::{fsm_config, StateMachine};
///
/// let mut machine = StateMachine::new(fsm_config! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { stop => idle },
///     }
/// });
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    current: StateId,
    log: UndoLog,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is trusted as given; see [`Self::new_validated`].
    pub fn new(config: Configuration) -> Self {
        let current = config.initial().clone();
        debug!(initial = %current, states = config.len(), "state machine created");
        Self {
            config,
            current,
            log: UndoLog::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn from_config(config: Option<Configuration>) -> FsmResult<Self> {
        config
            .map(Self::new)
            .ok_or(FsmError::Configuration(ConfigurationError::Missing))
    }

    /// Parse a JSON configuration and create a machine from it.
    pub fn from_json(text: &str) -> FsmResult<Self> {
        Ok(Self::new(Configuration::from_json(text)?))
    }

    /// Create a machine only if the configuration passes eager validation.
    pub fn new_validated(config: Configuration) -> FsmResult<Self> {
        let config = config.validated().map_err(ConfigurationError::Invalid)?;
        Ok(Self::new(config))
    }

    /// Active state.
    pub fn state(&self) -> &StateId {
        &self.current
    }

    /// Move directly to `target`, which must be a configured state.
    ///
    /// Nothing changes if `target` is unknown.
    pub fn change_state(&mut self, target: impl AsRef<str>) -> FsmResult<()> {
        let target = target.as_ref();
        let target = match self.config.state_id(target) {
            Some(id) => id.clone(),
            None => {
                return Err(FsmError::InvalidState {
                    state: StateId::from(target),
                })
            }
        };

        self.advance(target);
        Ok(())
    }

    /// Follow the transition for `event` from the active state.
    ///
    /// Nothing changes if the active state has no such transition.
    pub fn trigger(&mut self, event: impl AsRef<str>) -> FsmResult<()> {
        let event = event.as_ref();
        let definition =
            self.config
                .definition(self.current.as_str())
                .ok_or_else(|| FsmError::UnknownCurrentState {
                    state: self.current.clone(),
                    event: event.into(),
                })?;
        let target = definition
            .target(event)
            .cloned()
            .ok_or_else(|| FsmError::InvalidEvent {
                event: event.into(),
                state: self.current.clone(),
            })?;

        debug!(event, "event triggered");
        self.advance(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// History and redo history are left exactly as they were.
    pub fn reset(&mut self) {
        self.current = self.config.initial().clone();
        debug!(state = %self.current, "state machine reset");
    }

    /// Configured states, optionally only those that handle `event`.
    ///
    /// States come back in declaration order.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateId> {
        match event {
            None => self.config.state_ids().collect(),
            Some(event) => self
                .config
                .states()
                .filter(|(_, definition)| definition.handles(event))
                .map(|(id, _)| id)
                .collect(),
        }
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let moved = self.log.step_back(&mut self.current);
        if moved {
            debug!(state = %self.current, "undo");
        }
        moved
    }

    /// Reapply the last undone move. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let moved = self.log.step_forward(&mut self.current);
        if moved {
            debug!(state = %self.current, "redo");
        }
        moved
    }

    /// Forget both undo and redo history. The active state is kept.
    pub fn clear_history(&mut self) {
        self.log.clear();
        debug!(state = %self.current, "history cleared");
    }

    /// Previously visited states, most recent last.
    pub fn history(&self) -> &[StateId] {
        self.log.past()
    }

    /// States available for redo, next one last.
    pub fn undo_history(&self) -> &[StateId] {
        self.log.future()
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_step_back()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_step_forward()
    }

    pub fn initial(&self) -> &StateId {
        self.config.initial()
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    fn advance(&mut self, target: StateId) {
        let previous = std::mem::replace(&mut self.current, target);
        debug!(from = %previous, to = %self.current, "state changed");
        self.log.advance(previous);
    }
}

impl TryFrom<Option<Configuration>> for StateMachine {
    type Error = FsmError;

    fn try_from(config: Option<Configuration>) -> FsmResult<Self> {
        Self::from_config(config)
    }
}

impl From<Configuration> for StateMachine {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}
