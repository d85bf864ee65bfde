//! Rewind: a configuration-driven finite state machine with undo/redo.
//!
//! A [`StateMachine`] holds exactly one active state out of a configured set.
//! It moves either directly (`change_state`) or by following a named event
//! (`trigger`), and keeps a linear history so moves can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: initial state plus, per state, a map of event to
//!   destination state. Loaded from JSON, built with [`ConfigBuilder`], or
//!   written with [`fsm_config!`].
//! - **History**: stack of states the machine has left. Every forward move
//!   pushes onto it and drops any pending redo.
//! - **Errors**: invalid targets and unknown events are `Err`; running out of
//!   history is a plain `false` from `undo`/`redo`.
//!
//! # Example
//!
//! ```rust
//! use rewind::{FsmError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle":    { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "pause": "paused", "stop": "idle" } },
//!         "paused":  { "transitions": { "resume": "running" } }
//!     }
//! }"#).unwrap();
//!
//! machine.trigger("start").unwrap();
//! machine.trigger("pause").unwrap();
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//!
//! assert!(matches!(
//!     machine.change_state("unknown"),
//!     Err(FsmError::InvalidState { .. })
//! ));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use config::{Configuration, ConfigurationError, StateDefinition, ValidationError};
pub use crate::core::{EventId, StateId};
pub use error::{FsmError, FsmResult};
pub use machine::StateMachine;
