//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and the `fsm_config!` macro for
//! creating configurations in code instead of loading them from JSON.

pub mod config;
pub mod error;
pub mod macros;

pub use config::{ConfigBuilder, StateBuilder};
pub use error::BuildError;

use crate::core::{EventId, StateId};

/// Build a cyclic configuration where one event steps through `states` in
/// order and wraps around to the first. The first state is initial.
///
/// # Example
///
/// ```
/// use rewind::builder::cycle;
/// use rewind::StateMachine;
///
/// let mut light = StateMachine::new(cycle("next", ["red", "green", "yellow"]).unwrap());
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// assert_eq!(light.state(), "red");
/// ```
pub fn cycle<E, S, I>(event: E, states: I) -> Result<crate::config::Configuration, BuildError>
where
    E: Into<EventId>,
    S: Into<StateId>,
    I: IntoIterator<Item = S>,
{
    let event = event.into();
    let states: Vec<StateId> = states.into_iter().map(Into::into).collect();
    let first = states.first().cloned().ok_or(BuildError::NoStates)?;

    let mut builder = ConfigBuilder::new().initial(first.clone());
    for (position, state) in states.iter().enumerate() {
        let next = states.get(position + 1).unwrap_or(&first).clone();
        builder = builder.state(state.clone(), |s| s.on(event.clone(), next));
    }
    builder.build()
}
