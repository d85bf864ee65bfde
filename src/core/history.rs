//! Linear undo/redo log of visited states.
//!
//! The log holds two stacks. `past` is the history of states the machine has
//! left, most recent last. `future` holds states that were undone away from,
//! so they can be redone. Any forward move invalidates `future`.

use super::id::StateId;

/// Undo/redo stacks for a state machine.
///
/// The log never inspects states; it only moves them between stacks and the
/// caller's current state.
///
/// # Example
///
/// ```rust
/// use rewind::core::{StateId, UndoLog};
///
/// let mut log = UndoLog::new();
/// let mut current = StateId::from("a");
///
/// log.advance(std::mem::replace(&mut current, StateId::from("b")));
/// assert!(log.step_back(&mut current));
/// assert_eq!(current, "a");
/// assert!(log.step_forward(&mut current));
/// assert_eq!(current, "b");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoLog {
    past: Vec<StateId>,
    future: Vec<StateId>,
}

impl UndoLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `left` was the state before a forward move.
    ///
    /// Clears the redo stack.
    pub fn advance(&mut self, left: StateId) {
        self.past.push(left);
        self.future.clear();
    }

    /// Move `current` one step back in history.
    ///
    /// Returns `false` without touching anything when there is nothing to
    /// undo.
    pub fn step_back(&mut self, current: &mut StateId) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(std::mem::replace(current, previous));
                true
            }
            None => false,
        }
    }

    /// Move `current` one step forward, reversing the last `step_back`.
    ///
    /// Returns `false` without touching anything when there is nothing to
    /// redo.
    pub fn step_forward(&mut self, current: &mut StateId) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(std::mem::replace(current, next));
                true
            }
            None => false,
        }
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Previously visited states, oldest first.
    pub fn past(&self) -> &[StateId] {
        &self.past
    }

    /// States available for redo; the next one to be redone is last.
    pub fn future(&self) -> &[StateId] {
        &self.future
    }

    pub fn can_step_back(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.future.is_empty()
    }
}
