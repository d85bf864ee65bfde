//! Core building blocks of the state machine.
//!
//! This module contains the plain data the machine is made of:
//! - `StateId` / `EventId` string identifiers
//! - `UndoLog`, the undo/redo stacks
//!
//! Nothing here knows about configuration or validation.

mod history;
mod id;

pub use history::UndoLog;
pub use id::{EventId, StateId};
