//! Core automaton types.
//!
//! This module contains the pure leaf types of the library:
//! - State identifiers via the `State` trait
//! - Event descriptors declaring named transitions
//!
//! Everything here is an immutable value; all validation and runtime
//! behavior lives in the builder and machine modules.

mod event;
mod state;

pub use event::Event;
pub use state::State;
