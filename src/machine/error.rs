//! Runtime trigger errors.

use crate::core::State;
use thiserror::Error;

/// Errors raised by [`Automaton::trigger`](crate::Automaton::trigger)
/// and by startup-event construction.
///
/// Trigger failures are atomic: the instance's current state is left
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError<S: State> {
    /// The event name is not part of the definition.
    #[error("unknown event '{name}'")]
    UnknownEvent { name: String },

    /// The event exists but its declared source states do not include
    /// the instance's current state. Carries the full declaration plus
    /// the actual state for diagnosability.
    #[error(
        "event '{event}' cannot fire from state {current:?} \
         (declared sources {sources:?}, destination {dest:?})"
    )]
    InvalidTransition {
        event: String,
        sources: Vec<S>,
        dest: S,
        current: S,
    },
}
