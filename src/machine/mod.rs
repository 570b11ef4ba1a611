//! The stateful machine instance.
//!
//! An [`Automaton`] binds a shared, immutable [`Definition`] to one
//! mutable current state. The current state is the only mutable data in
//! the whole library, and it is owned exclusively by the instance:
//! [`Automaton::trigger`] takes `&mut self`, so concurrent triggering of
//! one instance is ruled out statically by the borrow checker. A host
//! that wants to drive one instance from several threads wraps it in a
//! `Mutex`; instances sharing a definition never interfere.

mod error;

pub use error::TransitionError;

use crate::core::State;
use crate::definition::{Definition, InvalidStateError};
use std::collections::HashSet;
use std::sync::Arc;

/// A live machine instance tracking its current state.
///
/// # Example
///
/// ```rust
/// use automaton::{Automaton, DefinitionBuilder};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let definition = Arc::new(
///     DefinitionBuilder::new()
///         .event("go", ["red"], "green")
///         .event("slowdown", ["green"], "yellow")
///         .event("stop", ["yellow"], "red")
///         .build()?,
/// );
///
/// let mut light = Automaton::with_initial_state(Arc::clone(&definition), "red")?;
/// light.trigger("go")?;
/// assert_eq!(light.current_state(), &"green");
///
/// // Illegal from green: the state is untouched.
/// assert!(light.trigger("stop").is_err());
/// assert_eq!(light.current_state(), &"green");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<S: State> {
    definition: Arc<Definition<S>>,
    state: S,
    accepting: HashSet<S>,
}

impl<S: State> Automaton<S> {
    /// Create an instance in the definition's default initial state.
    ///
    /// Fails with [`InvalidStateError::NoDefaultInitial`] when the
    /// definition declares none.
    pub fn new(definition: Arc<Definition<S>>) -> Result<Self, InvalidStateError<S>> {
        let state = definition
            .default_initial_state()
            .cloned()
            .ok_or(InvalidStateError::NoDefaultInitial)?;
        Self::with_initial_state(definition, state)
    }

    /// Create an instance in an explicit initial state.
    ///
    /// Fails with [`InvalidStateError::Unknown`] when the state is not
    /// part of the definition.
    pub fn with_initial_state(
        definition: Arc<Definition<S>>,
        state: S,
    ) -> Result<Self, InvalidStateError<S>> {
        if !definition.contains_state(&state) {
            return Err(InvalidStateError::Unknown { state });
        }
        let accepting = definition.accepting_states().iter().cloned().collect();
        Ok(Self {
            definition,
            state,
            accepting,
        })
    }

    /// Create an instance by firing a startup event: the instance starts
    /// in the event's destination state. There is no current state yet,
    /// so no legality check applies.
    ///
    /// Fails with [`TransitionError::UnknownEvent`] when the event name
    /// is not part of the definition.
    pub fn with_initial_event(
        definition: Arc<Definition<S>>,
        event: &str,
    ) -> Result<Self, TransitionError<S>> {
        let state = definition
            .event(event)
            .map(|descriptor| descriptor.dest_state().clone())
            .ok_or_else(|| TransitionError::UnknownEvent {
                name: event.to_string(),
            })?;
        let accepting = definition.accepting_states().iter().cloned().collect();
        Ok(Self {
            definition,
            state,
            accepting,
        })
    }

    /// Replace the accepting set for this instance, overriding the
    /// definition's default. Each state must be part of the definition.
    pub fn with_accepting_states<I>(mut self, states: I) -> Result<Self, InvalidStateError<S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut accepting = HashSet::new();
        for state in states {
            if !self.definition.contains_state(&state) {
                return Err(InvalidStateError::Unknown { state });
            }
            accepting.insert(state);
        }
        self.accepting = accepting;
        Ok(self)
    }

    /// The current state. Pure read.
    pub fn current_state(&self) -> &S {
        &self.state
    }

    /// Whether the current state is an accepting state.
    pub fn is_accepted(&self) -> bool {
        self.accepting.contains(&self.state)
    }

    /// The shared definition this instance was built from.
    pub fn definition(&self) -> &Arc<Definition<S>> {
        &self.definition
    }

    /// Fire the named event against the current state.
    ///
    /// Succeeds iff the current state is one of the event's declared
    /// sources; on success the current state becomes the event's
    /// destination. Atomic: on any failure the state is untouched.
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError<S>> {
        let descriptor =
            self.definition
                .event(event)
                .ok_or_else(|| TransitionError::UnknownEvent {
                    name: event.to_string(),
                })?;
        if !descriptor.source_states().contains(&self.state) {
            return Err(TransitionError::InvalidTransition {
                event: descriptor.name().to_string(),
                sources: descriptor.source_states().to_vec(),
                dest: descriptor.dest_state().clone(),
                current: self.state.clone(),
            });
        }
        let dest = descriptor.dest_state().clone();
        self.state = dest;
        Ok(())
    }
}
