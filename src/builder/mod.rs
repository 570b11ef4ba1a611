//! Builder API for declaring machine definitions.
//!
//! The builder collects event declarations in order, then `build`
//! derives the transition graph, validates it (single connected
//! component, well-formed events) and returns the immutable
//! [`Definition`]. This is the only way to construct a definition.

pub mod error;
pub mod macros;

pub use error::DefinitionError;

use crate::core::{Event, State};
use crate::definition::Definition;
use crate::graph::StateGraph;
use std::collections::HashMap;

/// Fluent builder collecting the event declarations of one machine
/// definition.
///
/// Declaration order is preserved: it determines the discovery order of
/// states and the order of every query and rendering derived from the
/// definition (it is irrelevant to correctness).
///
/// # Example
///
/// ```rust
/// use automaton::DefinitionBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let definition = DefinitionBuilder::new()
///     .event("go", ["red"], "green")
///     .event("slowdown", ["green"], "yellow")
///     .event("stop", ["yellow"], "red")
///     .initial_state("red")
///     .accepting_states(["red", "green"])
///     .build()?;
///
/// assert_eq!(definition.state_count(), 3);
/// assert_eq!(definition.event_count(), 3);
/// # Ok(())
/// # }
/// ```
pub struct DefinitionBuilder<S: State> {
    events: Vec<Event<S>>,
    initial_state: Option<S>,
    accepting_states: Vec<S>,
}

impl<S: State> DefinitionBuilder<S> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            initial_state: None,
            accepting_states: Vec::new(),
        }
    }

    /// Declare an event: a named transition from each of `sources` to
    /// `dest`. Errors (empty source set, duplicate name) are reported by
    /// [`build`](Self::build).
    pub fn event<N, I>(mut self, name: N, sources: I, dest: S) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.events.push(Event::new(name, sources, dest));
        self
    }

    /// Declare a pre-built event descriptor.
    pub fn add_event(mut self, event: Event<S>) -> Self {
        self.events.push(event);
        self
    }

    /// Set the default initial state for instances created without an
    /// explicit one. Must be a member of the inferred state set.
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the default accepting states. Each must be a member of the
    /// inferred state set. Instances may override this set.
    pub fn accepting_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for state in states {
            if !self.accepting_states.contains(&state) {
                self.accepting_states.push(state);
            }
        }
        self
    }

    /// Build the definition: derive the transition graph, run the
    /// connectivity check and validate the default states.
    ///
    /// The returned definition is immutable; share it across instances
    /// with an `Arc`.
    pub fn build(self) -> Result<Definition<S>, DefinitionError<S>> {
        if self.events.is_empty() {
            return Err(DefinitionError::NoEvents);
        }

        let mut event_index = HashMap::new();
        for (index, event) in self.events.iter().enumerate() {
            if event.source_states().is_empty() {
                return Err(DefinitionError::NoSourceStates {
                    event: event.name().to_string(),
                });
            }
            if event_index.insert(event.name().to_string(), index).is_some() {
                return Err(DefinitionError::DuplicateEvent {
                    name: event.name().to_string(),
                });
            }
        }

        // Discovery order: per event in declaration order, each source
        // state first, then the destination.
        let mut graph = StateGraph::new();
        for (index, event) in self.events.iter().enumerate() {
            let sources: Vec<usize> = event
                .source_states()
                .iter()
                .map(|source| graph.intern(source))
                .collect();
            let dest = graph.intern(event.dest_state());
            for source in sources {
                graph.add_edge(source, dest, index);
            }
        }

        let components = graph.undirected_components();
        if components.len() > 1 {
            let components = components
                .into_iter()
                .map(|component| {
                    component
                        .into_iter()
                        .map(|index| graph.states()[index].clone())
                        .collect()
                })
                .collect();
            return Err(DefinitionError::DisconnectedGraph { components });
        }

        if let Some(state) = &self.initial_state {
            if graph.index_of(state).is_none() {
                return Err(DefinitionError::UnknownInitialState {
                    state: state.clone(),
                });
            }
        }
        for state in &self.accepting_states {
            if graph.index_of(state).is_none() {
                return Err(DefinitionError::UnknownAcceptingState {
                    state: state.clone(),
                });
            }
        }

        Ok(Definition::new(
            self.events,
            event_index,
            graph,
            self.initial_state,
            self.accepting_states,
        ))
    }
}

impl<S: State> Default for DefinitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
