//! The validated, immutable definition and its query layer.
//!
//! A `Definition` is the closed set of event descriptors for one machine
//! type plus the transition graph derived from them. It is validated
//! exactly once, by [`DefinitionBuilder::build`](crate::DefinitionBuilder::build),
//! and never mutated afterwards: sharing one definition across any number
//! of machine instances (and threads) is safe by construction.
//!
//! The query methods here are the only surface renderers and other
//! read-only consumers get; all of them are pure.

use crate::core::{Event, State};
use crate::graph::StateGraph;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A state was referenced that is not part of the definition's state
/// set, or no state could be derived at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStateError<S: State> {
    #[error("state {state:?} is not part of the definition")]
    Unknown { state: S },

    #[error("the definition declares no default initial state")]
    NoDefaultInitial,
}

/// The immutable aggregate of all events for one machine type.
///
/// Holds the event descriptors in declaration order, the derived
/// transition graph, and the optional default initial/accepting states.
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
///     .build()?;
///
/// let states: Vec<_> = definition.states().collect();
/// assert_eq!(states, vec![&"red", &"green", &"yellow"]);
///
/// let outgoing = definition.outgoing(&"red")?;
/// assert_eq!(outgoing.len(), 1);
/// assert_eq!(outgoing[0].name(), "go");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Definition<S: State> {
    events: Vec<Event<S>>,
    event_index: HashMap<String, usize>,
    graph: StateGraph<S>,
    initial_state: Option<S>,
    accepting_states: Vec<S>,
}

impl<S: State> Definition<S> {
    pub(crate) fn new(
        events: Vec<Event<S>>,
        event_index: HashMap<String, usize>,
        graph: StateGraph<S>,
        initial_state: Option<S>,
        accepting_states: Vec<S>,
    ) -> Self {
        Self {
            events,
            event_index,
            graph,
            initial_state,
            accepting_states,
        }
    }

    pub(crate) fn graph(&self) -> &StateGraph<S> {
        &self.graph
    }

    /// All states in discovery order (per event in declaration order,
    /// sources first, then the destination).
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.graph.states().iter()
    }

    /// All event descriptors in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &Event<S>> {
        self.events.iter()
    }

    /// Look up an event descriptor by name.
    pub fn event(&self, name: &str) -> Option<&Event<S>> {
        self.event_index.get(name).map(|&index| &self.events[index])
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.graph.index_of(state).is_some()
    }

    pub fn state_count(&self) -> usize {
        self.graph.state_count()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Events whose source states contain `state`, in declaration order.
    pub fn outgoing(&self, state: &S) -> Result<Vec<&Event<S>>, InvalidStateError<S>> {
        let index = self.state_index(state)?;
        let mut seen = HashSet::new();
        let mut events = Vec::new();
        for &edge in self.graph.outgoing_edges(index) {
            let event = self.graph.edges()[edge].event;
            if seen.insert(event) {
                events.push(&self.events[event]);
            }
        }
        Ok(events)
    }

    /// Events whose destination state equals `state`, in declaration
    /// order.
    pub fn incoming(&self, state: &S) -> Result<Vec<&Event<S>>, InvalidStateError<S>> {
        let index = self.state_index(state)?;
        let mut seen = HashSet::new();
        let mut events = Vec::new();
        for &edge in self.graph.incoming_edges(index) {
            let event = self.graph.edges()[edge].event;
            if seen.insert(event) {
                events.push(&self.events[event]);
            }
        }
        Ok(events)
    }

    /// Names of the events leaving the given state subset, deduplicated,
    /// first-seen order: the outbound cut of the subset.
    pub fn out_events<'a, I>(&self, states: I) -> Result<Vec<&str>, InvalidStateError<S>>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for state in states {
            let index = self.state_index(state)?;
            for &edge in self.graph.outgoing_edges(index) {
                let event = self.graph.edges()[edge].event;
                if seen.insert(event) {
                    names.push(self.events[event].name());
                }
            }
        }
        Ok(names)
    }

    /// Names of the events entering the given state subset, deduplicated,
    /// first-seen order: the inbound cut of the subset.
    pub fn in_events<'a, I>(&self, states: I) -> Result<Vec<&str>, InvalidStateError<S>>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for state in states {
            let index = self.state_index(state)?;
            for &edge in self.graph.incoming_edges(index) {
                let event = self.graph.edges()[edge].event;
                if seen.insert(event) {
                    names.push(self.events[event].name());
                }
            }
        }
        Ok(names)
    }

    /// The full `(source, dest, event name)` edge list in declaration
    /// order, one row per (source, event) pair.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &S, &str)> {
        self.events.iter().flat_map(|event| {
            event
                .edges()
                .map(move |(source, dest)| (source, dest, event.name()))
        })
    }

    /// The default initial state for instances, if declared.
    pub fn default_initial_state(&self) -> Option<&S> {
        self.initial_state.as_ref()
    }

    /// The default accepting states, in declaration order.
    pub fn accepting_states(&self) -> &[S] {
        &self.accepting_states
    }

    fn state_index(&self, state: &S) -> Result<usize, InvalidStateError<S>> {
        self.graph
            .index_of(state)
            .ok_or_else(|| InvalidStateError::Unknown {
                state: state.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefinitionBuilder;

    fn star() -> Definition<&'static str> {
        DefinitionBuilder::new()
            .event("collapse", ["state_a", "state_b", "state_c"], "center")
            .event("collapse2", ["state_f"], "center")
            .event("back", ["center"], "state_f")
            .build()
            .unwrap()
    }

    #[test]
    fn states_are_in_discovery_order() {
        let definition = star();

        let states: Vec<_> = definition.states().collect();
        assert_eq!(
            states,
            vec![&"state_a", &"state_b", &"state_c", &"center", &"state_f"]
        );
    }

    #[test]
    fn events_are_in_declaration_order() {
        let definition = star();

        let names: Vec<_> = definition.events().map(Event::name).collect();
        assert_eq!(names, vec!["collapse", "collapse2", "back"]);
    }

    #[test]
    fn event_lookup_by_name() {
        let definition = star();

        assert_eq!(definition.event("back").unwrap().dest_state(), &"state_f");
        assert!(definition.event("unknown").is_none());
    }

    #[test]
    fn outgoing_lists_events_leaving_a_state() {
        let definition = star();

        let outgoing = definition.outgoing(&"state_a").unwrap();
        assert_eq!(outgoing.len(), 1);
        assert_eq!(outgoing[0].name(), "collapse");

        assert!(definition.outgoing(&"state_f").unwrap()[0].name() == "collapse2");
    }

    #[test]
    fn incoming_deduplicates_multi_source_events() {
        let definition = star();

        // "collapse" enters center through three edges but is one event.
        let incoming = definition.incoming(&"center").unwrap();
        let names: Vec<_> = incoming.iter().map(|event| event.name()).collect();
        assert_eq!(names, vec!["collapse", "collapse2"]);
    }

    #[test]
    fn unknown_state_queries_fail() {
        let definition = star();

        assert_eq!(
            definition.outgoing(&"unknown").unwrap_err(),
            InvalidStateError::Unknown { state: "unknown" }
        );
        assert!(definition.incoming(&"unknown").is_err());
    }

    #[test]
    fn in_events_form_the_inbound_cut() {
        let definition = star();

        assert!(definition.in_events(["state_a"].iter()).unwrap().is_empty());
        assert_eq!(
            definition.in_events(["center"].iter()).unwrap(),
            vec!["collapse", "collapse2"]
        );
        // Events internal to the subset still count, matching the
        // edge-cut of each member taken individually.
        assert_eq!(
            definition.in_events(["center", "state_f"].iter()).unwrap(),
            vec!["collapse", "collapse2", "back"]
        );
    }

    #[test]
    fn out_events_form_the_outbound_cut() {
        let definition = star();

        assert_eq!(
            definition
                .out_events(["state_a", "state_b"].iter())
                .unwrap(),
            vec!["collapse"]
        );
        assert_eq!(
            definition.out_events(["center"].iter()).unwrap(),
            vec!["back"]
        );
        assert!(definition.out_events([].iter()).unwrap().is_empty());
    }

    #[test]
    fn cut_queries_reject_unknown_states() {
        let definition = star();

        assert!(definition.in_events(["unknown"].iter()).is_err());
        assert!(definition.out_events(["center", "unknown"].iter()).is_err());
    }

    #[test]
    fn transitions_expand_multi_source_events() {
        let definition = star();

        let rows: Vec<_> = definition.transitions().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], (&"state_a", &"center", "collapse"));
        assert_eq!(rows[3], (&"state_f", &"center", "collapse2"));
        assert_eq!(rows[4], (&"center", &"state_f", "back"));
    }

    #[test]
    fn queries_are_idempotent() {
        let definition = star();

        let first: Vec<_> = definition.states().collect();
        let second: Vec<_> = definition.states().collect();
        assert_eq!(first, second);

        assert_eq!(
            definition.outgoing(&"center").unwrap(),
            definition.outgoing(&"center").unwrap()
        );
        assert_eq!(
            definition.in_events(["center"].iter()).unwrap(),
            definition.in_events(["center"].iter()).unwrap()
        );
    }

    #[test]
    fn defaults_are_exposed() {
        let definition = DefinitionBuilder::new()
            .event("go", ["red"], "green")
            .initial_state("red")
            .accepting_states(["green"])
            .build()
            .unwrap();

        assert_eq!(definition.default_initial_state(), Some(&"red"));
        assert_eq!(definition.accepting_states(), &["green"]);
    }
}
