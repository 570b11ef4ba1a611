//! The derived transition graph.
//!
//! Built once by the definition builder and never mutated afterwards.
//! States are interned in discovery order; each (source, event) pair
//! becomes one directed edge labeled with the event's index. The graph
//! is owned exclusively by the `Definition` and reaches the outside
//! world only through its read-only query surface.

mod connectivity;

use crate::core::State;
use std::collections::HashMap;

/// One directed edge: a single (source, event) pair fanning into the
/// event's destination. Indices refer to the graph's state table and the
/// definition's event table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) source: usize,
    pub(crate) dest: usize,
    pub(crate) event: usize,
}

/// Directed multigraph over interned states, with adjacency kept in both
/// directions for incoming/outgoing queries and the undirected
/// connectivity check.
#[derive(Clone, Debug)]
pub(crate) struct StateGraph<S: State> {
    states: Vec<S>,
    index: HashMap<S, usize>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl<S: State> StateGraph<S> {
    pub(crate) fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Intern a state, returning its index. Already-known states keep
    /// their original index, so iteration order is discovery order.
    pub(crate) fn intern(&mut self, state: &S) -> usize {
        if let Some(&index) = self.index.get(state) {
            return index;
        }
        let index = self.states.len();
        self.states.push(state.clone());
        self.index.insert(state.clone(), index);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        index
    }

    pub(crate) fn add_edge(&mut self, source: usize, dest: usize, event: usize) {
        let edge = self.edges.len();
        self.edges.push(Edge {
            source,
            dest,
            event,
        });
        self.outgoing[source].push(edge);
        self.incoming[dest].push(edge);
    }

    pub(crate) fn states(&self) -> &[S] {
        &self.states
    }

    pub(crate) fn index_of(&self, state: &S) -> Option<usize> {
        self.index.get(state).copied()
    }

    pub(crate) fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge indices leaving a state, in insertion order.
    pub(crate) fn outgoing_edges(&self, state: usize) -> &[usize] {
        &self.outgoing[state]
    }

    /// Edge indices entering a state, in insertion order.
    pub(crate) fn incoming_edges(&self, state: usize) -> &[usize] {
        &self.incoming[state]
    }

    /// Number of incoming (source, event) edges, counting multiplicity.
    pub(crate) fn in_degree(&self, state: usize) -> usize {
        self.incoming[state].len()
    }

    pub(crate) fn out_degree(&self, state: usize) -> usize {
        self.outgoing[state].len()
    }

    pub(crate) fn state_count(&self) -> usize {
        self.states.len()
    }
}
