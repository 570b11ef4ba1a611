//! Connectivity check over the undirected projection of the graph.
//!
//! A state machine with unreachable islands is almost always a
//! declaration bug (a typo in a state name, a copy-paste error), so the
//! builder runs this check once at definition time and fails loudly
//! instead of letting the bug surface at first use.

use super::StateGraph;
use crate::core::State;
use std::collections::VecDeque;

impl<S: State> StateGraph<S> {
    /// Compute the connected components of the undirected projection
    /// (edge direction and labels ignored). O(states + transitions).
    ///
    /// Each component lists its member state indices in BFS discovery
    /// order. Components are ordered by size descending, ties broken by
    /// the first-discovered state.
    pub(crate) fn undirected_components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.state_count()];
        let mut components = Vec::new();

        for start in 0..self.state_count() {
            if visited[start] {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            visited[start] = true;
            queue.push_back(start);

            while let Some(state) = queue.pop_front() {
                component.push(state);
                let neighbors = self
                    .outgoing_edges(state)
                    .iter()
                    .map(|&edge| self.edges()[edge].dest)
                    .chain(
                        self.incoming_edges(state)
                            .iter()
                            .map(|&edge| self.edges()[edge].source),
                    );
                for neighbor in neighbors {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
            components.push(component);
        }

        // Stable sort keeps discovery order among equally sized
        // components, which is exactly the first-discovered tiebreak.
        components.sort_by(|a, b| b.len().cmp(&a.len()));
        components
    }
}
