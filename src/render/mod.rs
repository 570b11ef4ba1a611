//! Textual renderers over the definition's query surface.
//!
//! These are opt-in, pure `Definition -> String` functions; nothing here
//! runs implicitly during definition construction and nothing here can
//! mutate a definition.

mod plantuml;
mod table;

pub use plantuml::state_graph;
pub use table::{transition_table, TableFormat};

use crate::core::State;
use crate::definition::Definition;

/// The `(source, dest, event)` rows in rendering order: ascending
/// in-degree of the source state, declaration order among ties. States
/// with few inbound events (entry points) come first.
pub(crate) fn sorted_edges<'a, S: State>(definition: &'a Definition<S>) -> Vec<(&'a S, &'a S, &'a str)> {
    let graph = definition.graph();
    let mut rows: Vec<_> = definition.transitions().collect();
    rows.sort_by_key(|(source, _, _)| graph.index_of(source).map_or(0, |index| graph.in_degree(index)));
    rows
}
