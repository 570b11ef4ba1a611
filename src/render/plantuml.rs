//! PlantUML state-diagram rendering.

use super::sorted_edges;
use crate::core::State;
use crate::definition::Definition;

/// Render a definition as a PlantUML state diagram.
///
/// States with no inbound edge get a `[*] --> state` entry arrow,
/// states with no outbound edge a `state --> [*]` exit arrow, and every
/// transition edge becomes a labeled arrow, in the same order as the
/// transition table.
///
/// # Example
///
/// ```rust
/// use automaton::render::state_graph;
/// use automaton::DefinitionBuilder;
///
/// let definition = DefinitionBuilder::new()
///     .event("go", ["red"], "green")
///     .event("slowdown", ["green"], "yellow")
///     .event("stop", ["yellow"], "red")
///     .build()
///     .unwrap();
///
/// let diagram = state_graph(&definition);
/// assert!(diagram.starts_with("@startuml"));
/// assert!(diagram.contains("    red --> green : go"));
/// assert!(diagram.ends_with("@enduml"));
/// ```
pub fn state_graph<S: State>(definition: &Definition<S>) -> String {
    let graph = definition.graph();
    let mut lines = vec!["@startuml".to_string()];

    for (index, state) in graph.states().iter().enumerate() {
        if graph.in_degree(index) == 0 {
            lines.push(format!("    [*] --> {}", state.name()));
        }
    }
    for (source, dest, event) in sorted_edges(definition) {
        lines.push(format!("    {} --> {} : {}", source.name(), dest.name(), event));
    }
    for (index, state) in graph.states().iter().enumerate() {
        if graph.out_degree(index) == 0 {
            lines.push(format!("    {} --> [*]", state.name()));
        }
    }

    lines.push("@enduml".to_string());
    lines.join("\n")
}
