//! Event descriptors: named transition rules.

use super::state::State;
use serde::Serialize;

/// A named transition rule with one or more source states and exactly one
/// destination state.
///
/// Since an event can declare multiple source states, in graph terms one
/// descriptor represents a fan of state-to-state edges sharing a label.
/// Descriptors are immutable once the definition is built.
///
/// Two descriptors with the same shape but different names are distinct:
/// the same transition shape may be reused under different event names.
///
/// # Example
///
/// ```rust
/// use automaton::Event;
///
/// let collapse = Event::new("collapse", ["a", "b", "c"], "center");
///
/// assert_eq!(collapse.name(), "collapse");
/// assert_eq!(collapse.source_states(), &["a", "b", "c"]);
/// assert_eq!(collapse.dest_state(), &"center");
///
/// let edges: Vec<_> = collapse.edges().collect();
/// assert_eq!(edges, vec![(&"a", &"center"), (&"b", &"center"), (&"c", &"center")]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct Event<S: State> {
    name: String,
    sources: Vec<S>,
    dest: S,
}

impl<S: State> Event<S> {
    /// Create a descriptor from a name, its source states and its
    /// destination state.
    ///
    /// Duplicate source states are collapsed, preserving declaration
    /// order. An empty source set is accepted here and rejected when the
    /// definition is built, so the error can carry the event name.
    pub fn new<N, I>(name: N, source_states: I, dest_state: S) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let mut sources = Vec::new();
        for state in source_states {
            if !sources.contains(&state) {
                sources.push(state);
            }
        }
        Self {
            name: name.into(),
            sources,
            dest: dest_state,
        }
    }

    /// The event name, unique within a definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared source states, deduplicated, in declaration order.
    pub fn source_states(&self) -> &[S] {
        &self.sources
    }

    /// The single destination state.
    pub fn dest_state(&self) -> &S {
        &self.dest
    }

    /// All the `(source, dest)` edges this event fans out to.
    pub fn edges(&self) -> impl Iterator<Item = (&S, &S)> {
        self.sources.iter().map(move |source| (source, &self.dest))
    }
}
