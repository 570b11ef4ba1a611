//! Definition build errors.

use crate::core::State;
use thiserror::Error;

/// Errors raised while building a definition.
///
/// A definition that fails to build is never returned, so no machine
/// instance can exist for it; the caller must fix the declaration and
/// rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError<S: State> {
    #[error("no events declared, a definition needs at least one transition")]
    NoEvents,

    #[error("event '{event}' declares no source states")]
    NoSourceStates { event: String },

    #[error("duplicate event name '{name}'")]
    DuplicateEvent { name: String },

    /// The undirected projection of the state graph is not a single
    /// connected component. Carries every component as an ordered list
    /// of its member states so the disconnected islands are visible at
    /// a glance.
    #[error("the state graph has {} disconnected components: {}", .components.len(), format_components(.components))]
    DisconnectedGraph { components: Vec<Vec<S>> },

    #[error("default initial state {state:?} is not part of the definition")]
    UnknownInitialState { state: S },

    #[error("default accepting state {state:?} is not part of the definition")]
    UnknownAcceptingState { state: S },
}

fn format_components<S: State>(components: &[Vec<S>]) -> String {
    components
        .iter()
        .map(|component| {
            let members = component
                .iter()
                .map(State::name)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{members}}}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
