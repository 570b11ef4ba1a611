//! Core State trait for machine states.
//!
//! States are opaque identifiers: anything cloneable, hashable and
//! comparable can act as a state. The trait adds a textual label used
//! by renderers and diagnostics.

use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are plain values; the library never attaches behavior to them.
/// They exist implicitly as the set of distinct source/destination values
/// appearing in event declarations.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the definition's transition graph
/// - `Eq` + `Hash`: states are used as map keys for graph lookups
/// - `Debug`: states appear in error payloads
/// - `Serialize`: states must be exportable for rendering/reporting
///
/// `Deserialize` is intentionally not required: definitions are rebuilt
/// from code and machine state is never persisted.
///
/// Implementations are provided for `String` and `&'static str`, so short
/// label states need no ceremony:
///
/// ```rust
/// use automaton::DefinitionBuilder;
///
/// let definition = DefinitionBuilder::new()
///     .event("go", ["red"], "green")
///     .event("stop", ["green"], "red")
///     .build()
///     .unwrap();
///
/// assert!(definition.contains_state(&"red"));
/// ```
///
/// For enum states, the [`state_enum!`](crate::state_enum) macro derives
/// everything in one go.
pub trait State: Clone + Eq + Hash + Debug + Serialize + Send + Sync {
    /// Get the state's label for rendering and diagnostics.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}
