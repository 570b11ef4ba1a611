//! A minimal finite-state machine library.
//!
//! A machine type is declared as a set of named events, each with one or
//! more source states and a single destination state. The declaration is
//! validated once, when it is built: every event needs at least one
//! source, event names are unique, and the whole state graph must form a
//! single connected component (a disconnected island is almost always a
//! typo, and it fails loudly at definition time rather than at first
//! use). The validated [`Definition`] is immutable; any number of
//! [`Automaton`] instances can share it and be driven event-by-event.
//!
//! # Core Concepts
//!
//! - **State**: an opaque identifier via the [`State`] trait (`&str`,
//!   `String` and `state_enum!` enums work out of the box)
//! - **Event**: a named transition rule, fan-in of sources to one
//!   destination
//! - **Definition**: the validated, immutable event set plus its derived
//!   transition graph and query layer
//! - **Automaton**: a live instance tracking current state; `trigger` is
//!   atomic and takes `&mut self`, so per-instance access is serialized
//!   by the borrow checker
//!
//! # Example
//!
//! ```rust
//! use automaton::{Automaton, DefinitionBuilder};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let definition = Arc::new(
//!     DefinitionBuilder::new()
//!         .event("go", ["red"], "green")
//!         .event("slowdown", ["green"], "yellow")
//!         .event("stop", ["yellow"], "red")
//!         .initial_state("red")
//!         .build()?,
//! );
//!
//! let mut light = Automaton::new(Arc::clone(&definition))?;
//! light.trigger("go")?;
//! assert_eq!(light.current_state(), &"green");
//!
//! // "stop" only fires from yellow; the failure leaves state untouched.
//! assert!(light.trigger("stop").is_err());
//! assert_eq!(light.current_state(), &"green");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod definition;
mod graph;
pub mod machine;
pub mod render;

// Re-export commonly used types
pub use crate::builder::{DefinitionBuilder, DefinitionError};
pub use crate::core::{Event, State};
pub use crate::definition::{Definition, InvalidStateError};
pub use crate::machine::{Automaton, TransitionError};
