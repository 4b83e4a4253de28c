//! Dfakit: a deterministic finite automaton engine
//!
//! Dfakit loads automaton descriptions, checks that they are structurally
//! sound, completes them into a total transition function and decides
//! membership of input strings while recording an execution trace.
//!
//! The decision core is pure with respect to I/O: traces are values, and
//! printing or persisting them is left to the [`report`] sinks.
//!
//! # Core Concepts
//!
//! - **Automaton**: an arena of states over an ordered alphabet
//! - **Reject sentinel**: the implicit absorbing destination of every
//!   missing transition, never part of the state set
//! - **Structural validity**: determinism, a single initial state and
//!   alphabet closure, checked once and cached until the next mutation
//! - **Trace**: the ordered record of one simulation run
//!
//! # Example
//!
//! ```rust
//! use dfakit::loader;
//! use dfakit::simulation::ValidationMode;
//!
//! let mut dfa = loader::parse(r#"{
//!     "name": "parity",
//!     "description": "even number of 1s",
//!     "alphabet": "01",
//!     "states": [
//!         { "name": "S0", "initial": true, "final": true,
//!           "recognitionMessage": "even number of 1s",
//!           "transitions": [{ "symbol": "1", "destination": "S1" }] },
//!         { "name": "S1", "initial": false, "final": false,
//!           "recognitionMessage": "",
//!           "transitions": [{ "symbol": "1", "destination": "S0" }] }
//!     ]
//! }"#).unwrap();
//!
//! let run = dfa.validate("11", ValidationMode::Deep).unwrap();
//! assert!(run.result.accepted);
//! assert_eq!(dfa.target_name(run.result.final_state), "S0");
//! ```

pub mod automaton;
pub mod core;
pub mod loader;
pub mod report;
pub mod runner;
pub mod simulation;

// Re-export commonly used types
pub use crate::automaton::{Automaton, AutomatonError, StructuralViolation};
pub use crate::core::{Alphabet, State, StateId, Target, Transition};
pub use crate::loader::LoadError;
pub use crate::simulation::{Run, Trace, ValidationMode, ValidationResult};
