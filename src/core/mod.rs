//! Building blocks of an automaton.
//!
//! This module contains the leaf types everything else is assembled from:
//! - Alphabets and symbol checks
//! - States, addressed by stable handles
//! - Transitions, whose destination is a state or the reject sentinel
//!
//! Nothing here knows about the automaton as a whole; cross-state
//! invariants are checked in [`crate::automaton`].

mod alphabet;
mod state;
mod transition;

pub use alphabet::{is_subset, normalize, Alphabet, EMPTY_WORD};
pub use state::{State, StateId};
pub use transition::{Target, Transition, REJECT_NAME};
