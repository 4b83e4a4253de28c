//! Structural validation errors.

use crate::core::StateId;
use thiserror::Error;

/// Reason an automaton is not structurally valid.
///
/// The message of each variant is the diagnostic retained by the
/// automaton after a failed validation pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralViolation {
    #[error("nondeterministic transitions were found")]
    Nondeterministic { state: String },

    #[error("multiple initial states were found")]
    MultipleInitialStates { first: String, second: String },

    #[error("transitions have unrelated source or destination states")]
    UnrelatedStates { state: String },

    #[error("transitions have symbols that do not belong to the alphabet")]
    SymbolsOutsideAlphabet { state: String, symbols: String },

    #[error("transitions have the empty word as symbol")]
    EmptyWordSymbol { state: String },

    #[error("duplicate state names were found")]
    DuplicateStateName { name: String },

    #[error("no initial state was found")]
    NoInitialState,
}

/// Errors raised by automaton operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    /// Deep validation found the automaton structurally invalid
    #[error("Invalid DFA: {0}")]
    Invalid(StructuralViolation),

    #[error("State {0} does not belong to this automaton")]
    UnknownState(StateId),
}
