//! Transitions and their destinations.

use super::alphabet::{normalize, EMPTY_WORD};
use super::state::StateId;
use serde::{Deserialize, Serialize};

/// Display name of the rejecting sentinel.
pub const REJECT_NAME: &str = "Error";

/// Where a transition leads.
///
/// `Reject` is the error sentinel: an absorbing, non-enumerated destination
/// meaning "no valid transition". It is never stored in an automaton's
/// state set, is never initial and carries no recognition message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    State(StateId),
    Reject,
}

impl Target {
    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject)
    }

    pub fn state(&self) -> Option<StateId> {
        match self {
            Self::State(id) => Some(*id),
            Self::Reject => None,
        }
    }
}

impl From<StateId> for Target {
    fn from(id: StateId) -> Self {
        Self::State(id)
    }
}

/// Edge labelled by one or more symbols.
///
/// The symbol string is stored as given; [`Transition::normalize_symbols`]
/// sorts and deduplicates it in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    symbols: String,
    target: Target,
}

impl Transition {
    pub fn new(symbols: impl Into<String>, target: Target) -> Self {
        Self {
            symbols: symbols.into(),
            target,
        }
    }

    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn has_symbol(&self, symbol: char) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn has_empty_word(&self) -> bool {
        self.has_symbol(EMPTY_WORD)
    }

    /// Check whether `other` is labelled by at least one of the same symbols.
    pub fn overlaps(&self, other: &Transition) -> bool {
        self.symbols.chars().any(|c| other.has_symbol(c))
    }

    /// Same symbol set and same destination, ignoring symbol order and
    /// repetitions.
    pub fn is_equivalent(&self, other: &Transition) -> bool {
        self.target == other.target && normalize(&self.symbols) == normalize(&other.symbols)
    }

    pub fn normalize_symbols(&mut self) {
        self.symbols = normalize(&self.symbols);
    }
}
