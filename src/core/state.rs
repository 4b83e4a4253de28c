//! Automaton states and their outgoing transitions.

use super::alphabet::Alphabet;
use super::transition::{Target, Transition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of a state inside one automaton.
///
/// Handles are never reused, so a transition pointing at a removed state
/// stays detectable instead of silently aliasing a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named node of an automaton.
///
/// A state owns its outgoing transitions in declaration order. Order
/// matters: simulation takes the first transition matching a symbol.
///
/// # Example
///
/// ```rust
/// use dfakit::core::{State, Target};
///
/// let mut state = State::new("S0")
///     .with_initial(true)
///     .with_final(true)
///     .with_message("even number of 1s");
/// state.add_transition("1", Target::Reject);
///
/// assert!(state.is_initial());
/// assert_eq!(state.transitions().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    name: String,
    initial: bool,
    #[serde(rename = "final")]
    accepting: bool,
    recognition_message: String,
    transitions: Vec<Transition>,
}

impl State {
    /// Create a non-initial, non-final state with no transitions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: false,
            accepting: false,
            recognition_message: String::new(),
            transitions: Vec::new(),
        }
    }

    /// Set whether this is the initial state.
    pub fn with_initial(mut self, initial: bool) -> Self {
        self.initial = initial;
        self
    }

    /// Set whether reaching this state accepts the input.
    pub fn with_final(mut self, accepting: bool) -> Self {
        self.accepting = accepting;
        self
    }

    /// Set the message reported when a run ends here.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.recognition_message = message.into();
        self
    }

    /// Display name, unique within a valid automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the state.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether runs start here.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Mark or unmark the state as initial.
    pub fn set_initial(&mut self, initial: bool) {
        self.initial = initial;
    }

    /// Whether a run ending here is accepted.
    pub fn is_final(&self) -> bool {
        self.accepting
    }

    /// Mark or unmark the state as accepting.
    pub fn set_final(&mut self, accepting: bool) {
        self.accepting = accepting;
    }

    /// Message reported when a run ends here.
    pub fn recognition_message(&self) -> &str {
        &self.recognition_message
    }

    /// Replace the recognition message.
    pub fn set_recognition_message(&mut self, message: impl Into<String>) {
        self.recognition_message = message.into();
    }

    /// Outgoing transitions in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub(crate) fn transitions_mut(&mut self) -> &mut [Transition] {
        &mut self.transitions
    }

    /// Append an outgoing transition without any checks.
    pub fn add_transition(&mut self, symbols: impl Into<String>, target: Target) {
        self.transitions.push(Transition::new(symbols, target));
    }

    /// Drop transitions equivalent to an earlier one, keeping first
    /// occurrences in order. Returns how many were removed.
    pub fn remove_duplicate_transitions(&mut self) -> usize {
        let before = self.transitions.len();
        let mut kept: Vec<Transition> = Vec::with_capacity(before);
        for transition in self.transitions.drain(..) {
            if !kept.iter().any(|k| k.is_equivalent(&transition)) {
                kept.push(transition);
            }
        }
        self.transitions = kept;
        before - self.transitions.len()
    }

    /// Any two distinct outgoing transitions share a symbol.
    pub fn has_nondeterministic_transitions(&self) -> bool {
        self.transitions.iter().enumerate().any(|(i, a)| {
            self.transitions[i + 1..]
                .iter()
                .any(|b| a.overlaps(b))
        })
    }

    /// Alphabet symbols with no outgoing transition, in alphabet order.
    pub fn missing_symbols(&self, alphabet: &Alphabet) -> Vec<char> {
        alphabet
            .symbols()
            .filter(|c| !self.transitions.iter().any(|t| t.has_symbol(*c)))
            .collect()
    }

    /// Every alphabet symbol has an outgoing transition.
    pub fn covers(&self, alphabet: &Alphabet) -> bool {
        self.missing_symbols(alphabet).is_empty()
    }

    /// Route every uncovered alphabet symbol to the sentinel, one
    /// transition per symbol. Returns the number of transitions added.
    pub fn add_missing_transitions(&mut self, alphabet: &Alphabet) -> usize {
        let missing = self.missing_symbols(alphabet);
        for symbol in &missing {
            self.add_transition(symbol.to_string(), Target::Reject);
        }
        missing.len()
    }

    /// Destination of the first transition carrying `symbol`.
    pub fn next(&self, symbol: char) -> Option<Target> {
        self.transitions
            .iter()
            .find(|t| t.has_symbol(symbol))
            .map(Transition::target)
    }
}
