//! The automaton: an arena of states over an alphabet.
//!
//! An [`Automaton`] owns its states and addresses them with stable
//! [`StateId`] handles. Transitions refer to destinations by handle or to
//! the reject sentinel, never by pointer.
//!
//! Two facts are derived from the model and cached: whether it is
//! structurally valid, and whether it is complete. Every mutation goes
//! through a single accessor that discards both, so a cached fact can
//! never outlive the model it was computed from.
//!
//! # Example
//!
//! ```rust
//! use dfakit::automaton::Automaton;
//! use dfakit::core::{State, Target};
//!
//! let mut dfa = Automaton::new("parity", "even number of 1s", "01");
//! let s0 = dfa.add_state(State::new("S0").with_initial(true).with_final(true));
//! let s1 = dfa.add_state(State::new("S1"));
//! dfa.add_transition(s0, "1", Target::State(s1)).unwrap();
//! dfa.add_transition(s1, "1", Target::State(s0)).unwrap();
//!
//! assert!(dfa.is_valid());
//! assert_eq!(dfa.find_state("S1"), Some(s1));
//! ```

mod completion;
pub mod error;
mod validation;

pub use error::{AutomatonError, StructuralViolation};

use crate::core::{Alphabet, State, StateId, Target, REJECT_NAME};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

/// Facts computed from the model, valid until the next mutation.
#[derive(Clone, Debug, Default)]
struct DerivedFacts {
    validity: Validity,
    complete: bool,
}

#[derive(Clone, Debug, Default)]
struct Model {
    name: String,
    description: String,
    alphabet: Alphabet,
    states: Vec<(StateId, State)>,
    next_id: usize,
}

/// Deterministic finite automaton.
#[derive(Clone, Debug, Default)]
pub struct Automaton {
    model: Model,
    facts: DerivedFacts,
    last_failure: Option<StructuralViolation>,
}

impl Automaton {
    /// Create an automaton with no states.
    pub fn new(name: impl Into<String>, description: impl Into<String>, alphabet: &str) -> Self {
        Self {
            model: Model {
                name: name.into(),
                description: description.into(),
                alphabet: Alphabet::new(alphabet),
                ..Model::default()
            },
            facts: DerivedFacts::default(),
            last_failure: None,
        }
    }

    /// The only path to a mutable model. Discards all derived facts.
    fn model_mut(&mut self) -> &mut Model {
        self.facts = DerivedFacts::default();
        &mut self.model
    }

    /// Name of the automaton.
    pub fn name(&self) -> &str {
        &self.model.name
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.model.description
    }

    /// Normalized input alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.model.alphabet
    }

    /// Change the name. Discards derived facts.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.model_mut().name = name.into();
    }

    /// Change the description. Discards derived facts.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.model_mut().description = description.into();
    }

    /// Replace the alphabet, normalizing it. Discards derived facts.
    pub fn set_alphabet(&mut self, alphabet: &str) {
        self.model_mut().alphabet = Alphabet::new(alphabet);
    }

    /// Add a state and return its handle.
    pub fn add_state(&mut self, state: State) -> StateId {
        let model = self.model_mut();
        let id = StateId(model.next_id);
        model.next_id += 1;
        model.states.push((id, state));
        id
    }

    /// Remove a state. Transitions of other states that pointed at it are
    /// left in place and will fail validation.
    pub fn remove_state(&mut self, id: StateId) -> Option<State> {
        let index = self.index_of(id)?;
        Some(self.model_mut().states.remove(index).1)
    }

    /// Remove every state called `name`. Returns whether any was removed.
    pub fn remove_state_named(&mut self, name: &str) -> bool {
        if !self.model.states.iter().any(|(_, s)| s.name() == name) {
            return false;
        }
        self.model_mut().states.retain(|(_, s)| s.name() != name);
        true
    }

    /// Handle of the first state called `name`.
    pub fn find_state(&self, name: &str) -> Option<StateId> {
        self.states()
            .find(|(_, state)| state.name() == name)
            .map(|(id, _)| id)
    }

    /// Whether `id` refers to a state still in the automaton.
    pub fn contains(&self, id: StateId) -> bool {
        self.index_of(id).is_some()
    }

    /// Look up a state by handle.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.index_of(id).map(|index| &self.model.states[index].1)
    }

    /// Mutable access to a state. Discards derived facts even if the
    /// caller ends up changing nothing.
    pub fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        let index = self.index_of(id)?;
        Some(&mut self.model_mut().states[index].1)
    }

    /// Add an outgoing transition to state `from`.
    pub fn add_transition(
        &mut self,
        from: StateId,
        symbols: impl Into<String>,
        target: Target,
    ) -> Result<(), AutomatonError> {
        let state = self
            .state_mut(from)
            .ok_or(AutomatonError::UnknownState(from))?;
        state.add_transition(symbols, target);
        Ok(())
    }

    /// States in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> + '_ {
        self.model.states.iter().map(|(id, state)| (*id, state))
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.model.states.len()
    }

    /// First state flagged initial, in declaration order.
    pub fn initial_state(&self) -> Option<StateId> {
        self.states()
            .find(|(_, state)| state.is_initial())
            .map(|(id, _)| id)
    }

    /// Display name of a destination. Unknown handles render as the
    /// sentinel, which is how simulation treats them.
    pub fn target_name(&self, target: Target) -> &str {
        match target {
            Target::State(id) => self.state(id).map_or(REJECT_NAME, State::name),
            Target::Reject => REJECT_NAME,
        }
    }

    /// Diagnostic of the most recent failed validation pass.
    pub fn last_diagnostic(&self) -> Option<&StructuralViolation> {
        self.last_failure.as_ref()
    }

    /// Human-readable overview of name, description, alphabet and states.
    ///
    /// ```text
    /// DFA
    ///      name: parity
    ///      description: even number of 1s
    ///      alphabet: {0,1}
    ///      states: {S0,S1}
    /// ```
    pub fn summary(&self) -> String {
        self.to_string()
    }

    fn index_of(&self, id: StateId) -> Option<usize> {
        self.model.states.iter().position(|(sid, _)| *sid == id)
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DFA")?;
        writeln!(f, "\t name: {}", self.name())?;
        writeln!(f, "\t description: {}", self.description())?;
        writeln!(f, "\t alphabet: {}", self.alphabet())?;
        if self.model.states.is_empty() {
            writeln!(f, "\t states: none")
        } else {
            let names: Vec<&str> = self.states().map(|(_, s)| s.name()).collect();
            writeln!(f, "\t states: {{{}}}", names.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parity() -> (Automaton, StateId, StateId) {
        let mut dfa = Automaton::new("parity", "even number of 1s", "10");
        let s0 = dfa.add_state(
            State::new("S0")
                .with_initial(true)
                .with_final(true)
                .with_message("even number of 1s"),
        );
        let s1 = dfa.add_state(State::new("S1"));
        dfa.add_transition(s0, "1", Target::State(s1)).unwrap();
        dfa.add_transition(s1, "1", Target::State(s0)).unwrap();
        (dfa, s0, s1)
    }

    #[test]
    fn handles_are_stable_across_removal() {
        let (mut dfa, s0, s1) = parity();
        let s2 = dfa.add_state(State::new("S2"));

        assert!(dfa.remove_state(s1).is_some());
        assert_eq!(dfa.state(s2).map(State::name), Some("S2"));
        assert_eq!(dfa.state(s0).map(State::name), Some("S0"));
        assert!(!dfa.contains(s1));

        let s3 = dfa.add_state(State::new("S3"));
        assert_ne!(s3, s1);
    }

    #[test]
    fn remove_by_name_reports_absence() {
        let (mut dfa, _, _) = parity();
        assert!(!dfa.remove_state_named("missing"));
        assert!(dfa.remove_state_named("S1"));
        assert_eq!(dfa.state_count(), 1);
    }

    #[test]
    fn add_transition_to_unknown_state_fails() {
        let (mut dfa, _, s1) = parity();
        dfa.remove_state(s1);
        assert_eq!(
            dfa.add_transition(s1, "0", Target::Reject),
            Err(AutomatonError::UnknownState(s1))
        );
    }

    #[test]
    fn mutation_discards_derived_facts() {
        let (mut dfa, _, _) = parity();
        assert!(dfa.is_valid());
        assert_eq!(dfa.facts.validity, Validity::Valid);

        dfa.rename("renamed");
        assert_eq!(dfa.facts.validity, Validity::Unknown);

        dfa.complete();
        assert!(dfa.facts.complete);
        dfa.set_alphabet("012");
        assert!(!dfa.facts.complete);
    }

    #[test]
    fn target_names_include_the_sentinel() {
        let (dfa, s0, _) = parity();
        assert_eq!(dfa.target_name(Target::State(s0)), "S0");
        assert_eq!(dfa.target_name(Target::Reject), "Error");
    }

    #[test]
    fn summary_lists_sorted_alphabet_and_states() {
        let (dfa, _, _) = parity();
        let summary = dfa.summary();
        assert_eq!(
            summary,
            "DFA\n\t name: parity\n\t description: even number of 1s\n\t alphabet: {0,1}\n\t states: {S0,S1}\n"
        );
    }

    #[test]
    fn summary_of_empty_automaton() {
        let dfa = Automaton::new("empty", "", "");
        let summary = dfa.summary();
        assert!(summary.contains("alphabet: {ϵ}"));
        assert!(summary.contains("states: none"));
    }
}
