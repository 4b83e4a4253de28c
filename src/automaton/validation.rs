//! Structural validation.
//!
//! A validation pass walks states in declaration order and, within a state,
//! transitions in declaration order. The first violation found is retained
//! as the automaton's diagnostic. Only success is cached: an automaton that
//! failed is checked again on the next call.

use super::{Automaton, StructuralViolation, Validity};
use crate::core::{Alphabet, State, StateId, Transition, EMPTY_WORD};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, warn};

impl Automaton {
    /// Check structural validity, reusing a cached success.
    ///
    /// The pass also normalizes the model in place: duplicate transitions
    /// are dropped and transition symbols are sorted. Neither changes the
    /// language recognized, so derived facts survive it.
    pub fn is_valid(&mut self) -> bool {
        self.ensure_valid().is_ok()
    }

    /// Like [`Automaton::is_valid`], returning the violation on failure.
    pub(crate) fn ensure_valid(&mut self) -> Result<(), StructuralViolation> {
        if self.facts.validity == Validity::Valid {
            return Ok(());
        }
        match self.check_structure() {
            Ok(()) => {
                debug!(automaton = %self.model.name, "automaton is structurally valid");
                self.facts.validity = Validity::Valid;
                self.last_failure = None;
                Ok(())
            }
            Err(violation) => {
                warn!(
                    automaton = %self.model.name,
                    diagnostic = %violation,
                    "automaton is structurally invalid"
                );
                self.facts.validity = Validity::Invalid;
                self.last_failure = Some(violation.clone());
                Err(violation)
            }
        }
    }

    /// Populate the validity cache ahead of a batch of `validate` calls.
    pub fn pre_validate(&mut self) {
        self.is_valid();
    }

    /// Collect every structural violation at once.
    ///
    /// Unlike [`Automaton::is_valid`] this neither normalizes the model nor
    /// touches the caches.
    pub fn audit(&self) -> Validation<(), NonEmptyVec<StructuralViolation>> {
        let known = self.known_states();
        let alphabet = &self.model.alphabet;
        let mut checks: Vec<Validation<(), NonEmptyVec<StructuralViolation>>> = Vec::new();
        let mut initial: Option<&State> = None;

        for (_, state) in self.states() {
            let mut deduped = state.clone();
            deduped.remove_duplicate_transitions();
            if deduped.has_nondeterministic_transitions() {
                checks.push(Validation::fail(StructuralViolation::Nondeterministic {
                    state: state.name().to_string(),
                }));
            }
            if state.is_initial() {
                match initial {
                    None => initial = Some(state),
                    Some(first) => {
                        checks.push(Validation::fail(
                            StructuralViolation::MultipleInitialStates {
                                first: first.name().to_string(),
                                second: state.name().to_string(),
                            },
                        ));
                    }
                }
            }
            for transition in state.transitions() {
                if let Some(violation) =
                    transition_violation(state.name(), transition, &known, alphabet)
                {
                    checks.push(Validation::fail(violation));
                }
            }
        }

        if let Some(violation) = self.global_violation() {
            checks.push(Validation::fail(violation));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn check_structure(&mut self) -> Result<(), StructuralViolation> {
        let known = self.known_states();
        let alphabet = self.model.alphabet.clone();
        let mut initial: Option<String> = None;

        for (_, state) in self.model.states.iter_mut() {
            state.remove_duplicate_transitions();
            if state.has_nondeterministic_transitions() {
                return Err(StructuralViolation::Nondeterministic {
                    state: state.name().to_string(),
                });
            }
            if state.is_initial() {
                if let Some(first) = &initial {
                    return Err(StructuralViolation::MultipleInitialStates {
                        first: first.clone(),
                        second: state.name().to_string(),
                    });
                }
                initial = Some(state.name().to_string());
            }

            let name = state.name().to_string();
            for transition in state.transitions_mut() {
                transition.normalize_symbols();
                if let Some(violation) = transition_violation(&name, transition, &known, &alphabet)
                {
                    return Err(violation);
                }
            }
        }

        match self.global_violation() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Checks that need the whole state set: unique names, an initial state.
    fn global_violation(&self) -> Option<StructuralViolation> {
        let mut seen = HashSet::new();
        for (_, state) in self.states() {
            if !seen.insert(state.name()) {
                return Some(StructuralViolation::DuplicateStateName {
                    name: state.name().to_string(),
                });
            }
        }
        if self.initial_state().is_none() {
            return Some(StructuralViolation::NoInitialState);
        }
        None
    }

    fn known_states(&self) -> HashSet<StateId> {
        self.states().map(|(id, _)| id).collect()
    }
}

fn transition_violation(
    state: &str,
    transition: &Transition,
    known: &HashSet<StateId>,
    alphabet: &Alphabet,
) -> Option<StructuralViolation> {
    if let Some(id) = transition.target().state() {
        if !known.contains(&id) {
            return Some(StructuralViolation::UnrelatedStates {
                state: state.to_string(),
            });
        }
    }
    // The marker is reported on its own below.
    let symbols: String = transition
        .symbols()
        .chars()
        .filter(|c| *c != EMPTY_WORD)
        .collect();
    if !alphabet.accepts_word(&symbols) {
        return Some(StructuralViolation::SymbolsOutsideAlphabet {
            state: state.to_string(),
            symbols: transition.symbols().to_string(),
        });
    }
    if transition.has_empty_word() {
        return Some(StructuralViolation::EmptyWordSymbol {
            state: state.to_string(),
        });
    }
    None
}
