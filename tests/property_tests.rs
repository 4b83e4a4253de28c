//! Property-based tests for validation, completion and simulation.
//!
//! These tests use proptest to generate random transition tables and
//! check the engine against a direct walk of the same table.

use dfakit::loader;
use dfakit::{Automaton, State, StateId, Target, ValidationMode};
use proptest::prelude::*;
use serde_json::json;

/// A deterministic transition table.
///
/// `table[state][symbol]` is `None` for a missing transition, or the index
/// of the destination; an index equal to the state count means the sentinel.
#[derive(Clone, Debug)]
struct Table {
    alphabet: Vec<char>,
    finals: Vec<bool>,
    table: Vec<Vec<Option<usize>>>,
}

impl Table {
    fn build(&self) -> (Automaton, Vec<StateId>) {
        let alphabet: String = self.alphabet.iter().collect();
        let mut dfa = Automaton::new("generated", "random table", &alphabet);
        let ids: Vec<StateId> = self
            .finals
            .iter()
            .enumerate()
            .map(|(i, accepting)| {
                dfa.add_state(
                    State::new(format!("Q{i}"))
                        .with_initial(i == 0)
                        .with_final(*accepting)
                        .with_message(format!("ended in Q{i}")),
                )
            })
            .collect();
        for (from, row) in self.table.iter().enumerate() {
            for (column, cell) in row.iter().enumerate() {
                if let Some(to) = cell {
                    let target = ids.get(*to).map_or(Target::Reject, |id| Target::State(*id));
                    dfa.add_transition(ids[from], self.alphabet[column].to_string(), target)
                        .unwrap();
                }
            }
        }
        (dfa, ids)
    }

    /// Walk the table directly: (accepted, final state index or None for the sentinel).
    fn expected(&self, input: &str) -> (bool, Option<usize>) {
        if input.chars().any(|c| !self.alphabet.contains(&c)) {
            return (false, None);
        }
        let mut current = 0;
        for symbol in input.chars() {
            let column = self.alphabet.iter().position(|c| *c == symbol).unwrap();
            match self.table[current][column] {
                Some(to) if to < self.finals.len() => current = to,
                _ => return (false, None),
            }
        }
        (self.finals[current], Some(current))
    }

    fn to_json(&self) -> String {
        // Reversed and repeated, so the loader has to normalize it.
        let alphabet: String = self
            .alphabet
            .iter()
            .rev()
            .chain(self.alphabet.iter())
            .collect();
        let states: Vec<_> = self
            .finals
            .iter()
            .enumerate()
            .map(|(i, accepting)| {
                let transitions: Vec<_> = self.table[i]
                    .iter()
                    .enumerate()
                    .filter_map(|(column, cell)| {
                        cell.filter(|to| *to < self.finals.len()).map(|to| {
                            json!({
                                "symbol": self.alphabet[column].to_string(),
                                "destination": format!("Q{to}"),
                            })
                        })
                    })
                    .collect();
                json!({
                    "name": format!("Q{i}"),
                    "initial": i == 0,
                    "final": accepting,
                    "recognitionMessage": format!("ended in Q{i}"),
                    "transitions": transitions,
                })
            })
            .collect();
        json!({
            "name": "generated",
            "description": "random table",
            "alphabet": alphabet,
            "states": states,
        })
        .to_string()
    }
}

fn arbitrary_table() -> impl Strategy<Value = Table> {
    (
        prop::sample::subsequence(vec!['a', 'b', 'c', 'd'], 1..=4),
        1usize..5,
    )
        .prop_flat_map(|(alphabet, states)| {
            let width = alphabet.len();
            (
                Just(alphabet),
                prop::collection::vec(any::<bool>(), states),
                prop::collection::vec(
                    prop::collection::vec(prop::option::of(0..=states), width),
                    states,
                ),
            )
        })
        .prop_map(|(alphabet, finals, table)| Table {
            alphabet,
            finals,
            table,
        })
}

fn arbitrary_input() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd', 'z']), 0..10)
        .prop_map(|chars| chars.into_iter().collect())
}

fn matching(state: &State, symbol: char) -> usize {
    state
        .transitions()
        .iter()
        .filter(|t| t.has_symbol(symbol))
        .count()
}

fn snapshot(dfa: &Automaton) -> Vec<State> {
    dfa.states().map(|(_, state)| state.clone()).collect()
}

proptest! {
    #[test]
    fn generated_tables_are_valid(table in arbitrary_table()) {
        let (mut dfa, _) = table.build();
        prop_assert!(dfa.is_valid());
        prop_assert!(dfa.audit().is_success());
    }

    #[test]
    fn validation_is_idempotent(table in arbitrary_table(), extra in 0usize..4) {
        let (mut dfa, ids) = table.build();
        // Possibly overlapping extra edges, so some automata are invalid.
        for i in 0..extra {
            let from = ids[i % ids.len()];
            dfa.add_transition(from, table.alphabet[0].to_string(), Target::Reject).unwrap();
        }

        let first = dfa.is_valid();
        let diagnostic = dfa.last_diagnostic().cloned();
        let before = snapshot(&dfa);

        prop_assert_eq!(dfa.is_valid(), first);
        prop_assert_eq!(dfa.last_diagnostic().cloned(), diagnostic);
        prop_assert_eq!(snapshot(&dfa), before);
    }

    #[test]
    fn valid_automata_are_deterministic(table in arbitrary_table()) {
        let (mut dfa, _) = table.build();
        prop_assume!(dfa.is_valid());

        for (_, state) in dfa.states() {
            for symbol in dfa.alphabet().symbols() {
                prop_assert!(matching(state, symbol) <= 1);
            }
        }
    }

    #[test]
    fn completion_makes_the_function_total(table in arbitrary_table()) {
        let (mut dfa, _) = table.build();
        prop_assert!(dfa.is_valid());
        dfa.complete();

        prop_assert!(dfa.has_full_coverage());
        prop_assert!(dfa.is_valid());
        for (_, state) in dfa.states() {
            for symbol in dfa.alphabet().symbols() {
                prop_assert_eq!(matching(state, symbol), 1);
            }
        }
    }

    #[test]
    fn completion_is_idempotent(table in arbitrary_table()) {
        let (mut dfa, _) = table.build();
        dfa.complete();
        let after_first = snapshot(&dfa);

        // Renaming discards the cached fact without touching transitions.
        dfa.rename("renamed");
        prop_assert_eq!(dfa.complete(), 0);
        prop_assert_eq!(snapshot(&dfa), after_first);
    }

    #[test]
    fn transitions_stay_inside_the_alphabet(table in arbitrary_table()) {
        let (mut dfa, _) = table.build();
        prop_assert!(dfa.is_valid());
        dfa.complete();

        for (_, state) in dfa.states() {
            for transition in state.transitions() {
                prop_assert!(dfa.alphabet().accepts_word(transition.symbols()));
                prop_assert!(!transition.has_empty_word());
            }
        }
    }

    #[test]
    fn simulation_agrees_with_the_table(table in arbitrary_table(), input in arbitrary_input()) {
        let (mut dfa, ids) = table.build();
        let run = dfa.validate(&input, ValidationMode::Deep).unwrap();
        let (accepted, last) = table.expected(&input);

        prop_assert_eq!(run.result.accepted, accepted);
        let expected_state = last.map_or(Target::Reject, |i| Target::State(ids[i]));
        prop_assert_eq!(run.result.final_state, expected_state);
    }

    #[test]
    fn acceptance_implies_a_final_state(table in arbitrary_table(), input in arbitrary_input()) {
        let (mut dfa, _) = table.build();
        let run = dfa.validate(&input, ValidationMode::Shallow).unwrap();

        if run.result.accepted {
            let id = run.result.final_state.state();
            prop_assert!(id.and_then(|id| dfa.state(id)).is_some_and(State::is_final));
        }
        if run.result.final_state.is_reject() {
            prop_assert!(!run.result.accepted);
        }
    }

    #[test]
    fn loaded_model_round_trips_through_the_summary(table in arbitrary_table()) {
        let (built, _) = table.build();
        let loaded = loader::parse(&table.to_json()).unwrap();

        prop_assert_eq!(loaded.summary(), built.summary());
        let sorted: String = {
            let mut chars = table.alphabet.clone();
            chars.sort_unstable();
            chars.into_iter().collect()
        };
        prop_assert_eq!(loaded.alphabet().as_str(), sorted.as_str());
    }

    #[test]
    fn loaded_model_decides_like_the_table(table in arbitrary_table(), input in arbitrary_input()) {
        let mut loaded = loader::parse(&table.to_json()).unwrap();
        let run = loaded.validate(&input, ValidationMode::Deep).unwrap();
        prop_assert_eq!(run.result.accepted, table.expected(&input).0);
    }
}
