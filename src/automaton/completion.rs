//! Completion into a total transition function.

use super::Automaton;
use tracing::debug;

impl Automaton {
    /// Every state has an outgoing transition for every alphabet symbol.
    ///
    /// Only a positive answer is cached.
    pub fn has_full_coverage(&mut self) -> bool {
        if self.facts.complete {
            return true;
        }
        let alphabet = &self.model.alphabet;
        let covered = self
            .model
            .states
            .iter()
            .all(|(_, state)| state.covers(alphabet));
        self.facts.complete = covered;
        covered
    }

    /// Route every uncovered (state, symbol) pair to the reject sentinel.
    ///
    /// Idempotent: coverage is re-checked per state before anything is
    /// added, so a second call adds nothing. Returns the number of
    /// transitions added.
    pub fn complete(&mut self) -> usize {
        if self.facts.complete {
            return 0;
        }
        let alphabet = self.model.alphabet.clone();
        let added: usize = self
            .model
            .states
            .iter_mut()
            .filter(|(_, state)| !state.covers(&alphabet))
            .map(|(_, state)| state.add_missing_transitions(&alphabet))
            .sum();
        if added > 0 {
            debug!(automaton = %self.model.name, added, "completed transition function");
        }
        self.facts.complete = true;
        added
    }
}
