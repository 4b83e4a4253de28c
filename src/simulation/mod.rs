//! Membership decisions and their traces.
//!
//! [`Automaton::validate`] is the entry point used by drivers: it gates on
//! structural validity (in deep mode), rejects inputs that are not made of
//! alphabet symbols, completes the automaton on demand and finally runs
//! [`Automaton::simulate`].
//!
//! The decision never fails once the gate is passed: rejections are
//! ordinary [`ValidationResult`] values.
//!
//! # Example
//!
//! ```rust
//! use dfakit::automaton::Automaton;
//! use dfakit::core::{State, Target};
//! use dfakit::simulation::ValidationMode;
//!
//! let mut dfa = Automaton::new("ones", "strings of 1s", "01");
//! let s0 = dfa.add_state(State::new("S0").with_initial(true).with_final(true));
//! dfa.add_transition(s0, "1", Target::State(s0)).unwrap();
//!
//! let run = dfa.validate("111", ValidationMode::Deep).unwrap();
//! assert!(run.result.accepted);
//!
//! let run = dfa.validate("10", ValidationMode::Deep).unwrap();
//! assert!(!run.result.accepted);
//! assert_eq!(run.result.final_state, Target::Reject);
//! ```

mod engine;
mod trace;

pub use trace::Trace;

use crate::automaton::{Automaton, AutomatonError};
use crate::core::Target;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of deciding one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub accepted: bool,
    /// State the run ended in, or the sentinel
    pub final_state: Target,
}

impl ValidationResult {
    pub fn rejected() -> Self {
        Self {
            accepted: false,
            final_state: Target::Reject,
        }
    }
}

/// Decision plus the trace that led to it.
#[derive(Clone, Debug)]
pub struct Run {
    pub result: ValidationResult,
    pub trace: Trace,
}

/// How much checking `validate` does before simulating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Require structural validity first
    #[default]
    Deep,
    /// Trust the caller to have validated the automaton
    Shallow,
}

impl Automaton {
    /// Decide whether `input` belongs to the language of this automaton.
    ///
    /// In deep mode a structurally invalid automaton is an error carrying
    /// the diagnostic. An input containing a symbol outside the alphabet is
    /// not an error: it yields a rejection pinned to the sentinel.
    pub fn validate(&mut self, input: &str, mode: ValidationMode) -> Result<Run, AutomatonError> {
        if mode == ValidationMode::Deep {
            self.ensure_valid().map_err(AutomatonError::Invalid)?;
        }

        if let Some(symbol) = self.alphabet().first_foreign(input) {
            debug!(automaton = %self.name(), input, %symbol, "input outside the alphabet");
            let mut trace = Trace::new();
            trace.push(format!("Input: {input}"));
            trace.push(format!(
                "Input rejected: '{symbol}' does not belong to the alphabet"
            ));
            return Ok(Run {
                result: ValidationResult::rejected(),
                trace,
            });
        }

        if !self.has_full_coverage() {
            self.complete();
        }
        Ok(self.simulate(input))
    }
}
