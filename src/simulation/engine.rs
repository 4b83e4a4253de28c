//! Symbol-by-symbol execution of an automaton.

use super::{Run, Trace, ValidationResult};
use crate::automaton::Automaton;
use crate::core::{State, Target, EMPTY_WORD, REJECT_NAME};
use tracing::debug;

impl Automaton {
    /// Run `input` from the initial state and record a trace.
    ///
    /// Meant for automata already validated and completed; nothing is
    /// checked here. A symbol with no matching transition, or a transition
    /// to a state that no longer exists, is treated as reaching the reject
    /// sentinel, which absorbs the rest of the input. Without an initial
    /// state the run rejects immediately.
    pub fn simulate(&self, input: &str) -> Run {
        let mut trace = Trace::new();
        trace.push(format!("Input: {}", display_input(input)));

        let Some(start) = self.initial_state() else {
            trace.push("No initial state to start from");
            return self.conclude(input, Target::Reject, true, trace);
        };
        trace.push(format!("Initialized at {}", self.target_name(Target::State(start))));

        let mut current = Target::State(start);
        let mut failed = false;
        for symbol in input.chars() {
            let Some(state) = current.state().and_then(|id| self.state(id)) else {
                failed = true;
                break;
            };
            let next = state
                .next(symbol)
                .map_or(Target::Reject, |target| self.resolve(target));
            tracing::trace!(from = %state.name(), %symbol, to = %self.target_name(next), "step");
            trace.push(format!(
                "{} -> Read '{}' -> {}",
                state.name(),
                symbol,
                self.target_name(next)
            ));
            current = next;
            if current.is_reject() {
                failed = true;
                break;
            }
        }

        if !input.is_empty() {
            trace.push("");
        }
        self.conclude(input, current, failed, trace)
    }

    fn conclude(&self, input: &str, current: Target, failed: bool, mut trace: Trace) -> Run {
        let last = current.state().and_then(|id| self.state(id));
        let accepted = !failed && last.is_some_and(State::is_final);
        trace.push(if accepted { "Input succeeded" } else { "Input failed" });
        trace.push(match last {
            Some(state) => format!("Recognition message: {}", state.recognition_message()),
            None => format!("Recognition message: {REJECT_NAME} state has no recognition message"),
        });
        debug!(
            automaton = %self.name(),
            input,
            accepted,
            state = %self.target_name(current),
            "simulation finished"
        );
        Run {
            result: ValidationResult {
                accepted,
                final_state: current,
            },
            trace,
        }
    }

    fn resolve(&self, target: Target) -> Target {
        match target {
            Target::State(id) if self.contains(id) => target,
            _ => Target::Reject,
        }
    }
}

fn display_input(input: &str) -> String {
    if input.is_empty() {
        EMPTY_WORD.to_string()
    } else {
        input.to_string()
    }
}
