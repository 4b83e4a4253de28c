//! Configured validation runs with trace reporting.
//!
//! A [`Runner`] couples [`Automaton::validate`] with the sinks selected by a
//! [`RunConfig`], so a driver only chooses inputs and reads verdicts.

use crate::automaton::{Automaton, AutomatonError};
use crate::report::{LiveSink, PersistedSink, TraceSink};
use crate::simulation::{Run, Trace, ValidationMode, ValidationResult};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a configured run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    #[error("Failed to write trace: {0}")]
    Sink(#[from] io::Error),
}

/// How validation runs are carried out and reported.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use dfakit::runner::RunConfig;
/// use dfakit::simulation::ValidationMode;
///
/// let config = RunConfig::from_json_str(r#"{ "mode": "shallow", "delay_ms": 250 }"#).unwrap();
/// assert_eq!(config.mode, ValidationMode::Shallow);
/// assert!(!config.verbose);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub mode: ValidationMode,
    /// Mirror each trace to stdout
    pub verbose: bool,
    /// Pause before each mirrored line; 0 disables pacing
    pub delay_ms: u64,
    /// Append each trace to this file
    pub trace_file: Option<PathBuf>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }

    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn trace_file(mut self, path: impl AsRef<Path>) -> Self {
        self.trace_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Drives validation runs according to a [`RunConfig`].
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Validate one input and report its trace to the configured sinks.
    pub fn run(&self, automaton: &mut Automaton, input: &str) -> Result<ValidationResult, RunError> {
        let run = automaton.validate(input, self.config.mode)?;
        self.report(&run.trace)?;
        Ok(run.result)
    }

    /// Validate every input in order, checking structure once up front.
    pub fn run_all<'a, I>(
        &self,
        automaton: &mut Automaton,
        inputs: I,
    ) -> Result<Vec<ValidationResult>, RunError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        automaton.pre_validate();
        inputs
            .into_iter()
            .map(|input| self.run(automaton, input))
            .collect()
    }

    /// Validate one input and emit its trace to caller-supplied sinks.
    pub fn run_with(
        &self,
        automaton: &mut Automaton,
        input: &str,
        sinks: &mut [&mut dyn TraceSink],
    ) -> Result<Run, RunError> {
        let run = automaton.validate(input, self.config.mode)?;
        for sink in sinks.iter_mut() {
            sink.emit(&run.trace)?;
        }
        Ok(run)
    }

    fn report(&self, trace: &Trace) -> io::Result<()> {
        if self.config.verbose {
            LiveSink::stdout(self.config.line_delay()).emit(trace)?;
        }
        if let Some(path) = &self.config.trace_file {
            PersistedSink::append(path)?.emit(trace)?;
        }
        Ok(())
    }
}
