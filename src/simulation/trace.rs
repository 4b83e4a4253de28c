//! Execution traces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered, append-only record of one simulation run.
///
/// Lines are plain text without indentation; reporters decide how to
/// present them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trace {
    started_at: DateTime<Utc>,
    lines: Vec<String>,
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

impl Trace {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_insertion_order() {
        let mut trace = Trace::new();
        trace.push("first");
        trace.push(String::from("second"));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.lines(), ["first", "second"]);
    }

    #[test]
    fn trace_serializes_correctly() {
        let mut trace = Trace::new();
        trace.push("Input: 11");

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.lines(), trace.lines());
        assert_eq!(deserialized.started_at(), trace.started_at());
    }
}
