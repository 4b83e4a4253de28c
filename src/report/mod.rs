//! Trace reporters.
//!
//! Reporting is kept apart from the decision core: a [`Trace`] is a plain
//! value, and sinks decide where its lines go. Two sinks are provided:
//! - [`LiveSink`] mirrors a trace line by line, optionally pacing output
//! - [`PersistedSink`] appends traces to a log, stamped with their start time

use crate::simulation::Trace;
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Destination for simulation traces.
pub trait TraceSink {
    fn emit(&mut self, trace: &Trace) -> io::Result<()>;
}

fn write_path_trace<W: Write>(
    writer: &mut W,
    trace: &Trace,
    delay: Duration,
) -> io::Result<()> {
    writeln!(writer, "Path trace:")?;
    writeln!(writer)?;
    for line in trace.lines() {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        writeln!(writer, "\t{line}")?;
        writer.flush()?;
    }
    writeln!(writer)
}

/// Line-by-line mirror of a trace, typically to the console.
pub struct LiveSink<W: Write> {
    writer: W,
    delay: Duration,
}

impl LiveSink<Stdout> {
    pub fn stdout(delay: Duration) -> Self {
        Self::new(io::stdout(), delay)
    }
}

impl<W: Write> LiveSink<W> {
    /// A zero `delay` disables pacing.
    pub fn new(writer: W, delay: Duration) -> Self {
        Self { writer, delay }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for LiveSink<W> {
    fn emit(&mut self, trace: &Trace) -> io::Result<()> {
        write_path_trace(&mut self.writer, trace, self.delay)
    }
}

/// Append-only trace log.
pub struct PersistedSink<W: Write> {
    writer: W,
}

impl PersistedSink<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn append(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> PersistedSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PersistedSink<W> {
    fn emit(&mut self, trace: &Trace) -> io::Result<()> {
        writeln!(self.writer, "Run at {}", trace.started_at().to_rfc3339())?;
        write_path_trace(&mut self.writer, trace, Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trace {
        let mut trace = Trace::new();
        trace.push("Input: 1");
        trace.push("Initialized at S0");
        trace
    }

    #[test]
    fn live_sink_indents_lines() {
        let mut sink = LiveSink::new(Vec::new(), Duration::ZERO);
        sink.emit(&sample()).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "Path trace:\n\n\tInput: 1\n\tInitialized at S0\n\n"
        );
    }

    #[test]
    fn persisted_sink_stamps_each_run() {
        let trace = sample();
        let mut sink = PersistedSink::new(Vec::new());
        sink.emit(&trace).unwrap();
        sink.emit(&trace).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let stamp = format!("Run at {}", trace.started_at().to_rfc3339());
        assert_eq!(output.matches(&stamp).count(), 2);
        assert_eq!(output.matches("Path trace:").count(), 2);
    }

    #[test]
    fn persisted_sink_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.log");

        PersistedSink::append(&path).unwrap().emit(&sample()).unwrap();
        PersistedSink::append(&path).unwrap().emit(&sample()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Initialized at S0").count(), 2);
    }
}
