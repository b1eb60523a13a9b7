//! Output sinks for emitted lines.
//!
//! Every line a run produces (the calculator message, sample summaries,
//! benchmark progress) goes through an [`OutputSink`]. Lines are stored or
//! written by the sink and also emitted via `tracing` at debug level.

use std::io::{self, Stdout, Write};

use fib_runner_common::RunnerError;
use tracing::debug;

/// Destination for output lines.
pub trait OutputSink {
    /// Emit a single line. `line` carries no trailing newline.
    fn emit(&mut self, line: &str) -> Result<(), RunnerError>;
}

/// Sink writing each line, newline-terminated, to an [`io::Write`].
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), RunnerError> {
        debug!(line, "emit");
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink keeping every line in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Lines emitted so far, in order.
    pub lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<(), RunnerError> {
        debug!(line, "emit");
        self.lines.push(line.to_string());
        Ok(())
    }
}
