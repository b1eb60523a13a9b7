//! Recursive Fibonacci calculation and its message.
//!
//! The sequence is 1-indexed: `fib(1) = fib(2) = 1`. Any `n <= 2`, including
//! zero and negative inputs, yields 1.
//!
//! The recursion is deliberately naive: exponential time, depth `n`, and plain
//! `u64` addition. Overflow past `fib(93)` panics in debug builds and wraps in
//! release builds; a deep enough recursion exhausts the thread stack.

use tracing::{info, instrument};
use uuid::Uuid;

use fib_runner_common::{CalculatorConfig, RunnerError};

use crate::OutputSink;

/// Compute the n-th Fibonacci number by double recursion.
pub fn compute(n: i64) -> u64 {
    if n <= 2 {
        return 1;
    }
    compute(n - 1) + compute(n - 2)
}

/// Render the message reporting `fib(n)`.
///
/// `prefix` names whoever did the computing and is separated by a space.
pub fn format_message(prefix: Option<&str>, n: i64, fib_n: u64) -> String {
    match prefix {
        Some(prefix) => format!("{prefix} computed that fib({n}) is {fib_n}"),
        None => format!("computed that fib({n}) is {fib_n}"),
    }
}

/// Computes `fib(n)` and reports it through an [`OutputSink`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    prefix: Option<String>,
}

impl Calculator {
    /// Create a calculator without a message prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator from its configuration section.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            prefix: config.message_prefix.clone(),
        }
    }

    /// Set the word placed in front of the message.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The configured message prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Compute `fib(n)`, emit the message as one line and return the value.
    ///
    /// # Errors
    ///
    /// Only a failing sink write is reported.
    #[instrument(skip(self, sink), fields(run_id = %Uuid::new_v4()))]
    pub fn run(&self, n: i64, sink: &mut dyn OutputSink) -> Result<u64, RunnerError> {
        let fib_n = compute(n);
        info!(fib_n, "Computation finished");

        sink.emit(&format_message(self.prefix(), n, fib_n))?;
        Ok(fib_n)
    }
}
