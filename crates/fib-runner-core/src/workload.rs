//! Benchmark workloads.
//!
//! A [`Workload`] is one unit of work the [`crate::Benchmark`] times. Each
//! run must be self-contained: it starts from scratch and checks its own
//! result.

use std::hint::black_box;

use tracing::warn;

use fib_runner_common::{BenchConfig, RunnerError, WorkloadKind};

use crate::compute;

/// A repeatable unit of work.
pub trait Workload {
    /// Name shown in the benchmark header.
    fn name(&self) -> &str;

    /// Run the work once.
    ///
    /// # Errors
    ///
    /// Returns an error if the work produced a wrong result.
    fn run(&mut self) -> Result<(), RunnerError>;
}

/// Generates primes by passing each natural number through a chain of
/// divisibility filters, one per prime found so far, newest first.
#[derive(Debug, Clone)]
pub struct PrimesWorkload {
    n: usize,
    expected: u64,
}

impl Default for PrimesWorkload {
    fn default() -> Self {
        Self::new(2000, 17393)
    }
}

impl PrimesWorkload {
    /// Check that the prime at index `n` (0-based, so `primes[0] == 2`) is `expected`.
    pub fn new(n: usize, expected: u64) -> Self {
        Self { n, expected }
    }

    /// The first `count` primes.
    pub fn primes(count: usize) -> Vec<u64> {
        let mut filters: Vec<u64> = Vec::new();
        let mut natural = 2u64;

        while filters.len() < count {
            let candidate = natural;
            natural += 1;
            if filters.iter().rev().all(|p| candidate % p != 0) {
                filters.push(candidate);
            }
        }
        filters
    }
}

impl Workload for PrimesWorkload {
    fn name(&self) -> &str {
        "primes"
    }

    fn run(&mut self) -> Result<(), RunnerError> {
        let count = self
            .n
            .checked_add(1)
            .ok_or_else(|| RunnerError::invalid_config("prime index out of range"))?;
        let primes = Self::primes(count);
        let actual = primes[self.n];
        if actual != self.expected {
            warn!(index = self.n, actual, expected = self.expected, "Wrong prime found");
            return Err(RunnerError::workload_mismatch(
                self.name(),
                self.expected,
                actual,
            ));
        }
        Ok(())
    }
}

/// Runs the recursive Fibonacci calculation without emitting anything.
#[derive(Debug, Clone)]
pub struct FibWorkload {
    n: i64,
}

impl FibWorkload {
    /// Compute `fib(n)` on every run.
    pub fn new(n: i64) -> Self {
        Self { n }
    }
}

impl Workload for FibWorkload {
    fn name(&self) -> &str {
        "fib"
    }

    fn run(&mut self) -> Result<(), RunnerError> {
        black_box(compute(black_box(self.n)));
        Ok(())
    }
}

/// Build the workload selected by the benchmark configuration.
pub fn workload_for(config: &BenchConfig) -> Box<dyn Workload> {
    match config.workload {
        WorkloadKind::Primes => Box::new(PrimesWorkload::new(
            config.primes_n,
            config.primes_expected,
        )),
        WorkloadKind::Fib => Box::new(FibWorkload::new(config.fib_n)),
    }
}
