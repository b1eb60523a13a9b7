//! Warm-up and timed iterations over a [`Workload`].
//!
//! A run emits a header, performs the unmeasured warm-up runs, then times
//! each measured run and emits `iteration: <ms>` for it.

use std::time::{Duration, Instant};

use tracing::{info, instrument};

use fib_runner_common::{BenchConfig, RunnerError};

use crate::{OutputSink, Workload};

/// Benchmark harness.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    warmup: u32,
    iterations: u32,
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

impl Benchmark {
    /// Create a harness with the given warm-up and measured run counts.
    pub fn new(warmup: u32, iterations: u32) -> Self {
        Self { warmup, iterations }
    }

    /// Create a harness from its configuration section.
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.warmup, config.iterations)
    }

    /// Run `workload`, reporting progress to `sink`.
    ///
    /// # Errors
    ///
    /// A workload failure aborts the run. Sink write failures are also
    /// propagated.
    #[instrument(skip_all, fields(workload = workload.name(), warmup = self.warmup, iterations = self.iterations))]
    pub fn run(
        &self,
        workload: &mut dyn Workload,
        sink: &mut dyn OutputSink,
    ) -> Result<BenchReport, RunnerError> {
        let name = workload.name().to_string();
        sink.emit(&format!("=== {name} ==="))?;

        sink.emit("warming up ...")?;
        for _ in 0..self.warmup {
            workload.run()?;
        }
        sink.emit("warmup finished, now measuring")?;

        let mut samples = Vec::new();
        for _ in 0..self.iterations {
            let start = Instant::now();
            workload.run()?;
            let took = start.elapsed();
            sink.emit(&format!("iteration: {}", took.as_millis()))?;
            samples.push(took);
        }

        let report = BenchReport {
            workload: name,
            samples,
        };
        info!(mean = ?report.mean(), "Benchmark finished");
        Ok(report)
    }
}

/// Timings collected by one [`Benchmark::run`].
#[derive(Debug, Clone)]
pub struct BenchReport {
    /// Name of the measured workload.
    pub workload: String,
    /// Duration of each measured run, in order.
    pub samples: Vec<Duration>,
}

impl BenchReport {
    /// Duration of the final measured run.
    pub fn last(&self) -> Option<Duration> {
        self.samples.last().copied()
    }

    /// Fastest measured run.
    pub fn min(&self) -> Option<Duration> {
        self.samples.iter().min().copied()
    }

    /// Slowest measured run.
    pub fn max(&self) -> Option<Duration> {
        self.samples.iter().max().copied()
    }

    /// Average over all measured runs.
    pub fn mean(&self) -> Option<Duration> {
        let count = u32::try_from(self.samples.len()).ok().filter(|&c| c > 0)?;
        Some(self.samples.iter().sum::<Duration>() / count)
    }
}
