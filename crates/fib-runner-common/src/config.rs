//! Configuration structures for fib-runner.
//!
//! This module defines configuration options for the components:
//! - [`RunnerConfig`]: Top-level configuration containing all settings
//! - [`CalculatorConfig`]: How the calculator renders its message
//! - [`SampleConfig`]: The sample driver loop (count, pause, label)
//! - [`BenchConfig`]: Warm-up, measured iterations and workload selection

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::RunnerError;

/// Largest prime index the `primes` workload accepts.
pub const MAX_PRIMES_N: usize = 1_000_000;

/// Top-level runner configuration.
///
/// It can be loaded from a TOML file (see [`crate::ConfigFile`]) and is
/// then overridden by command-line flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// Calculator configuration.
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Sample driver configuration.
    #[serde(default)]
    pub sample: SampleConfig,

    /// Benchmark configuration.
    #[serde(default)]
    pub bench: BenchConfig,
}

impl RunnerConfig {
    /// Check the settings that would make a run meaningless.
    pub fn validate(&self) -> Result<(), RunnerError> {
        if self.bench.iterations == 0 {
            return Err(RunnerError::invalid_config(
                "bench.iterations must be greater than 0",
            ));
        }
        if self.bench.primes_n > MAX_PRIMES_N {
            return Err(RunnerError::invalid_config(format!(
                "bench.primes_n must be at most {MAX_PRIMES_N}, got {}",
                self.bench.primes_n
            )));
        }
        Ok(())
    }
}

/// Calculator configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CalculatorConfig {
    /// Word placed in front of the message, e.g. `"Rust"` gives
    /// `"Rust computed that fib(10) is 55"`.
    #[serde(default)]
    pub message_prefix: Option<String>,
}

/// Sample driver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SampleConfig {
    /// Number of inputs to run, starting at 0.
    #[serde(default = "defaults::sample_count")]
    pub count: u32,

    /// Pause between two iterations in milliseconds.
    #[serde(default = "defaults::sample_delay_ms")]
    pub delay_ms: u64,

    /// Label printed in front of each summary line.
    #[serde(default = "defaults::host_label")]
    pub host_label: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: defaults::sample_count(),
            delay_ms: defaults::sample_delay_ms(),
            host_label: defaults::host_label(),
        }
    }
}

impl SampleConfig {
    /// Get the pause between iterations as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Which workload a benchmark measures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadKind {
    /// Prime generation through a chain of divisibility filters.
    #[default]
    Primes,
    /// The recursive Fibonacci calculation.
    Fib,
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadKind::Primes => write!(f, "primes"),
            WorkloadKind::Fib => write!(f, "fib"),
        }
    }
}

impl FromStr for WorkloadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primes" => Ok(WorkloadKind::Primes),
            "fib" => Ok(WorkloadKind::Fib),
            other => Err(format!("unknown workload '{other}' (expected 'primes' or 'fib')")),
        }
    }
}

/// Benchmark configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BenchConfig {
    /// Unmeasured runs before timing starts.
    #[serde(default = "defaults::warmup")]
    pub warmup: u32,

    /// Measured runs.
    #[serde(default = "defaults::iterations")]
    pub iterations: u32,

    /// Workload to measure.
    #[serde(default)]
    pub workload: WorkloadKind,

    /// Input for the `fib` workload.
    #[serde(default = "defaults::fib_n")]
    pub fib_n: i64,

    /// Index of the prime the `primes` workload checks.
    #[serde(default = "defaults::primes_n")]
    pub primes_n: usize,

    /// Expected prime at index `primes_n`.
    #[serde(default = "defaults::primes_expected")]
    pub primes_expected: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup: defaults::warmup(),
            iterations: defaults::iterations(),
            workload: WorkloadKind::default(),
            fib_n: defaults::fib_n(),
            primes_n: defaults::primes_n(),
            primes_expected: defaults::primes_expected(),
        }
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn sample_count() -> u32 {
        10
    }

    pub const fn sample_delay_ms() -> u64 {
        500
    }

    pub fn host_label() -> String {
        "fib-runner".into()
    }

    pub const fn warmup() -> u32 {
        10
    }

    pub const fn iterations() -> u32 {
        10
    }

    pub const fn fib_n() -> i64 {
        25
    }

    pub const fn primes_n() -> usize {
        2000
    }

    pub const fn primes_expected() -> u64 {
        17393
    }
}
