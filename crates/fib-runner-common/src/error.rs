//! Error types for fib-runner.
//!
//! [`RunnerError`] covers everything that can fail while running the
//! calculator, the sample driver or a benchmark. Arithmetic overflow and
//! stack exhaustion inside the recursion are not represented here; they
//! behave the way Rust integer arithmetic and the thread stack do.

use std::io;

use thiserror::Error;

/// Top-level runner errors.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Writing to an output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A benchmark workload produced a result other than the expected one.
    #[error("Workload {workload} produced {actual}, expected {expected}")]
    WorkloadMismatch {
        /// Name of the workload that failed its self-check.
        workload: String,
        /// The value the workload should have produced.
        expected: u64,
        /// The value it actually produced.
        actual: u64,
    },

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl RunnerError {
    /// Create a new `WorkloadMismatch` error.
    pub fn workload_mismatch(workload: impl Into<String>, expected: u64, actual: u64) -> Self {
        Self::WorkloadMismatch {
            workload: workload.into(),
            expected,
            actual,
        }
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if a workload failed its self-check.
    pub fn is_workload_mismatch(&self) -> bool {
        matches!(self, Self::WorkloadMismatch { .. })
    }

    /// Returns `true` if the error came from the output sink.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
