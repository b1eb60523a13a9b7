//! Common types, errors, and configuration for fib-runner.
//!
//! This crate provides shared functionality used across the fib-runner workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Configuration structures for the calculator, sample driver and benchmarks
//! - TOML configuration file loading

pub mod config;
pub mod config_file;
pub mod error;

pub use config::{
    BenchConfig, CalculatorConfig, MAX_PRIMES_N, RunnerConfig, SampleConfig, WorkloadKind,
};
pub use config_file::{ConfigFile, ConfigFileError, LogConfig, LogFormat};
pub use error::RunnerError;
