//! Core of fib-runner.
//!
//! This crate provides the calculation and the two drivers built on it:
//! - [`compute`] and [`Calculator`]: recursive Fibonacci plus its message
//! - [`OutputSink`]: where emitted lines go ([`WriterSink`], [`MemorySink`])
//! - [`SampleDriver`]: runs the calculator over `0..count` with a pause
//! - [`Benchmark`]: warm-up and timed iterations over a [`Workload`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐
//! │ SampleDriver │   │  Benchmark   │──► Workload (PrimesWorkload, FibWorkload)
//! └──────┬───────┘   └──────┬───────┘
//!        ▼                  │
//! ┌──────────────┐          │
//! │  Calculator  │          │
//! └──────┬───────┘          │
//!        ▼                  ▼
//! ┌──────────────────────────────────┐
//! │ OutputSink (stdout / in memory)  │
//! └──────────────────────────────────┘
//! ```

pub mod bench;
pub mod fib;
pub mod sample;
pub mod sink;
pub mod workload;

pub use bench::{BenchReport, Benchmark};
pub use fib::{Calculator, compute, format_message};
pub use sample::SampleDriver;
pub use sink::{MemorySink, OutputSink, WriterSink};
pub use workload::{FibWorkload, PrimesWorkload, Workload, workload_for};
