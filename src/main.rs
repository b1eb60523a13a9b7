//! fib-runner CLI entry point.
//!
//! Runs the Fibonacci calculator once, the sample driver, or a benchmark.
//! Results go to stdout, logs to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fib_runner_common::{ConfigFile, LogFormat, RunnerConfig, WorkloadKind};
use fib_runner_core::{Benchmark, Calculator, SampleDriver, WriterSink, workload_for};

#[derive(Debug, Parser)]
#[command(name = "fib-runner", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "FIB_RUNNER_CONFIG")]
    config: Option<PathBuf>,

    /// Word placed in front of the calculator message.
    #[arg(long, global = true)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute fib(N) once and print the message.
    Compute {
        /// Input; values <= 2 yield 1.
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Compute fib(0) .. fib(COUNT - 1) with a pause between each.
    Sample {
        /// Number of inputs to run, starting at 0.
        #[arg(long)]
        count: Option<u32>,

        /// Pause between inputs in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Time a workload after a warm-up.
    Bench {
        /// Workload to measure: `primes` or `fib`.
        #[arg(long)]
        workload: Option<WorkloadKind>,

        /// Unmeasured runs before timing starts.
        #[arg(long)]
        warmup: Option<u32>,

        /// Measured runs.
        #[arg(long)]
        iterations: Option<u32>,

        /// Input for the `fib` workload.
        #[arg(long, allow_negative_numbers = true)]
        n: Option<i64>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    fn apply(&self, config: &mut RunnerConfig) {
        if let Some(prefix) = &self.prefix {
            config.calculator.message_prefix = Some(prefix.clone());
        }

        match &self.command {
            Command::Compute { .. } => {}
            Command::Sample { count, delay_ms } => {
                if let Some(count) = count {
                    config.sample.count = *count;
                }
                if let Some(delay_ms) = delay_ms {
                    config.sample.delay_ms = *delay_ms;
                }
            }
            Command::Bench {
                workload,
                warmup,
                iterations,
                n,
            } => {
                if let Some(workload) = workload {
                    config.bench.workload = *workload;
                }
                if let Some(warmup) = warmup {
                    config.bench.warmup = *warmup;
                }
                if let Some(iterations) = iterations {
                    config.bench.iterations = *iterations;
                }
                if let Some(n) = n {
                    config.bench.fib_n = *n;
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let file = match &cli.config {
        Some(path) => ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigFile::default(),
    };

    // Initialize tracing
    let json = file.log.format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| file.log.filter.as_str().into()),
        )
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    let mut config = file.runner;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    info!(command = ?cli.command, "Configuration loaded");

    let calculator = Calculator::from_config(&config.calculator);
    let mut sink = WriterSink::stdout();

    match cli.command {
        Command::Compute { n } => {
            calculator.run(n, &mut sink)?;
        }
        Command::Sample { .. } => {
            SampleDriver::new(calculator, &config.sample)
                .run(&mut sink)
                .await?;
        }
        Command::Bench { .. } => {
            let mut workload = workload_for(&config.bench);
            let report = Benchmark::from_config(&config.bench).run(workload.as_mut(), &mut sink)?;
            info!(
                workload = %report.workload,
                last = ?report.last(),
                min = ?report.min(),
                max = ?report.max(),
                "Benchmark report"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compute_negative() {
        let cli = Cli::try_parse_from(["fib-runner", "compute", "-3"]).unwrap();
        assert!(matches!(cli.command, Command::Compute { n: -3 }));
    }

    #[test]
    fn test_sample_overrides() {
        let cli = Cli::try_parse_from([
            "fib-runner",
            "--prefix",
            "Rust",
            "sample",
            "--count",
            "3",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        let mut config = RunnerConfig::default();

        cli.apply(&mut config);

        assert_eq!(config.calculator.message_prefix.as_deref(), Some("Rust"));
        assert_eq!(config.sample.count, 3);
        assert_eq!(config.sample.delay_ms, 0);
    }

    #[test]
    fn test_bench_overrides() {
        let cli = Cli::try_parse_from([
            "fib-runner",
            "bench",
            "--workload",
            "fib",
            "--iterations",
            "2",
            "--n",
            "12",
        ])
        .unwrap();
        let mut config = RunnerConfig::default();

        cli.apply(&mut config);

        assert_eq!(config.bench.workload, WorkloadKind::Fib);
        assert_eq!(config.bench.iterations, 2);
        assert_eq!(config.bench.warmup, 10);
        assert_eq!(config.bench.fib_n, 12);
    }

    #[test]
    fn test_flags_override_config_file() {
        let toml = r#"
            [calculator]
            message_prefix = "File"

            [sample]
            count = 7
            delay_ms = 250
            host_label = "from-file"

            [bench]
            warmup = 4
            iterations = 6
            workload = "primes"
            fib_n = 18
        "#;
        let mut config = ConfigFile::from_toml(toml).unwrap().runner;

        let cli = Cli::try_parse_from(["fib-runner", "sample", "--count", "2"]).unwrap();
        cli.apply(&mut config);

        assert_eq!(config.sample.count, 2);
        assert_eq!(config.sample.delay_ms, 250);
        assert_eq!(config.sample.host_label, "from-file");
        assert_eq!(config.calculator.message_prefix.as_deref(), Some("File"));

        let cli = Cli::try_parse_from([
            "fib-runner",
            "--prefix",
            "Flag",
            "bench",
            "--workload",
            "fib",
            "--warmup",
            "1",
        ])
        .unwrap();
        cli.apply(&mut config);

        assert_eq!(config.calculator.message_prefix.as_deref(), Some("Flag"));
        assert_eq!(config.bench.workload, WorkloadKind::Fib);
        assert_eq!(config.bench.warmup, 1);
        assert_eq!(config.bench.iterations, 6);
        assert_eq!(config.bench.fib_n, 18);
    }

    #[test]
    fn test_unknown_workload_rejected() {
        let result = Cli::try_parse_from(["fib-runner", "bench", "--workload", "nashorn"]);
        assert!(result.is_err());
    }
}
