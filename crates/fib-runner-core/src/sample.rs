//! Sample driver.
//!
//! Runs the [`Calculator`] for each input in `0..count`. After each
//! calculation it emits a summary line `"<label> - fib(<i>) = <value>"`, then
//! pauses before the next input.

use std::time::Duration;

use tracing::{info, instrument};

use fib_runner_common::{RunnerError, SampleConfig};

use crate::{Calculator, OutputSink};

/// Drives the calculator over a range of inputs.
#[derive(Debug, Clone)]
pub struct SampleDriver {
    calculator: Calculator,
    count: u32,
    delay: Duration,
    host_label: String,
}

impl SampleDriver {
    /// Create a driver from its configuration section.
    pub fn new(calculator: Calculator, config: &SampleConfig) -> Self {
        Self {
            calculator,
            count: config.count,
            delay: config.delay(),
            host_label: config.host_label.clone(),
        }
    }

    /// Number of inputs the driver runs.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Run every input and return the computed values in order.
    ///
    /// No pause follows the last input.
    #[instrument(skip_all, fields(count = self.count, delay = ?self.delay))]
    pub async fn run(&self, sink: &mut dyn OutputSink) -> Result<Vec<u64>, RunnerError> {
        let mut values = Vec::new();

        for i in 0..self.count {
            let n = i64::from(i);
            let value = self.calculator.run(n, sink)?;
            sink.emit(&format!("{} - fib({n}) = {value}", self.host_label))?;
            values.push(value);

            if i + 1 < self.count && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(runs = values.len(), "Sample finished");
        Ok(values)
    }
}
