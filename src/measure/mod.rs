//! Timing and repeated sampling
//!
//! Timing uses `std::time::Instant`, a monotonic clock, so wall-clock
//! adjustments during a run cannot skew measurements. Repetitions of one
//! configuration run strictly back to back; overlapping them would contend
//! for the CPU being measured.

use crate::subject::{ProcessRunner, SubjectCommand, SubjectError};
use indicatif::ProgressBar;
use std::time::Instant;
use thiserror::Error;

/// Elapsed seconds of every successful repetition of one configuration
pub type SampleSet = Vec<f64>;

/// One repetition failed; the whole sample set is discarded
#[derive(Debug, Error)]
#[error("repetition {repetition}/{repeats} of `{command}` failed: {source}")]
pub struct SampleError {
    /// 1-based index of the failed repetition
    pub repetition: usize,
    /// Configured repetition count
    pub repeats: usize,
    /// Rendered command line of the failed invocation
    pub command: String,
    #[source]
    pub source: SubjectError,
}

/// Time a single invocation; elapsed is computed on every exit path
pub fn timed<T>(f: impl FnOnce() -> T) -> (f64, T) {
    let start = Instant::now();
    let value = f();
    (start.elapsed().as_secs_f64(), value)
}

/// Runs one subject configuration a fixed number of times in sequence
pub struct RepeatedSampler {
    repeats: usize,
}

impl RepeatedSampler {
    /// Create a sampler with the given repetition count
    pub fn new(repeats: usize) -> Self {
        Self { repeats }
    }

    /// Get the configured repetition count
    pub fn repeats(&self) -> usize {
        self.repeats
    }

    /// Run the configuration `repeats` times and collect elapsed seconds.
    ///
    /// Returns exactly `repeats` samples or fails entirely: a launch failure
    /// or non-zero exit on any repetition aborts the set. A partial sample
    /// set is never returned as if complete.
    pub fn sample(
        &self,
        command: &SubjectCommand,
        extra_args: &[String],
        progress: Option<&ProgressBar>,
    ) -> Result<SampleSet, SampleError> {
        let mut samples = Vec::with_capacity(self.repeats);

        for repetition in 1..=self.repeats {
            let (elapsed, outcome) = timed(|| ProcessRunner::run(command, extra_args));

            let checked = outcome
                .and_then(|output| output.ensure_success(&command.display_line(extra_args)));

            match checked {
                Ok(_) => {
                    tracing::debug!(repetition, elapsed_secs = elapsed, "sample complete");
                    samples.push(elapsed);
                }
                Err(source) => {
                    return Err(SampleError {
                        repetition,
                        repeats: self.repeats,
                        command: command.display_line(extra_args),
                        source,
                    });
                }
            }

            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        Ok(samples)
    }
}
