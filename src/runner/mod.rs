//! Benchmark orchestration
//!
//! The runner walks the experiment matrix in row-major order, measures the
//! baseline once per graph size, measures the variant at each concurrency
//! level, and assembles the result table. Any sampling or aggregation error
//! aborts the whole run; a partial report is never produced.

use crate::config::BenchConfig;
use crate::matrix::{ExperimentMatrix, GraphSizeConfig};
use crate::measure::RepeatedSampler;
use crate::metrics::{self, ExperimentResultRow, ResultTable};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Runner for the full measurement sweep
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Create a runner for the given configuration
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Run every experiment and return the completed result table.
    ///
    /// Experiments run strictly one after another; sampling two subjects at
    /// once would contend for the CPU under measurement.
    pub fn run(&self) -> Result<ResultTable> {
        let matrix = ExperimentMatrix::new(
            self.config.graph_sizes.clone(),
            self.config.concurrency_levels.clone(),
        );
        let sampler = RepeatedSampler::new(self.config.num_repeats);

        // One baseline sample set per size plus one variant set per pair
        let total_samples =
            (matrix.sizes().len() + matrix.len()) * self.config.num_repeats;

        let pb = ProgressBar::new(total_samples as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut table = ResultTable::new();
        let mut baseline: Option<(GraphSizeConfig, f64)> = None;

        for (size, level) in matrix.pairs() {
            // Row-major order groups all levels of one size together, so the
            // baseline for a size is measured exactly once and reused.
            let baseline_mean = match baseline {
                Some((cached_size, mean)) if cached_size == size => mean,
                _ => {
                    tracing::info!(
                        vertices = size.vertices,
                        edges = size.edges,
                        "measuring baseline"
                    );
                    pb.set_message(format!("baseline {size}"));
                    let size_args = vec![size.vertices.to_string(), size.edges.to_string()];
                    let samples =
                        sampler.sample(&self.config.baseline, &size_args, Some(&pb))?;
                    let mean = metrics::mean(&samples)?;
                    baseline = Some((size, mean));
                    mean
                }
            };

            tracing::info!(
                vertices = size.vertices,
                edges = size.edges,
                threads = level,
                "measuring variant"
            );
            pb.set_message(format!("variant {size} @ {level} threads"));
            let variant_args = vec![
                size.vertices.to_string(),
                size.edges.to_string(),
                level.to_string(),
            ];
            let samples = sampler.sample(&self.config.variant, &variant_args, Some(&pb))?;
            let variant_mean = metrics::mean(&samples)?;
            let speedup = metrics::speedup(baseline_mean, variant_mean, level)?;

            tracing::info!(
                baseline_mean_secs = baseline_mean,
                variant_mean_secs = variant_mean,
                %speedup,
                "experiment complete"
            );

            table.push(ExperimentResultRow {
                graph_size: size,
                concurrency_level: level,
                baseline_mean_secs: baseline_mean,
                variant_mean_secs: variant_mean,
                speedup,
            });
        }

        pb.finish_with_message("benchmark complete");

        Ok(table)
    }
}
