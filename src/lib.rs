//! PageRank Bench - speedup measurement harness for external PageRank programs
//!
//! This library drives two external graph-ranking executables (a sequential
//! baseline and a thread-parametrized variant) across a matrix of graph sizes
//! and concurrency levels, times every invocation, and reduces the samples to
//! a speedup report.
//!
//! # Architecture
//!
//! - **Subject**: the external program model and synchronous process invocation
//! - **Measure**: monotonic timing and strictly sequential repeated sampling
//! - **Metrics**: sample aggregation (mean, speedup) and the result table
//! - **Matrix**: experiment enumeration over graph sizes × concurrency levels
//! - **Runner**: orchestrates the full measurement sweep
//! - **Output**: Excel, CSV, and JSON report sinks
//!
//! # Example
//!
//! ```rust,no_run
//! use pagerank_bench::config::BenchConfig;
//! use pagerank_bench::runner::BenchmarkRunner;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BenchConfig::default();
//!     let runner = BenchmarkRunner::new(config);
//!     let table = runner.run()?;
//!     println!("{} experiments completed", table.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod matrix;
pub mod measure;
pub mod metrics;
pub mod output;
pub mod runner;
pub mod subject;

// Re-export commonly used types
pub use config::BenchConfig;
pub use matrix::{ExperimentMatrix, GraphSizeConfig};
pub use measure::{RepeatedSampler, SampleError};
pub use metrics::{ExperimentResultRow, ResultTable, Speedup};
pub use output::{CsvExporter, ExcelExporter, JsonExporter};
pub use runner::BenchmarkRunner;
pub use subject::{ProcessRunner, SubjectCommand, SubjectError};
