//! Benchmark configuration
//!
//! Everything an experiment definition needs lives here: the graph sizes,
//! the concurrency levels, the repetition count, the two subject command
//! templates, and the report destination. Defaults reproduce the original
//! PageRank experiment; a JSON file or CLI flags can override any of it.

use crate::matrix::GraphSizeConfig;
use crate::subject::SubjectCommand;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Full configuration for one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Graph test cases, in report order
    pub graph_sizes: Vec<GraphSizeConfig>,
    /// Thread counts requested of the variant, in report order
    pub concurrency_levels: Vec<u32>,
    /// Repetitions per (program, configuration) pair
    pub num_repeats: usize,
    /// Sequential baseline command template; `<vertices> <edges>` is appended
    pub baseline: SubjectCommand,
    /// Parallel variant command template; `<vertices> <edges> <threads>` is appended
    pub variant: SubjectCommand,
    /// Report destination, overwritten on every run
    pub output_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            graph_sizes: vec![
                GraphSizeConfig::new(100, 200),
                GraphSizeConfig::new(500, 1000),
                GraphSizeConfig::new(1000, 2000),
            ],
            concurrency_levels: vec![2, 4, 8],
            num_repeats: 5,
            baseline: SubjectCommand::new("java", vec!["SequentialPageRank".to_string()]),
            variant: SubjectCommand::new("java", vec!["ParallelPageRank".to_string()]),
            output_path: PathBuf::from("comparacao_pagerank_threads.xlsx"),
        }
    }
}

impl BenchConfig {
    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: BenchConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Reject configurations the harness cannot run meaningfully
    pub fn validate(&self) -> Result<()> {
        if self.graph_sizes.is_empty() {
            anyhow::bail!("at least one graph size is required");
        }
        if self.concurrency_levels.is_empty() {
            anyhow::bail!("at least one concurrency level is required");
        }
        if self.num_repeats == 0 {
            anyhow::bail!("repeat count must be positive");
        }
        for size in &self.graph_sizes {
            if size.vertices == 0 || size.edges == 0 {
                anyhow::bail!("graph sizes must have positive vertex and edge counts, got {size}");
            }
        }
        for &level in &self.concurrency_levels {
            if level == 0 {
                anyhow::bail!("concurrency levels must be positive");
            }
        }
        if self.baseline.program.is_empty() {
            anyhow::bail!("baseline command must name an executable");
        }
        if self.variant.program.is_empty() {
            anyhow::bail!("variant command must name an executable");
        }
        Ok(())
    }
}
