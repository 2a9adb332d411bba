//! CLI argument parsing and command handling

use crate::config::BenchConfig;
use crate::matrix::GraphSizeConfig;
use crate::metrics::ResultTable;
use crate::output::{CsvExporter, ExcelExporter, JsonExporter};
use crate::runner::BenchmarkRunner;
use crate::subject::SubjectCommand;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// PageRank Bench - speedup measurement for external PageRank programs
#[derive(Parser, Debug)]
#[command(name = "pagerank-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Graph sizes as comma-separated VxE pairs (e.g. "100x200,500x1000")
    #[arg(long)]
    pub sizes: Option<String>,

    /// Concurrency levels as comma-separated thread counts (e.g. "2,4,8")
    #[arg(long)]
    pub levels: Option<String>,

    /// Baseline command template (e.g. "java SequentialPageRank")
    #[arg(long)]
    pub baseline: Option<String>,

    /// Variant command template (e.g. "java ParallelPageRank")
    #[arg(long)]
    pub variant: Option<String>,

    /// Repetitions per configuration
    #[arg(short, long)]
    pub repeats: Option<usize>,

    /// Report destination (.xlsx), overwritten each run
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the report as CSV next to the Excel file
    #[arg(long)]
    pub csv: bool,

    /// Also export the report as JSON next to the Excel file
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run the benchmark based on CLI arguments
    pub fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        config.validate()?;

        tracing::info!("Starting PageRank Bench");
        tracing::info!("Baseline: {}", config.baseline.display_line(&[]));
        tracing::info!("Variant: {}", config.variant.display_line(&[]));
        tracing::info!("Repeats: {}", config.num_repeats);

        println!("\n{}", "=".repeat(70));
        println!("   PageRank Bench - Sequential vs. Parallel Speedup");
        println!("{}", "=".repeat(70));
        println!();
        println!("Configuration:");
        println!("  Baseline:     {}", config.baseline.display_line(&[]));
        println!("  Variant:      {}", config.variant.display_line(&[]));
        println!(
            "  Graph sizes:  {}",
            config
                .graph_sizes
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "  Threads:      {}",
            config
                .concurrency_levels
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("  Repeats:      {}", config.num_repeats);
        println!("{}", "=".repeat(70));
        println!();

        println!("Starting benchmark...\n");
        let runner = BenchmarkRunner::new(config.clone());
        let table = runner.run()?;

        println!();
        self.print_results(&table);

        ExcelExporter::export(&table, &config.output_path).with_context(|| {
            format!("failed to write report to: {}", config.output_path.display())
        })?;
        println!("✓ Report written to: {}", config.output_path.display());

        if self.csv {
            let path = config.output_path.with_extension("csv");
            CsvExporter::export(&table, &path)
                .with_context(|| format!("failed to export CSV to: {}", path.display()))?;
            println!("✓ CSV exported to: {}", path.display());
        }

        if self.json {
            let path = config.output_path.with_extension("json");
            JsonExporter::export(&table, &path)
                .with_context(|| format!("failed to export JSON to: {}", path.display()))?;
            println!("✓ JSON exported to: {}", path.display());
        }

        Ok(())
    }

    /// Assemble the configuration: file first, then flag overrides
    fn build_config(&self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_file(path)
                .with_context(|| format!("failed to load config: {}", path.display()))?,
            None => BenchConfig::default(),
        };

        if let Some(sizes) = &self.sizes {
            config.graph_sizes = parse_sizes(sizes)
                .with_context(|| format!("failed to parse graph sizes: {sizes}"))?;
        }
        if let Some(levels) = &self.levels {
            config.concurrency_levels = parse_levels(levels)
                .with_context(|| format!("failed to parse concurrency levels: {levels}"))?;
        }
        if let Some(baseline) = &self.baseline {
            config.baseline = parse_command(baseline)?;
        }
        if let Some(variant) = &self.variant {
            config.variant = parse_command(variant)?;
        }
        if let Some(repeats) = self.repeats {
            config.num_repeats = repeats;
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }

        Ok(config)
    }

    /// Print the result table in a readable layout
    fn print_results(&self, table: &ResultTable) {
        println!("{}", "=".repeat(70));
        println!("   Benchmark Results");
        println!("{}", "=".repeat(70));
        println!();
        println!(
            "{:<28} {:>8} {:>13} {:>13} {:>8}",
            "Graph", "Threads", "Baseline (s)", "Variant (s)", "Speedup"
        );

        for row in table.iter() {
            println!(
                "{:<28} {:>8} {:>13.4} {:>13.4} {:>8}",
                row.graph_size.label(),
                row.concurrency_level,
                row.baseline_mean_secs,
                row.variant_mean_secs,
                row.speedup
            );
        }

        println!();
        println!("{}", "=".repeat(70));
        println!();
    }
}

/// Parse "100x200,500x1000" into graph size configs
fn parse_sizes(input: &str) -> Result<Vec<GraphSizeConfig>> {
    input
        .split(',')
        .map(|pair| {
            let (vertices, edges) = pair
                .trim()
                .split_once('x')
                .ok_or_else(|| anyhow::anyhow!("expected VxE pair, got: {pair}"))?;
            Ok(GraphSizeConfig::new(
                vertices
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid vertex count: {vertices}"))?,
                edges
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid edge count: {edges}"))?,
            ))
        })
        .collect()
}

/// Parse "2,4,8" into concurrency levels
fn parse_levels(input: &str) -> Result<Vec<u32>> {
    input
        .split(',')
        .map(|level| {
            level
                .trim()
                .parse()
                .with_context(|| format!("invalid thread count: {level}"))
        })
        .collect()
}

/// Split a command template on whitespace: program first, leading args after
fn parse_command(input: &str) -> Result<SubjectCommand> {
    let mut parts = input.split_whitespace().map(|s| s.to_string());
    let program = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("empty command template"))?;
    Ok(SubjectCommand::new(program, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sizes() {
        let sizes = parse_sizes("100x200, 500x1000").unwrap();
        assert_eq!(
            sizes,
            vec![
                GraphSizeConfig::new(100, 200),
                GraphSizeConfig::new(500, 1000)
            ]
        );
    }

    #[test]
    fn test_parse_sizes_rejects_malformed_pair() {
        assert!(parse_sizes("100-200").is_err());
        assert!(parse_sizes("100x").is_err());
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!(parse_levels("2,4, 8").unwrap(), vec![2, 4, 8]);
        assert!(parse_levels("2,four").is_err());
    }

    #[test]
    fn test_parse_command() {
        let cmd = parse_command("java ParallelPageRank").unwrap();
        assert_eq!(cmd.program, "java");
        assert_eq!(cmd.args, vec!["ParallelPageRank".to_string()]);

        assert!(parse_command("   ").is_err());
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "pagerank-bench",
            "--sizes",
            "10x20",
            "--levels",
            "2",
            "--repeats",
            "3",
            "--baseline",
            "true",
            "--variant",
            "true",
        ]);
        let config = cli.build_config().unwrap();
        assert_eq!(config.graph_sizes, vec![GraphSizeConfig::new(10, 20)]);
        assert_eq!(config.concurrency_levels, vec![2]);
        assert_eq!(config.num_repeats, 3);
        assert_eq!(config.baseline.program, "true");
    }
}
