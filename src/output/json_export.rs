//! JSON export functionality

use crate::metrics::ResultTable;
use anyhow::{Context, Result};
use serde_json::json;
use std::fs::File;
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Export the result table to a JSON file, overwriting any existing file
    pub fn export(table: &ResultTable, path: &Path) -> Result<()> {
        let rows: Vec<_> = table
            .iter()
            .map(|r| {
                json!({
                    "graph_size": r.graph_size.label(),
                    "vertices": r.graph_size.vertices,
                    "edges": r.graph_size.edges,
                    "concurrency_level": r.concurrency_level,
                    "baseline_mean_secs": r.baseline_mean_secs,
                    "variant_mean_secs": r.variant_mean_secs,
                    "speedup": r.speedup,
                })
            })
            .collect();

        let output = json!({
            "experiment_count": table.len(),
            "results": rows,
        });

        let file = File::create(path)
            .with_context(|| format!("failed to create report file: {}", path.display()))?;
        serde_json::to_writer_pretty(file, &output)?;

        Ok(())
    }
}
