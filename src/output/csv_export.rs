//! CSV export functionality

use crate::metrics::ResultTable;
use crate::output::HEADERS;
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Export the result table to a CSV file, overwriting any existing file
    pub fn export(table: &ResultTable, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create report file: {}", path.display()))?;
        let mut wtr = Writer::from_writer(file);

        wtr.write_record(HEADERS)?;

        for result in table.iter() {
            wtr.write_record(&[
                result.graph_size.label(),
                result.concurrency_level.to_string(),
                format!("{:.6}", result.baseline_mean_secs),
                format!("{:.6}", result.variant_mean_secs),
                result.speedup.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::GraphSizeConfig;
    use crate::metrics::{ExperimentResultRow, Speedup};

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new();
        table.push(ExperimentResultRow {
            graph_size: GraphSizeConfig::new(100, 200),
            concurrency_level: 2,
            baseline_mean_secs: 1.0,
            variant_mean_secs: 0.6,
            speedup: Speedup::Applicable(1.6667),
        });
        table.push(ExperimentResultRow {
            graph_size: GraphSizeConfig::new(100, 200),
            concurrency_level: 1,
            baseline_mean_secs: 1.0,
            variant_mean_secs: 1.1,
            speedup: Speedup::NotApplicable,
        });
        table
    }

    #[test]
    fn test_export_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        CsvExporter::export(&sample_table(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Tamanho do Grafo"));
        assert!(lines[1].contains("100 vértices, 200 arestas"));
        assert!(lines[1].contains("1.6667"));
        assert!(lines[2].contains("N/A"));
    }

    #[test]
    fn test_export_is_shape_stable_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        CsvExporter::export(&sample_table(), &path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        CsvExporter::export(&sample_table(), &path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first.lines().count(), second.lines().count());
    }
}
