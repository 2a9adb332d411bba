//! Excel export functionality
//!
//! The primary report sink: one worksheet, one row per experiment, with the
//! speedup column holding either the ratio or the literal "N/A" marker.

use crate::metrics::{ResultTable, Speedup};
use crate::output::HEADERS;
use anyhow::Result;
use rust_xlsxwriter::*;
use std::path::Path;

pub struct ExcelExporter;

impl ExcelExporter {
    /// Export the result table to an Excel file, overwriting any existing file
    pub fn export(table: &ResultTable, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name("Resultados")?;

        let bold = Format::new().set_bold();
        let number_format = Format::new().set_num_format("0.0000");

        for (col, header) in HEADERS.iter().enumerate() {
            sheet.write_with_format(0, col as u16, *header, &bold)?;
        }

        for (idx, result) in table.iter().enumerate() {
            let row = (idx + 1) as u32;
            sheet.write(row, 0, result.graph_size.label())?;
            sheet.write(row, 1, result.concurrency_level as f64)?;
            sheet.write_with_format(row, 2, result.baseline_mean_secs, &number_format)?;
            sheet.write_with_format(row, 3, result.variant_mean_secs, &number_format)?;
            match result.speedup {
                Speedup::Applicable(v) => {
                    sheet.write_with_format(row, 4, v, &number_format)?;
                }
                Speedup::NotApplicable => {
                    sheet.write(row, 4, "N/A")?;
                }
            }
        }

        sheet.set_column_width(0, 28)?;
        sheet.set_column_width(1, 18)?;
        sheet.set_column_width(2, 24)?;
        sheet.set_column_width(3, 24)?;
        sheet.set_column_width(4, 12)?;

        workbook.save(path)?;
        Ok(())
    }
}
