//! Sample aggregation and the result table
//!
//! Reduces the raw timing samples to the statistics the report carries:
//! per-configuration means and the baseline/variant speedup ratio.

use crate::matrix::GraphSizeConfig;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Aggregation-time anomalies
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// Should not occur given the sampler's all-or-nothing contract
    #[error("cannot aggregate an empty sample set")]
    EmptySampleSet,

    /// A zero mean is a measurement anomaly, surfaced instead of producing
    /// a silent infinity
    #[error("variant mean is exactly zero at concurrency level {level}")]
    ZeroVariantMean { level: u32 },
}

/// Speedup ratio of baseline mean over variant mean
///
/// `NotApplicable` is reserved for concurrency levels of one or less, where
/// no parallelism was requested and the ratio is uninformative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    Applicable(f64),
    NotApplicable,
}

impl Speedup {
    pub fn is_applicable(&self) -> bool {
        matches!(self, Speedup::Applicable(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Speedup::Applicable(v) => Some(*v),
            Speedup::NotApplicable => None,
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Applicable(v) => write!(f, "{v:.4}"),
            Speedup::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Speedup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Speedup::Applicable(v) => serializer.serialize_f64(*v),
            Speedup::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

/// Arithmetic mean of a sample set
pub fn mean(samples: &[f64]) -> Result<f64, AggregateError> {
    if samples.is_empty() {
        return Err(AggregateError::EmptySampleSet);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Speedup of the variant over the baseline at the given concurrency level
pub fn speedup(
    baseline_mean: f64,
    variant_mean: f64,
    level: u32,
) -> Result<Speedup, AggregateError> {
    if level <= 1 {
        return Ok(Speedup::NotApplicable);
    }
    if variant_mean == 0.0 {
        return Err(AggregateError::ZeroVariantMean { level });
    }
    Ok(Speedup::Applicable(baseline_mean / variant_mean))
}

/// One completed experiment: a (graph size, concurrency level) pair with its
/// aggregated timings. Never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentResultRow {
    pub graph_size: GraphSizeConfig,
    pub concurrency_level: u32,
    pub baseline_mean_secs: f64,
    pub variant_mean_secs: f64,
    pub speedup: Speedup,
}

/// Ordered, append-only collection of experiment results
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<ExperimentResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn push(&mut self, row: ExperimentResultRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExperimentResultRow> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[ExperimentResultRow] {
        &self.rows
    }
}
