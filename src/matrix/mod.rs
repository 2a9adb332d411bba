//! Experiment enumeration over graph sizes and concurrency levels
//!
//! The matrix yields pairs in row-major order (outer loop over graph sizes,
//! inner loop over concurrency levels) so the orchestrator can measure the
//! baseline once per size and reuse it across the inner loop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One graph test case: vertex and edge counts handed to the subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSizeConfig {
    pub vertices: u32,
    pub edges: u32,
}

impl GraphSizeConfig {
    pub fn new(vertices: u32, edges: u32) -> Self {
        Self { vertices, edges }
    }

    /// Human-readable size descriptor used in the report
    pub fn label(&self) -> String {
        format!("{} vértices, {} arestas", self.vertices, self.edges)
    }
}

impl fmt::Display for GraphSizeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v/{}e", self.vertices, self.edges)
    }
}

/// Cartesian product of graph sizes × concurrency levels
///
/// Pure enumeration with no side effects; `pairs` can be called any number
/// of times and always yields the same finite sequence.
#[derive(Debug, Clone)]
pub struct ExperimentMatrix {
    sizes: Vec<GraphSizeConfig>,
    levels: Vec<u32>,
}

impl ExperimentMatrix {
    pub fn new(sizes: Vec<GraphSizeConfig>, levels: Vec<u32>) -> Self {
        Self { sizes, levels }
    }

    /// Number of (size, level) pairs
    pub fn len(&self) -> usize {
        self.sizes.len() * self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sizes(&self) -> &[GraphSizeConfig] {
        &self.sizes
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Lazily enumerate all pairs in row-major order
    pub fn pairs(&self) -> impl Iterator<Item = (GraphSizeConfig, u32)> + '_ {
        self.sizes
            .iter()
            .copied()
            .flat_map(move |size| self.levels.iter().copied().map(move |level| (size, level)))
    }
}
