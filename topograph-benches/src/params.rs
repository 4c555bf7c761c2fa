//! Benchmark parameter types.
//!
//! Each struct renders as the Criterion parameter label, so report paths
//! stay short and stable across runs.

use std::fmt;

/// Parameters for a generation benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GenerationBenchParams {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Degree cap handed to the generator.
    pub max_degree: usize,
    /// Whether weights are drawn at random.
    pub weighted: bool,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weighting = if self.weighted { "weighted" } else { "unit" };
        write!(f, "n={},max={},{weighting}", self.node_count, self.max_degree)
    }
}

/// Parameters for a query benchmark over a synthetic grid.
#[derive(Clone, Copy, Debug)]
pub struct GridBenchParams {
    /// Nodes per grid row and column.
    pub side: usize,
}

impl GridBenchParams {
    /// Total number of nodes in the grid.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.side.saturating_mul(self.side)
    }
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side)
    }
}
