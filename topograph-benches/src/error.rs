//! Benchmark setup error type.
//!
//! Setup helpers propagate core failures with `?` so bench functions only
//! panic once, at the outermost layer.

use topograph_core::{ConfigError, GenerationError, GraphError, PathError};

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The benchmark parameters did not form a valid configuration.
    #[error("invalid generation config: {0}")]
    Config(#[from] ConfigError),
    /// The generator gave up on a configuration.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A synthetic edge list was rejected.
    #[error("synthetic graph rejected: {0}")]
    Graph(#[from] GraphError),
    /// A query endpoint fell outside the graph.
    #[error("query failed: {0}")]
    Path(#[from] PathError),
}
