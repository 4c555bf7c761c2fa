//! Seeded graph inputs shared by the benchmarks.
//!
//! Generated graphs are bounded by the engine's node-count range, so the
//! query benchmarks also run against weighted grids built through
//! [`Graph::from_edges`] to exercise larger inputs.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use topograph_core::{GenerationConfig, Graph, GraphGenerator, NodeId};

use crate::error::BenchSetupError;
use crate::params::{GenerationBenchParams, GridBenchParams};

const GRID_WEIGHTS: std::ops::RangeInclusive<u32> = 1..=10;

/// Builds the configuration a generation benchmark runs with.
///
/// # Errors
/// Returns [`BenchSetupError::Config`] when the parameters are out of range.
pub fn generation_config(
    params: &GenerationBenchParams,
) -> Result<GenerationConfig, BenchSetupError> {
    Ok(GenerationConfig::builder()
        .with_node_count(params.node_count)
        .with_min_degree(1)
        .with_max_degree(params.max_degree)
        .with_weighting(params.weighted)
        .build()?)
}

/// Generates one graph for the parameters with a fixed seed.
///
/// # Errors
/// Returns [`BenchSetupError`] when the configuration is invalid or the
/// generator gives up.
pub fn generated_graph(
    params: &GenerationBenchParams,
    seed: u64,
) -> Result<Graph, BenchSetupError> {
    let config = generation_config(params)?;
    Ok(GraphGenerator::seeded(seed).generate(&config)?)
}

/// Builds a `side × side` grid with weights drawn from `1..=10`.
///
/// Node `row * side + col` links to its right and lower neighbours.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] if the edge list is rejected.
pub fn grid_graph(params: &GridBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let side = params.side;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(params.node_count().saturating_mul(2));
    for row in 0..side {
        for col in 0..side {
            let node = row * side + col;
            if col + 1 < side {
                edges.push((node, node + 1, rng.gen_range(GRID_WEIGHTS)));
            }
            if row + 1 < side {
                edges.push((node, node + side, rng.gen_range(GRID_WEIGHTS)));
            }
        }
    }
    Ok(Graph::from_edges(params.node_count(), edges)?)
}

/// Draws `count` query endpoint pairs uniformly from `0..node_count`.
#[must_use]
pub fn query_pairs(node_count: usize, count: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    if node_count == 0 {
        return Vec::new();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                NodeId::new(rng.gen_range(0..node_count)),
                NodeId::new(rng.gen_range(0..node_count)),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 0)]
    #[case(2, 4)]
    #[case(10, 180)]
    fn grids_have_the_expected_shape(#[case] side: usize, #[case] edge_count: usize) {
        let graph = grid_graph(&GridBenchParams { side }, 3).expect("grid is simple");
        assert_eq!(graph.node_count(), side * side);
        assert_eq!(graph.edge_count(), edge_count);
        assert!(graph.is_connected());
        assert!(
            graph
                .edges()
                .iter()
                .all(|edge| GRID_WEIGHTS.contains(&edge.weight()))
        );
    }

    #[test]
    fn grid_corners_have_two_links() {
        let graph = grid_graph(&GridBenchParams { side: 4 }, 9).expect("grid is simple");
        for corner in [0, 3, 12, 15] {
            assert_eq!(graph.degree(NodeId::new(corner)), Some(2));
        }
        assert_eq!(graph.degree(NodeId::new(5)), Some(4));
    }

    #[rstest]
    #[case(3, 2, false)]
    #[case(20, 4, true)]
    fn generated_graphs_follow_their_parameters(
        #[case] node_count: usize,
        #[case] max_degree: usize,
        #[case] weighted: bool,
    ) {
        let params = GenerationBenchParams {
            node_count,
            max_degree,
            weighted,
        };
        let graph = generated_graph(&params, 42).expect("configuration can be spanned");
        assert_eq!(graph.node_count(), node_count);
        assert!(graph.nodes().iter().all(|node| node.degree() <= max_degree));
        let label = params.to_string();
        assert!(label.starts_with(&format!("n={node_count},max={max_degree},")));
    }

    #[test]
    fn out_of_range_parameters_are_setup_errors() {
        let params = GenerationBenchParams {
            node_count: 100,
            max_degree: 4,
            weighted: false,
        };
        assert!(matches!(
            generation_config(&params),
            Err(BenchSetupError::Config(_))
        ));
    }

    #[test]
    fn query_pairs_are_seeded_and_in_range() {
        let pairs = query_pairs(25, 64, 11);
        assert_eq!(pairs.len(), 64);
        assert!(
            pairs
                .iter()
                .all(|(from, to)| from.index() < 25 && to.index() < 25)
        );
        assert_eq!(pairs, query_pairs(25, 64, 11));
        assert!(query_pairs(0, 8, 11).is_empty());
    }
}
