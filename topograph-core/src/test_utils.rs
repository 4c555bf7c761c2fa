//! Shared helpers for unit tests across modules.

use std::collections::HashSet;

use crate::{config::GenerationConfig, graph::Graph};

/// Asserts every guarantee `GraphGenerator::generate` makes about its output.
pub(crate) fn assert_generated_invariants(graph: &Graph, config: &GenerationConfig) {
    assert_eq!(graph.node_count(), config.node_count());
    assert!(graph.is_connected(), "generated graph must be connected");

    let mut pairs = HashSet::new();
    let mut incident = vec![0_usize; graph.node_count()];
    for edge in graph.edges() {
        assert_ne!(edge.source(), edge.target(), "self-loop {edge:?}");
        assert!(
            pairs.insert((edge.source(), edge.target())),
            "duplicate edge {edge:?}"
        );
        assert!(edge.weight() >= 1);
        incident[edge.source().index()] += 1;
        incident[edge.target().index()] += 1;
    }

    for (node, expected) in graph.nodes().iter().zip(incident) {
        assert_eq!(node.degree(), expected, "degree tally for node {}", node.id());
        assert!(
            node.degree() <= config.max_degree(),
            "node {} exceeds the degree cap",
            node.id()
        );
    }
}
