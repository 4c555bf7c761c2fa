//! Unit tests for random graph generation.

use std::collections::HashSet;

use rand::rngs::mock::StepRng;
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

use topograph_test_support::tracing::RecordingLayer;

use crate::{
    config::{GenerationConfig, WeightRange},
    error::{ConfigError, GenerationError},
    graph::{Graph, NodeId},
    test_utils::assert_generated_invariants,
};

use super::{CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH, GraphGenerator, MAX_GENERATION_ATTEMPTS};

fn generate(seed: u64, config: &GenerationConfig) -> Graph {
    GraphGenerator::seeded(seed)
        .generate(config)
        .expect("valid configuration must generate")
}

#[rstest]
#[case::smallest(3, 1, 2)]
#[case::default_shape(5, 1, 4)]
#[case::sparse(12, 1, 2)]
#[case::capped_three(15, 2, 3)]
#[case::largest(20, 4, 4)]
fn generated_graphs_satisfy_structural_invariants(
    #[case] node_count: usize,
    #[case] min_degree: usize,
    #[case] max_degree: usize,
    #[values(0, 1, 42, 999, 0xDEAD_BEEF)] seed: u64,
) {
    let config = GenerationConfig::new(node_count, min_degree, max_degree).expect("valid config");
    let graph = generate(seed, &config);
    assert_generated_invariants(&graph, &config);
}

#[test]
fn same_seed_reproduces_the_same_graph() {
    let config = GenerationConfig::default()
        .with_node_count(14)
        .and_then(|config| config.with_degree_bounds(1, 3))
        .expect("valid config")
        .with_weights(WeightRange::new(1, 9).expect("valid range"));
    assert_eq!(generate(31, &config), generate(31, &config));
}

#[test]
fn unweighted_edges_all_weigh_one() {
    let graph = generate(5, &GenerationConfig::new(10, 1, 4).expect("valid config"));
    assert!(graph.edges().iter().all(|edge| edge.weight() == 1));
}

#[rstest]
#[case(1, 1)]
#[case(2, 9)]
#[case(10, 12)]
fn weighted_edges_stay_within_range(#[case] min: u32, #[case] max: u32) {
    let range = WeightRange::new(min, max).expect("valid range");
    let config = GenerationConfig::new(20, 1, 4)
        .expect("valid config")
        .with_weights(range);
    for seed in 0..20 {
        let graph = generate(seed, &config);
        assert!(graph.edges().iter().all(|edge| range.contains(edge.weight())));
    }
}

#[test]
fn positions_fall_inside_the_padded_canvas() {
    let graph = generate(77, &GenerationConfig::new(20, 1, 4).expect("valid config"));
    for node in graph.nodes() {
        let position = node.position();
        assert!((CANVAS_PADDING..=CANVAS_WIDTH - 2 * CANVAS_PADDING).contains(&position.x));
        assert!((CANVAS_PADDING..=CANVAS_HEIGHT - 2 * CANVAS_PADDING).contains(&position.y));
    }
}

#[test]
fn min_degree_is_advisory() {
    // Three nodes can never give any node four links, yet generation succeeds.
    let config = GenerationConfig::new(3, 4, 4).expect("valid config");
    let graph = generate(11, &config);
    assert!(graph.is_connected());
    assert!(graph.nodes().iter().all(|node| node.degree() < config.min_degree()));
}

#[test]
fn degree_cap_of_one_exhausts_retries() {
    let config = GenerationConfig::new(3, 1, 1).expect("config is structurally valid");
    let err = GraphGenerator::seeded(3)
        .generate(&config)
        .expect_err("a cap of one cannot span three nodes");
    assert_eq!(
        err,
        GenerationError::RetryLimitExceeded {
            attempts: MAX_GENERATION_ATTEMPTS
        }
    );
}

#[test]
fn invalid_config_is_rejected_before_generation() {
    let config = GenerationConfig::unchecked(2, 1, 4);
    let err = GraphGenerator::seeded(0)
        .generate(&config)
        .expect_err("two nodes is below the supported range");
    assert!(matches!(
        err,
        GenerationError::InvalidConfig(ConfigError::NodeCountOutOfRange { got: 2, .. })
    ));
}

#[test]
fn zero_random_source_builds_a_star_around_node_zero() {
    // Every draw picks the lowest candidate: each node attaches to node 0 and
    // densification immediately samples node 0 again, which is rejected.
    let config = GenerationConfig::new(4, 1, 4).expect("valid config");
    let graph = GraphGenerator::new(StepRng::new(0, 0))
        .generate(&config)
        .expect("star graph is connected");
    let pairs: HashSet<(usize, usize)> = graph
        .edges()
        .iter()
        .map(|edge| (edge.source().index(), edge.target().index()))
        .collect();
    assert_eq!(pairs, HashSet::from([(0, 1), (0, 2), (0, 3)]));
    assert_eq!(graph.degree(NodeId::new(0)), Some(3));
}

#[test]
fn cap_of_two_never_needs_a_retry() {
    let config = GenerationConfig::new(20, 1, 2).expect("valid config");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || {
        for seed in 0..25 {
            let graph = generate(seed, &config);
            assert_generated_invariants(&graph, &config);
        }
    });
    let spans = layer.spans();
    assert_eq!(spans.len(), 25);
    for span in &spans {
        assert_eq!(span.name, "core.generate");
        assert_eq!(span.fields.get("attempts").map(String::as_str), Some("1"));
        assert_eq!(span.fields.get("node_count").map(String::as_str), Some("20"));
    }
    assert!(
        layer
            .events()
            .iter()
            .all(|event| event.level != tracing::Level::WARN)
    );
}

#[test]
fn failed_attempts_are_logged() {
    let config = GenerationConfig::new(4, 1, 1).expect("config is structurally valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, || {
        GraphGenerator::seeded(9).generate(&config)
    });
    assert!(
        matches!(
            &result,
            Err(GenerationError::RetryLimitExceeded { attempts }) if *attempts == MAX_GENERATION_ATTEMPTS
        ),
        "unexpected result: {result:?}"
    );
    let warnings = layer
        .events()
        .into_iter()
        .filter(|event| event.level == tracing::Level::WARN)
        .count();
    assert_eq!(warnings, MAX_GENERATION_ATTEMPTS);
}
