//! Unit tests for generation config validation and field updates.

use rstest::rstest;

use crate::error::ConfigError;

use super::{GenerationConfig, WeightRange};

#[test]
fn default_matches_the_interactive_tool() {
    let config = GenerationConfig::default();
    assert_eq!(config.node_count(), 5);
    assert_eq!((config.min_degree(), config.max_degree()), (1, 4));
    assert!(!config.weighted());
    assert_eq!(config.weight_range(), WeightRange::new(1, 10).expect("valid range"));
    config.validate().expect("default config must be valid");
}

#[rstest]
#[case::lower_edge(3)]
#[case::upper_edge(20)]
fn node_count_accepts_bounds(#[case] node_count: usize) {
    let config = GenerationConfig::default()
        .with_node_count(node_count)
        .expect("bounds are inclusive");
    assert_eq!(config.node_count(), node_count);
}

#[rstest]
#[case::too_small(2)]
#[case::too_large(21)]
#[case::zero(0)]
fn node_count_rejects_out_of_range(#[case] node_count: usize) {
    let err = GenerationConfig::default()
        .with_node_count(node_count)
        .expect_err("out of range must fail");
    assert_eq!(
        err,
        ConfigError::NodeCountOutOfRange {
            got: node_count,
            min: 3,
            max: 20
        }
    );
}

#[rstest]
#[case::min_zero(0, 2, ConfigError::MinDegreeTooSmall { got: 0, min: 1 })]
#[case::max_over_cap(1, 5, ConfigError::MaxDegreeTooLarge { got: 5, max: 4 })]
#[case::inverted(3, 2, ConfigError::DegreeBoundsInverted { min_degree: 3, max_degree: 2 })]
fn degree_bounds_are_checked(
    #[case] min_degree: usize,
    #[case] max_degree: usize,
    #[case] expected: ConfigError,
) {
    let err = GenerationConfig::new(6, min_degree, max_degree).expect_err("bounds must fail");
    assert_eq!(err, expected);
}

#[test]
fn single_field_updates_leave_the_original_untouched() {
    let original = GenerationConfig::default();
    let updated = original.with_max_degree(2).expect("2 >= min_degree 1");
    assert_eq!(original.max_degree(), 4);
    assert_eq!(updated.max_degree(), 2);
    assert_eq!(updated.node_count(), original.node_count());
}

#[test]
fn raising_min_above_max_is_rejected_until_both_move() {
    let config = GenerationConfig::new(6, 1, 2).expect("valid config");
    assert!(matches!(
        config.with_min_degree(3),
        Err(ConfigError::DegreeBoundsInverted { .. })
    ));
    let moved = config
        .with_degree_bounds(3, 4)
        .expect("moving both bounds together is valid");
    assert_eq!((moved.min_degree(), moved.max_degree()), (3, 4));
}

#[test]
fn toggling_weighting_keeps_the_range() {
    let range = WeightRange::new(3, 7).expect("valid range");
    let weighted = GenerationConfig::default().with_weights(range);
    let unweighted = weighted.with_weighting(false);
    assert!(!unweighted.weighted());
    assert_eq!(unweighted.weight_range(), range);
    assert!(unweighted.with_weighting(true).weighted());
}

#[rstest]
#[case::zero_min(0, 5, ConfigError::WeightBelowOne { got: 0 })]
#[case::zero_max(1, 0, ConfigError::WeightBelowOne { got: 0 })]
#[case::inverted(6, 2, ConfigError::WeightRangeInverted { min: 6, max: 2 })]
fn weight_range_rejects_invalid_bounds(
    #[case] min: u32,
    #[case] max: u32,
    #[case] expected: ConfigError,
) {
    assert_eq!(WeightRange::new(min, max), Err(expected.clone()));
    let built = GenerationConfig::builder()
        .with_weight_bounds(min, max)
        .build();
    assert_eq!(built, Err(expected));
}

#[test]
fn weight_range_contains_both_ends() {
    let range = WeightRange::new(2, 4).expect("valid range");
    assert!(range.contains(2));
    assert!(range.contains(4));
    assert!(!range.contains(1));
    assert!(!range.contains(5));
    assert_eq!(range.as_range(), 2..=4);
}

#[test]
fn builder_reports_node_count_before_weights() {
    let err = GenerationConfig::builder()
        .with_node_count(1)
        .with_weight_bounds(0, 0)
        .build()
        .expect_err("both fields are invalid");
    assert!(matches!(err, ConfigError::NodeCountOutOfRange { got: 1, .. }));
}

#[test]
fn builder_round_trips_every_field() {
    let config = GenerationConfig::builder()
        .with_node_count(20)
        .with_min_degree(2)
        .with_max_degree(4)
        .with_weighting(true)
        .with_weight_bounds(5, 5)
        .build()
        .expect("valid builder");
    assert_eq!(config.node_count(), 20);
    assert_eq!((config.min_degree(), config.max_degree()), (2, 4));
    assert!(config.weighted());
    assert_eq!(config.weight_range().as_range(), 5..=5);
}
