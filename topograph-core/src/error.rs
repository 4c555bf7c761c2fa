//! Error types for the topograph core library.
//!
//! Each error enum has a companion `…Code` enum whose string form is stable,
//! so callers can log or match failures without parsing messages.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A [`crate::GenerationConfig`] field violated its domain.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// Node count fell outside the supported range.
    #[error("node count must be between {min} and {max} (got {got})")]
    NodeCountOutOfRange {
        /// The rejected node count.
        got: usize,
        /// Smallest accepted node count.
        min: usize,
        /// Largest accepted node count.
        max: usize,
    },
    /// Minimum degree was below one.
    #[error("min_degree must be at least {min} (got {got})")]
    MinDegreeTooSmall {
        /// The rejected minimum degree.
        got: usize,
        /// Smallest accepted minimum degree.
        min: usize,
    },
    /// Maximum degree exceeded the supported cap.
    #[error("max_degree must be at most {max} (got {got})")]
    MaxDegreeTooLarge {
        /// The rejected maximum degree.
        got: usize,
        /// Largest accepted maximum degree.
        max: usize,
    },
    /// Maximum degree was smaller than the minimum degree.
    #[error("max_degree ({max_degree}) must be >= min_degree ({min_degree})")]
    DegreeBoundsInverted {
        /// Configured minimum degree.
        min_degree: usize,
        /// Configured maximum degree.
        max_degree: usize,
    },
    /// A weight bound was zero.
    #[error("edge weights must be at least 1 (got {got})")]
    WeightBelowOne {
        /// The rejected weight bound.
        got: u32,
    },
    /// The lower weight bound exceeded the upper bound.
    #[error("weight range is inverted: min {min} > max {max}")]
    WeightRangeInverted {
        /// Lower bound supplied by the caller.
        min: u32,
        /// Upper bound supplied by the caller.
        max: u32,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConfigError`] variants.
    enum ConfigErrorCode for ConfigError {
        /// Node count fell outside the supported range.
        NodeCountOutOfRange => NodeCountOutOfRange { .. } => "CONFIG_NODE_COUNT_OUT_OF_RANGE",
        /// Minimum degree was below one.
        MinDegreeTooSmall => MinDegreeTooSmall { .. } => "CONFIG_MIN_DEGREE_TOO_SMALL",
        /// Maximum degree exceeded the supported cap.
        MaxDegreeTooLarge => MaxDegreeTooLarge { .. } => "CONFIG_MAX_DEGREE_TOO_LARGE",
        /// Maximum degree was smaller than the minimum degree.
        DegreeBoundsInverted => DegreeBoundsInverted { .. } => "CONFIG_DEGREE_BOUNDS_INVERTED",
        /// A weight bound was zero.
        WeightBelowOne => WeightBelowOne { .. } => "CONFIG_WEIGHT_BELOW_ONE",
        /// The lower weight bound exceeded the upper bound.
        WeightRangeInverted => WeightRangeInverted { .. } => "CONFIG_WEIGHT_RANGE_INVERTED",
    }
}

/// Error returned by [`crate::GraphGenerator::generate`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// The configuration failed validation; no attempt was made.
    #[error("invalid generation config: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// No connected graph was produced within the attempt ceiling.
    #[error("failed to produce a connected graph after {attempts} attempts")]
    RetryLimitExceeded {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// The configuration failed validation.
        InvalidConfig => InvalidConfig(..) => "GENERATION_INVALID_CONFIG",
        /// No connected graph was produced within the attempt ceiling.
        RetryLimitExceeded => RetryLimitExceeded { .. } => "GENERATION_RETRY_LIMIT_EXCEEDED",
    }
}

impl GenerationError {
    /// Retrieve the inner [`ConfigErrorCode`] when the configuration was rejected.
    #[must_use]
    pub const fn config_code(&self) -> Option<ConfigErrorCode> {
        match self {
            Self::InvalidConfig(error) => Some(error.code()),
            Self::RetryLimitExceeded { .. } => None,
        }
    }
}

/// An externally supplied edge list did not describe a simple weighted graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge joined a node to itself.
    #[error("edge ({node}, {node}) is a self-loop")]
    SelfLoop {
        /// The node on both ends of the edge.
        node: NodeId,
    },
    /// The same unordered pair appeared more than once.
    #[error("edge ({left}, {right}) appears more than once")]
    DuplicateEdge {
        /// Smaller endpoint of the repeated pair.
        left: NodeId,
        /// Larger endpoint of the repeated pair.
        right: NodeId,
    },
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    UnknownNode {
        /// The invalid node id referenced by an edge.
        node: NodeId,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge carried a zero weight.
    #[error("edge ({left}, {right}) has zero weight")]
    ZeroWeight {
        /// Smaller endpoint of the edge.
        left: NodeId,
        /// Larger endpoint of the edge.
        right: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The same unordered pair appeared more than once.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
        /// An edge referenced a node id that is not present in the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// An edge carried a zero weight.
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
    }
}

/// Error returned by [`crate::PathEngine`] queries.
///
/// An unreachable destination is not an error; it is reported as
/// [`crate::Distance::Unreachable`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PathError {
    /// A query named a node that is not part of the graph.
    #[error("node {node} is not in the graph (node_count {node_count})")]
    UnknownNode {
        /// The requested node id.
        node: NodeId,
        /// The number of nodes in the graph.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PathError`] variants.
    enum PathErrorCode for PathError {
        /// A query named a node that is not part of the graph.
        UnknownNode => UnknownNode { .. } => "PATH_UNKNOWN_NODE",
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        ConfigError::NodeCountOutOfRange { got: 2, min: 3, max: 20 },
        "CONFIG_NODE_COUNT_OUT_OF_RANGE"
    )]
    #[case(
        ConfigError::DegreeBoundsInverted { min_degree: 3, max_degree: 2 },
        "CONFIG_DEGREE_BOUNDS_INVERTED"
    )]
    #[case(ConfigError::WeightBelowOne { got: 0 }, "CONFIG_WEIGHT_BELOW_ONE")]
    fn config_codes_are_stable(#[case] error: ConfigError, #[case] expected: &str) {
        assert_eq!(error.code().as_str(), expected);
        assert_eq!(error.code().to_string(), expected);
    }

    #[test]
    fn generation_error_exposes_inner_config_code() {
        let error = GenerationError::from(ConfigError::MaxDegreeTooLarge { got: 5, max: 4 });
        assert_eq!(error.code(), GenerationErrorCode::InvalidConfig);
        assert_eq!(error.config_code(), Some(ConfigErrorCode::MaxDegreeTooLarge));

        let exhausted = GenerationError::RetryLimitExceeded { attempts: 50 };
        assert_eq!(exhausted.code().as_str(), "GENERATION_RETRY_LIMIT_EXCEEDED");
        assert_eq!(exhausted.config_code(), None);
    }

    #[test]
    fn messages_name_the_offending_values() {
        let error = GraphError::UnknownNode {
            node: NodeId::new(7),
            node_count: 3,
        };
        assert_eq!(error.to_string(), "edge references node 7, but node_count is 3");
        assert_eq!(error.code(), GraphErrorCode::UnknownNode);
    }
}
