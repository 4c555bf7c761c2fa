//! Topograph core library.
//!
//! Generates random connected graphs under node-count and degree bounds and
//! answers shortest-path and diameter queries over them.
//!
//! ```
//! use topograph_core::{GenerationConfig, GraphGenerator, NodeId, PathEngine};
//!
//! let config = GenerationConfig::default().with_node_count(10)?;
//! let graph = GraphGenerator::seeded(42).generate(&config)?;
//! let engine = PathEngine::new(&graph);
//! let route = engine.shortest_path(NodeId::new(0), NodeId::new(9))?;
//! assert!(route.is_reachable());
//! assert!(engine.diameter() >= 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
mod generator;
mod graph;
mod path;
#[cfg(test)]
mod test_utils;

pub use crate::{
    config::{
        GenerationConfig, GenerationConfigBuilder, MAX_DEGREE_CAP, MIN_DEGREE_FLOOR,
        NODE_COUNT_RANGE, WeightRange,
    },
    error::{
        ConfigError, ConfigErrorCode, GenerationError, GenerationErrorCode, GraphError,
        GraphErrorCode, PathError, PathErrorCode,
    },
    generator::{
        CANVAS_HEIGHT, CANVAS_PADDING, CANVAS_WIDTH, GraphGenerator, MAX_GENERATION_ATTEMPTS,
    },
    graph::{Edge, Graph, Node, NodeId, Position},
    path::{Adjacency, Distance, PathEngine, ShortestPath, adjacency, diameter, shortest_path},
};
