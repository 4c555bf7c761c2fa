//! Shortest-path and diameter queries.
//!
//! [`PathEngine`] borrows a [`Graph`] read-only and derives its [`Adjacency`]
//! view once, so a batch of queries shares it. Queries are pure: running
//! them any number of times yields identical results and never touches the
//! graph.
//!
//! # Tie-breaking
//!
//! When several unfinalized nodes share the minimum tentative distance the
//! lowest node id is settled first. Among several equal-length routes the
//! reported path is therefore the one discovered through lower-numbered
//! nodes, and it is stable across runs.

mod adjacency;
mod dijkstra;

use std::fmt;

use tracing::{debug, instrument};

use crate::{
    error::PathError,
    graph::{Graph, NodeId},
};

pub use self::adjacency::{Adjacency, adjacency};

/// Length of a shortest path, or the sentinel for "no path".
///
/// `Unreachable` orders after every finite distance.
///
/// # Examples
/// ```
/// use topograph_core::Distance;
///
/// assert!(Distance::Finite(9) < Distance::Unreachable);
/// assert_eq!(Distance::Finite(4).finite(), Some(4));
/// assert_eq!(Distance::Unreachable.to_string(), "unreachable");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Distance {
    /// Sum of the traversed edge weights.
    Finite(u64),
    /// No path joins the two nodes.
    Unreachable,
}

impl Distance {
    /// Distance from a node to itself.
    pub const ZERO: Self = Self::Finite(0);

    /// Returns `true` for a finite distance.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite value, if any.
    #[must_use]
    pub const fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Unreachable => None,
        }
    }

    /// Returns the distance after traversing one more edge of `weight`.
    #[must_use]
    pub fn extend(self, weight: u32) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(value.saturating_add(u64::from(weight))),
            Self::Unreachable => Self::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Outcome of a single-pair shortest-path query.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPath {
    distance: Distance,
    path: Vec<NodeId>,
}

impl ShortestPath {
    /// Returns the total weight of the path.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distance(&self) -> Distance { self.distance }

    /// Returns the node ids from source to destination inclusive.
    ///
    /// When the destination is unreachable this holds only the two endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[NodeId] { &self.path }

    /// Returns `true` when the destination was reached.
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Iterates over the consecutive node pairs the path traverses.
    ///
    /// Yields nothing for an unreachable destination.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        let traversed: &[NodeId] = if self.is_reachable() { &self.path } else { &[] };
        traversed.windows(2).filter_map(|pair| match *pair {
            [from, to] => Some((from, to)),
            _ => None,
        })
    }

    /// Returns `true` when the path traverses the edge between `left` and
    /// `right`, in either direction.
    #[must_use]
    pub fn uses_edge(&self, left: NodeId, right: NodeId) -> bool {
        self.hops()
            .any(|(from, to)| (from, to) == (left, right) || (from, to) == (right, left))
    }
}

/// Answers shortest-path and diameter queries over one [`Graph`].
///
/// # Examples
/// ```
/// use topograph_core::{Distance, Graph, NodeId, PathEngine};
///
/// let graph = Graph::from_edges(3, [(0, 1, 2), (1, 2, 3)])?;
/// let engine = PathEngine::new(&graph);
/// let route = engine.shortest_path(NodeId::new(0), NodeId::new(2))?;
/// assert_eq!(route.distance(), Distance::Finite(5));
/// assert_eq!(route.path(), &[NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
/// assert_eq!(engine.diameter(), 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct PathEngine<'g> {
    graph: &'g Graph,
    adjacency: Adjacency,
}

impl<'g> PathEngine<'g> {
    /// Derives the adjacency view of `graph`.
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            adjacency: adjacency(graph),
        }
    }

    /// Returns the graph being queried.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &'g Graph { self.graph }

    /// Returns the adjacency view shared by every query.
    #[must_use]
    #[rustfmt::skip]
    pub const fn adjacency(&self) -> &Adjacency { &self.adjacency }

    /// Finds a minimum-weight path from `source` to `destination`.
    ///
    /// An unreachable destination yields [`Distance::Unreachable`] and a path
    /// holding only the two endpoints.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownNode`] when either id is not in the graph.
    #[instrument(
        name = "core.shortest_path",
        level = "debug",
        err,
        skip(self, source, destination),
        fields(source = %source, destination = %destination),
    )]
    pub fn shortest_path(
        &self,
        source: NodeId,
        destination: NodeId,
    ) -> Result<ShortestPath, PathError> {
        self.ensure_known(source)?;
        self.ensure_known(destination)?;

        let state = dijkstra::search(&self.adjacency, source, Some(destination));
        let result = match state.path_to(source, destination) {
            Some(path) => ShortestPath {
                distance: state.distance(destination),
                path,
            },
            None => ShortestPath {
                distance: Distance::Unreachable,
                path: vec![source, destination],
            },
        };
        debug!(
            distance = %result.distance,
            hops = result.path.len().saturating_sub(1),
            "path resolved"
        );
        Ok(result)
    }

    /// Returns the greatest finite distance from `node` to any other node.
    ///
    /// Unreachable nodes are ignored; an isolated node has eccentricity 0.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownNode`] when `node` is not in the graph.
    pub fn eccentricity(&self, node: NodeId) -> Result<u64, PathError> {
        self.ensure_known(node)?;
        let state = dijkstra::search(&self.adjacency, node, None);
        Ok(max_finite(state.distances().iter().copied()))
    }

    /// Returns the greatest finite shortest-path distance over all node pairs.
    ///
    /// Unreachable pairs are skipped. Graphs with fewer than two nodes have
    /// diameter 0.
    #[instrument(
        name = "core.diameter",
        skip(self),
        fields(node_count = self.graph.node_count()),
    )]
    pub fn diameter(&self) -> u64 {
        let node_count = self.adjacency.node_count();
        let diameter = (0..node_count)
            .map(|index| {
                // One full search settles every pair (index, later) at once.
                let state = dijkstra::search(&self.adjacency, NodeId::new(index), None);
                max_finite(state.distances().iter().skip(index + 1).copied())
            })
            .max()
            .unwrap_or(0);
        debug!(diameter, "diameter computed");
        diameter
    }

    fn ensure_known(&self, node: NodeId) -> Result<(), PathError> {
        if self.graph.contains(node) {
            Ok(())
        } else {
            Err(PathError::UnknownNode {
                node,
                node_count: self.graph.node_count(),
            })
        }
    }
}

fn max_finite(distances: impl Iterator<Item = Distance>) -> u64 {
    distances.filter_map(Distance::finite).max().unwrap_or(0)
}

/// Finds a shortest path in `graph` without keeping the adjacency view.
///
/// # Errors
/// Returns [`PathError::UnknownNode`] when either id is not in the graph.
pub fn shortest_path(
    graph: &Graph,
    source: NodeId,
    destination: NodeId,
) -> Result<ShortestPath, PathError> {
    PathEngine::new(graph).shortest_path(source, destination)
}

/// Computes the diameter of `graph`.
#[must_use]
pub fn diameter(graph: &Graph) -> u64 {
    PathEngine::new(graph).diameter()
}
