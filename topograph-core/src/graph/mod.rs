//! Graph data model shared by the generator and the path engine.
//!
//! A [`Graph`] is an immutable snapshot: nodes are numbered `0..N`, edges are
//! undirected and stored in canonical `(smaller, larger)` order, and no pair
//! of nodes is joined more than once. Degrees are tallied while the graph is
//! assembled and frozen afterwards.

mod draft;
mod traversal;

use std::fmt;

use crate::error::GraphError;

pub(crate) use self::draft::GraphDraft;

/// Identifier of a node within one [`Graph`].
///
/// # Examples
/// ```
/// use topograph_core::NodeId;
///
/// let id = NodeId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw node index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canvas coordinates of a node. Only presentation layers read these.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Horizontal coordinate.
    pub x: u32,
    /// Vertical coordinate.
    pub y: u32,
}

/// A vertex of a [`Graph`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    id: NodeId,
    position: Position,
    degree: usize,
}

impl Node {
    pub(crate) const fn new(id: NodeId, position: Position) -> Self {
        Self {
            id,
            position,
            degree: 0,
        }
    }

    /// Returns the node identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> NodeId { self.id }

    /// Returns the canvas position assigned at creation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Position { self.position }

    /// Returns the number of edges incident to this node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn degree(&self) -> usize { self.degree }
}

/// An undirected weighted edge in canonical form (`source < target`).
///
/// # Examples
/// ```
/// use topograph_core::{Edge, NodeId};
///
/// let edge = Edge::new(NodeId::new(4), NodeId::new(1), 3);
/// assert_eq!(edge.source(), NodeId::new(1));
/// assert_eq!(edge.target(), NodeId::new(4));
/// assert!(edge.connects(NodeId::new(4), NodeId::new(1)));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: u32,
}

impl Edge {
    /// Creates an edge, ordering the endpoints canonically.
    #[must_use]
    pub fn new(left: NodeId, right: NodeId, weight: u32) -> Self {
        let (source, target) = canonical_pair(left, right);
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns `true` when this edge joins `left` and `right`, in either order.
    #[must_use]
    pub fn connects(&self, left: NodeId, right: NodeId) -> bool {
        canonical_pair(left, right) == (self.source, self.target)
    }

    /// Returns the endpoint opposite `node`, or `None` when `node` is not an endpoint.
    #[must_use]
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if node == self.source {
            Some(self.target)
        } else if node == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

pub(crate) fn canonical_pair(left: NodeId, right: NodeId) -> (NodeId, NodeId) {
    if left <= right {
        (left, right)
    } else {
        (right, left)
    }
}

/// A simple undirected weighted graph.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub(crate) const fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Builds a graph from an external edge list.
    ///
    /// Nodes are numbered `0..node_count` and placed at the origin. Each
    /// `(left, right, weight)` triple becomes one undirected edge.
    ///
    /// # Errors
    /// Returns [`GraphError`] when an edge is a self-loop, references a node
    /// outside `0..node_count`, repeats a pair already present, or carries a
    /// zero weight.
    ///
    /// # Examples
    /// ```
    /// use topograph_core::{Graph, NodeId};
    ///
    /// let graph = Graph::from_edges(3, [(0, 1, 2), (1, 2, 3)])?;
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.degree(NodeId::new(1)), Some(2));
    /// assert!(graph.is_connected());
    /// # Ok::<(), topograph_core::GraphError>(())
    /// ```
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, u32)>,
    {
        let mut draft = GraphDraft::with_nodes(
            (0..node_count).map(|index| Node::new(NodeId::new(index), Position::default())),
        );
        for (left, right, weight) in edges {
            draft.insert_checked(NodeId::new(left), NodeId::new(right), weight)?;
        }
        Ok(draft.finish())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the nodes ordered by id.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the edges in creation order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns `true` when `id` names a node of this graph.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Returns the degree of `id`, or `None` for an unknown node.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(Node::degree)
    }

    /// Returns the edge joining `left` and `right`, if any.
    #[must_use]
    pub fn edge_between(&self, left: NodeId, right: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.connects(left, right))
    }

    /// Iterates over the neighbours of `id` together with the joining weight.
    pub fn neighbours(&self, id: NodeId) -> impl Iterator<Item = (NodeId, u32)> + '_ {
        self.edges
            .iter()
            .filter_map(move |edge| edge.opposite(id).map(|other| (other, edge.weight())))
    }

    /// Returns the sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight())).sum()
    }

    /// Returns `true` when every node is reachable from node 0.
    ///
    /// Empty graphs count as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        traversal::is_connected(self.nodes.len(), &self.edges)
    }
}
