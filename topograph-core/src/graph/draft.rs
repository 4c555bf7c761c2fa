//! Mutable staging area used while a [`Graph`] is assembled.
//!
//! Degrees and the set of occupied pairs live here until [`GraphDraft::finish`]
//! freezes them into an immutable graph. Nothing outside the crate can observe
//! a draft, so a failed generation attempt never leaks partial state.

use std::collections::HashSet;

use crate::error::GraphError;

use super::{Edge, Graph, Node, NodeId, canonical_pair, traversal};

#[derive(Debug, Default)]
pub(crate) struct GraphDraft {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    pairs: HashSet<(NodeId, NodeId)>,
}

impl GraphDraft {
    pub(crate) fn with_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
            ..Self::default()
        }
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn degree(&self, id: NodeId) -> usize {
        self.nodes.get(id.index()).map_or(0, Node::degree)
    }

    pub(crate) fn has_edge(&self, left: NodeId, right: NodeId) -> bool {
        self.pairs.contains(&canonical_pair(left, right))
    }

    /// Adds an edge after validating it against the simple-graph rules.
    pub(crate) fn insert_checked(
        &mut self,
        left: NodeId,
        right: NodeId,
        weight: u32,
    ) -> Result<(), GraphError> {
        let node_count = self.nodes.len();
        for node in [left, right] {
            if node.index() >= node_count {
                return Err(GraphError::UnknownNode { node, node_count });
            }
        }
        if left == right {
            return Err(GraphError::SelfLoop { node: left });
        }
        let (source, target) = canonical_pair(left, right);
        if weight == 0 {
            return Err(GraphError::ZeroWeight {
                left: source,
                right: target,
            });
        }
        if self.has_edge(source, target) {
            return Err(GraphError::DuplicateEdge {
                left: source,
                right: target,
            });
        }
        self.link(source, target, weight);
        Ok(())
    }

    /// Adds an edge the caller has already vetted and bumps both degrees.
    pub(crate) fn link(&mut self, left: NodeId, right: NodeId, weight: u32) {
        let edge = Edge::new(left, right, weight);
        if !self.pairs.insert((edge.source(), edge.target())) {
            return;
        }
        for endpoint in [edge.source(), edge.target()] {
            if let Some(node) = self.nodes.get_mut(endpoint.index()) {
                node.degree += 1;
            }
        }
        self.edges.push(edge);
    }

    pub(crate) fn is_connected(&self) -> bool {
        traversal::is_connected(self.nodes.len(), &self.edges)
    }

    pub(crate) fn finish(self) -> Graph {
        Graph::from_parts(self.nodes, self.edges)
    }
}
