//! Symmetric adjacency view derived from a [`Graph`].

use std::collections::BTreeMap;

use crate::graph::{Graph, NodeId};

/// Node id → (neighbour id → edge weight), built once per query batch.
///
/// Each undirected edge `(a, b, w)` appears as both `a → b` and `b → a`.
/// Neighbour maps iterate in ascending id order.
///
/// # Examples
/// ```
/// use topograph_core::{Graph, NodeId, adjacency};
///
/// let graph = Graph::from_edges(3, [(0, 1, 4), (1, 2, 6)])?;
/// let view = adjacency(&graph);
/// assert_eq!(view.weight(NodeId::new(1), NodeId::new(0)), Some(4));
/// assert_eq!(view.weight(NodeId::new(0), NodeId::new(2)), None);
/// # Ok::<(), topograph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Adjacency {
    neighbours: Vec<BTreeMap<NodeId, u32>>,
}

impl Adjacency {
    /// Returns the number of nodes covered by the view.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns the neighbour map of `node`.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> Option<&BTreeMap<NodeId, u32>> {
        self.neighbours.get(node.index())
    }

    /// Returns the weight of the edge between `from` and `to`.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.neighbours(from)
            .and_then(|map| map.get(&to))
            .copied()
    }
}

/// Builds the symmetric adjacency view of `graph`.
#[must_use]
pub fn adjacency(graph: &Graph) -> Adjacency {
    let mut neighbours = vec![BTreeMap::new(); graph.node_count()];
    for edge in graph.edges() {
        if let Some(map) = neighbours.get_mut(edge.source().index()) {
            map.insert(edge.target(), edge.weight());
        }
        if let Some(map) = neighbours.get_mut(edge.target().index()) {
            map.insert(edge.source(), edge.weight());
        }
    }
    Adjacency { neighbours }
}
