//! Linear-scan Dijkstra over an [`Adjacency`] view.
//!
//! Node selection scans every unfinalized node and takes the smallest
//! tentative distance, preferring the lowest node id on ties, so one search
//! costs O(N²) regardless of edge count.

use crate::graph::NodeId;

use super::{Distance, adjacency::Adjacency};

/// Tentative distances and predecessor links left behind by one search.
#[derive(Debug)]
pub(super) struct SearchState {
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
}

impl SearchState {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut distances = vec![Distance::Unreachable; node_count];
        if let Some(slot) = distances.get_mut(source.index()) {
            *slot = Distance::ZERO;
        }
        Self {
            distances,
            predecessors: vec![None; node_count],
        }
    }

    pub(super) fn distance(&self, node: NodeId) -> Distance {
        self.distances
            .get(node.index())
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    pub(super) fn distances(&self) -> &[Distance] {
        &self.distances
    }

    fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    fn relax(&mut self, node: NodeId, distance: Distance, via: NodeId) {
        if let Some(slot) = self.distances.get_mut(node.index()) {
            *slot = distance;
        }
        if let Some(slot) = self.predecessors.get_mut(node.index()) {
            *slot = Some(via);
        }
    }

    /// Walks predecessor links back from `destination`.
    ///
    /// Returns `None` when the destination was never reached.
    pub(super) fn path_to(&self, source: NodeId, destination: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(destination).is_finite() {
            return None;
        }
        let mut path = vec![destination];
        let mut current = destination;
        while current != source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra from `source`, stopping early once `stop_at` is finalized.
///
/// With `stop_at = None` the search settles every reachable node.
pub(super) fn search(
    adjacency: &Adjacency,
    source: NodeId,
    stop_at: Option<NodeId>,
) -> SearchState {
    let node_count = adjacency.node_count();
    let mut state = SearchState::new(node_count, source);
    let mut finalized = vec![false; node_count];

    while let Some(current) = next_unfinalized(&state.distances, &finalized) {
        if let Some(flag) = finalized.get_mut(current.index()) {
            *flag = true;
        }
        if stop_at == Some(current) {
            break;
        }

        let base = state.distance(current);
        let Some(neighbours) = adjacency.neighbours(current) else {
            continue;
        };
        for (&neighbour, &weight) in neighbours {
            if finalized.get(neighbour.index()).copied().unwrap_or(true) {
                continue;
            }
            let candidate = base.extend(weight);
            if candidate < state.distance(neighbour) {
                state.relax(neighbour, candidate, current);
            }
        }
    }
    state
}

/// Picks the unfinalized node with the smallest finite distance, lowest id first.
fn next_unfinalized(distances: &[Distance], finalized: &[bool]) -> Option<NodeId> {
    distances
        .iter()
        .zip(finalized)
        .enumerate()
        .filter(|(_, (distance, done))| !**done && distance.is_finite())
        .min_by_key(|&(index, (distance, _))| (*distance, index))
        .map(|(index, _)| NodeId::new(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_prefers_lowest_id_on_ties() {
        let distances = [
            Distance::Finite(3),
            Distance::Finite(2),
            Distance::Unreachable,
            Distance::Finite(2),
        ];
        assert_eq!(
            next_unfinalized(&distances, &[false; 4]),
            Some(NodeId::new(1))
        );
        assert_eq!(
            next_unfinalized(&distances, &[false, true, false, false]),
            Some(NodeId::new(3))
        );
    }

    #[test]
    fn selection_stops_when_only_unreachable_nodes_remain() {
        let distances = [Distance::Finite(0), Distance::Unreachable];
        assert_eq!(next_unfinalized(&distances, &[true, false]), None);
    }
}
