//! Connectivity checks over an undirected edge list.
//!
//! The traversal keeps its own stack instead of recursing so the walk depth
//! never depends on the graph's shape.

use super::Edge;

/// Marks every node reachable from `start`.
///
/// Edges with an endpoint outside `0..node_count` are ignored.
pub(super) fn reachable_from(node_count: usize, edges: &[Edge], start: usize) -> Vec<bool> {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for edge in edges {
        let (source, target) = (edge.source().index(), edge.target().index());
        if source >= node_count || target >= node_count {
            continue;
        }
        if let Some(list) = adjacency.get_mut(source) {
            list.push(target);
        }
        if let Some(list) = adjacency.get_mut(target) {
            list.push(source);
        }
    }

    let mut visited = vec![false; node_count];
    let mut stack = Vec::with_capacity(node_count);
    if let Some(flag) = visited.get_mut(start) {
        *flag = true;
        stack.push(start);
    }

    while let Some(node) = stack.pop() {
        let Some(neighbours) = adjacency.get(node) else {
            continue;
        };
        for &neighbour in neighbours {
            if let Some(flag) = visited.get_mut(neighbour) {
                if !*flag {
                    *flag = true;
                    stack.push(neighbour);
                }
            }
        }
    }
    visited
}

/// Returns `true` when every node is reachable from node 0.
pub(super) fn is_connected(node_count: usize, edges: &[Edge]) -> bool {
    if node_count == 0 {
        return true;
    }
    reachable_from(node_count, edges, 0).into_iter().all(|seen| seen)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::graph::NodeId;

    fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
        pairs
            .iter()
            .map(|&(left, right)| Edge::new(NodeId::new(left), NodeId::new(right), 1))
            .collect()
    }

    #[rstest]
    #[case::empty(0, &[], true)]
    #[case::single(1, &[], true)]
    #[case::isolated_pair(2, &[], false)]
    #[case::chain(4, &[(0, 1), (1, 2), (2, 3)], true)]
    #[case::star(4, &[(0, 1), (0, 2), (0, 3)], true)]
    #[case::split(4, &[(0, 1), (2, 3)], false)]
    #[case::unreached_tail(3, &[(1, 2)], false)]
    fn detects_connectivity(
        #[case] node_count: usize,
        #[case] pairs: &[(usize, usize)],
        #[case] expected: bool,
    ) {
        assert_eq!(is_connected(node_count, &edges(pairs)), expected);
    }

    #[test]
    fn long_chain_does_not_exhaust_the_stack() {
        let node_count = 100_000;
        let chain: Vec<(usize, usize)> = (1..node_count).map(|i| (i - 1, i)).collect();
        assert!(is_connected(node_count, &edges(&chain)));
    }

    #[test]
    fn reachable_from_marks_only_the_start_component() {
        let visited = reachable_from(5, &edges(&[(0, 1), (3, 4)]), 3);
        assert_eq!(visited, vec![false, false, false, true, true]);
    }

    #[test]
    fn out_of_range_edges_are_ignored() {
        assert!(!is_connected(2, &edges(&[(0, 5)])));
    }
}
