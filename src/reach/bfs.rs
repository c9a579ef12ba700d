// src/reach/bfs.rs
//! Reachability by breadth-first traversal.
//!
//! The traversal reads adjacency rows directly, so one BFS over a dense
//! n x n matrix costs O(n^2) and the all-pairs sweep O(n^3) worst case,
//! still far below the power-series method. Used both as the independent
//! correctness oracle and as the fast alternative.

use crate::error::{EngineError, Result};
use crate::matrix::Matrix;
use std::collections::{BTreeSet, VecDeque};

/// Indices reachable from `start` by at least one edge step, plus
/// `start` itself.
///
/// # Errors
/// `IndexOutOfRange` when `start` is not a valid row index.
pub fn reachable_from(a: &Matrix, start: usize) -> Result<BTreeSet<usize>> {
    let n = a.row_count();
    if start >= n {
        return Err(EngineError::IndexOutOfRange {
            index: start,
            len: n,
        });
    }

    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        // Only the first n columns name nodes; anything past that in a
        // malformed wide row is not a valid neighbor index.
        for (neighbor, &entry) in a.row(current).iter().take(n).enumerate() {
            if entry > 0 && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(visited)
}

/// All-pairs reachability by running BFS from every index.
#[must_use]
pub fn reachability_via_bfs(a: &Matrix) -> Matrix {
    let n = a.row_count();
    let mut reachability = Matrix::zeros(n, n);

    for start in 0..n {
        // start < n, so the range check cannot fail here
        if let Ok(reached) = reachable_from(a, start) {
            for node in reached {
                reachability.set(start, node, 1);
            }
        }
    }

    reachability
}

/// True when every node is reachable from index 0. Trivially true for
/// graphs with at most one node.
#[must_use]
pub fn is_connected(a: &Matrix) -> bool {
    let n = a.row_count();
    if n <= 1 {
        return true;
    }
    reachable_from(a, 0).map_or(false, |reached| reached.len() == n)
}

/// Disjoint connected components covering every index, discovered by
/// BFS from the first unvisited index.
#[must_use]
pub fn connected_components(a: &Matrix) -> Vec<BTreeSet<usize>> {
    let n = a.row_count();
    let mut visited: BTreeSet<usize> = BTreeSet::new();
    let mut components = Vec::new();

    for start in 0..n {
        if visited.contains(&start) {
            continue;
        }
        if let Ok(component) = reachable_from(a, start) {
            visited.extend(&component);
            components.push(component);
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::graph::{graph_to_adjacency, path_graph, star_graph};

    fn adjacency(graph: &crate::graph::Graph) -> Matrix {
        graph_to_adjacency(graph).0
    }

    /// Two disjoint 2-node paths: 0-1 and 2-3.
    fn split_adjacency() -> Matrix {
        Matrix::from_rows(vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ])
    }

    #[test]
    fn bfs_includes_start_and_everything_behind_it() {
        let a = adjacency(&path_graph(4, None));
        let reached = reachable_from(&a, 2).expect("valid start");
        assert_eq!(reached, BTreeSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn bfs_rejects_out_of_range_start() {
        let a = adjacency(&path_graph(3, None));
        assert_eq!(
            reachable_from(&a, 3).unwrap_err(),
            EngineError::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn leaf_of_star_reaches_all_nodes_through_center() {
        let a = adjacency(&star_graph(6, None));
        let reached = reachable_from(&a, 5).expect("valid start");
        assert_eq!(reached.len(), 6);
    }

    #[test]
    fn path_graph_is_connected() {
        assert!(is_connected(&adjacency(&path_graph(4, None))));
    }

    #[test]
    fn trivial_matrices_are_connected() {
        assert!(is_connected(&Matrix::zeros(0, 0)));
        assert!(is_connected(&Matrix::zeros(1, 1)));
    }

    #[test]
    fn split_graph_is_not_connected() {
        assert!(!is_connected(&split_adjacency()));
    }

    #[test]
    fn components_of_split_graph_are_the_two_blocks() {
        let components = connected_components(&split_adjacency());
        assert_eq!(
            components,
            vec![BTreeSet::from([0, 1]), BTreeSet::from([2, 3])]
        );
    }

    #[test]
    fn wide_rows_never_yield_out_of_range_neighbors() {
        // Malformed 2x3 input with a positive entry past the node range;
        // the scan must ignore it rather than index past n.
        let a = Matrix::from_rows(vec![vec![0, 0, 1], vec![0, 0, 0]]);
        let reached = reachable_from(&a, 0).expect("valid start");
        assert_eq!(reached, BTreeSet::from([0]));
        let reach = reachability_via_bfs(&a);
        assert_eq!(reach.get(0, 0), 1);
        assert_eq!(reach.get(0, 1), 0);
    }

    #[test]
    fn isolated_nodes_form_singleton_components() {
        // 0-1 connected, 2 isolated.
        let a = Matrix::from_rows(vec![
            vec![0, 1, 0],
            vec![1, 0, 0],
            vec![0, 0, 0],
        ]);
        let components = connected_components(&a);
        assert_eq!(
            components,
            vec![BTreeSet::from([0, 1]), BTreeSet::from([2])]
        );
    }

    #[test]
    fn star_graph_is_a_single_component() {
        let components = connected_components(&adjacency(&star_graph(7, None)));
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 7);
    }

    #[test]
    fn bfs_reachability_has_zero_block_between_split_halves() {
        let reach = reachability_via_bfs(&split_adjacency());
        for i in 0..2 {
            for j in 2..4 {
                assert_eq!(reach.get(i, j), 0, "no path across ({i},{j})");
                assert_eq!(reach.get(j, i), 0, "no path across ({j},{i})");
            }
        }
        assert_eq!(reach.get(0, 1), 1);
        assert_eq!(reach.get(2, 3), 1);
    }
}
