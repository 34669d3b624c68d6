//! Minimum spanning tree: Prim's algorithm
//!
//! Grows a tree from vertex 0 over the undirected view of the matrix. Each
//! unvisited vertex remembers its cheapest connection to the tree; the
//! cheapest of those (lowest index on ties) joins next.
//!
//! # Example
//!
//! ```
//! use trueno_algo::{prim, AdjacencyMatrix, NodeId};
//!
//! // Triangle: the 10-weight edge is left out
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 1, 10],
//!     vec![1, 0, 2],
//!     vec![10, 2, 0],
//! ]).unwrap();
//!
//! let tree = prim(&graph);
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.iter().map(|e| e.weight).sum::<i64>(), 3);
//! ```

use crate::storage::{AdjacencyMatrix, Edge, NodeId};
use tracing::debug;

/// Compute a minimum spanning tree rooted at vertex 0
///
/// Edges come out in the order vertices join the tree, each as
/// `{from: tree vertex, to: new vertex}`. On a disconnected graph only the
/// component containing vertex 0 is spanned, so fewer than `n - 1` edges
/// are returned.
///
/// # Complexity
///
/// O(V²) time, O(V) extra space
#[must_use]
#[tracing::instrument(skip(graph), fields(vertices = graph.num_nodes()))]
pub fn prim(graph: &AdjacencyMatrix) -> Vec<Edge> {
    let n = graph.num_nodes();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    // Cheapest known connection to the tree: (weight, tree-side vertex)
    let mut best: Vec<Option<(i64, Option<usize>)>> = vec![None; n];
    let mut tree = Vec::with_capacity(n - 1);

    best[0] = Some((0, None));

    for _ in 0..n {
        let Some(node) = cheapest_candidate(&best, &visited) else {
            break;
        };
        visited[node] = true;

        if let Some((weight, Some(parent))) = best[node] {
            tree.push(Edge {
                from: NodeId::from_index(parent),
                to: NodeId::from_index(node),
                weight,
            });
        }

        for neighbor in 0..n {
            if visited[neighbor] {
                continue;
            }
            let Some(weight) = graph.undirected_weight_at(node, neighbor) else {
                continue;
            };
            if best[neighbor].map_or(true, |(current, _)| weight < current) {
                best[neighbor] = Some((weight, Some(node)));
            }
        }
    }

    if tree.len() + 1 < n {
        debug!(
            spanned = tree.len() + 1,
            "graph is disconnected; spanning only the component of vertex 0"
        );
    }

    tree
}

fn cheapest_candidate(best: &[Option<(i64, Option<usize>)>], visited: &[bool]) -> Option<usize> {
    let mut chosen: Option<(usize, i64)> = None;
    for (node, candidate) in best.iter().enumerate() {
        if visited[node] {
            continue;
        }
        if let Some((weight, _)) = *candidate {
            if chosen.map_or(true, |(_, w)| weight < w) {
                chosen = Some((node, weight));
            }
        }
    }
    chosen.map(|(node, _)| node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[Vec<i64>]) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(rows).unwrap()
    }

    fn total(tree: &[Edge]) -> i64 {
        tree.iter().map(|e| e.weight).sum()
    }

    #[test]
    fn test_empty_graph() {
        assert!(prim(&AdjacencyMatrix::new()).is_empty());
    }

    #[test]
    fn test_single_vertex() {
        assert!(prim(&graph(&[vec![0]])).is_empty());
    }

    #[test]
    fn test_square_with_diagonal() {
        // 0-1 (1), 1-2 (2), 2-3 (1), 3-0 (4), 0-2 (3)
        let g = graph(&[
            vec![0, 1, 3, 4],
            vec![1, 0, 2, 0],
            vec![3, 2, 0, 1],
            vec![4, 0, 1, 0],
        ]);
        let tree = prim(&g);
        assert_eq!(tree.len(), 3);
        assert_eq!(total(&tree), 4);
        assert_eq!(
            tree[0],
            Edge {
                from: NodeId(0),
                to: NodeId(1),
                weight: 1
            }
        );
    }

    #[test]
    fn test_disconnected_spans_first_component() {
        // {0, 1} and {2, 3}
        let g = graph(&[
            vec![0, 5, 0, 0],
            vec![5, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ]);
        let tree = prim(&g);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].to, NodeId(1));
    }

    #[test]
    fn test_one_directional_entries_are_undirected() {
        // Only the upper triangle is filled in
        let g = graph(&[vec![0, 2, 7], vec![0, 0, 3], vec![0, 0, 0]]);
        let tree = prim(&g);
        assert_eq!(tree.len(), 2);
        assert_eq!(total(&tree), 5);
    }

    #[test]
    fn test_tie_prefers_lower_index() {
        // Star around 0 with equal weights
        let g = graph(&[vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]);
        let tree = prim(&g);
        let order: Vec<_> = tree.iter().map(|e| e.to).collect();
        assert_eq!(order, vec![NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_zero_weight_edges_are_used() {
        let g = AdjacencyMatrix::from_optional_rows(&[
            vec![None, Some(0), Some(5)],
            vec![Some(0), None, Some(0)],
            vec![Some(5), Some(0), None],
        ])
        .unwrap();
        let tree = prim(&g);
        assert_eq!(tree.len(), 2);
        assert_eq!(total(&tree), 0);
    }
}
