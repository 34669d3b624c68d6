//! Single-source shortest paths: Dijkstra's algorithm
//!
//! Dense-matrix variant: each round scans every unvisited vertex for the
//! smallest tentative distance instead of using a heap, for O(V²) total.
//! On a tie the lower vertex index is settled first.
//!
//! # Example
//!
//! ```
//! use trueno_algo::{dijkstra, AdjacencyMatrix, Distance, NodeId};
//!
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 4, 0],
//!     vec![4, 0, 1],
//!     vec![0, 1, 0],
//! ]).unwrap();
//!
//! let paths = dijkstra(&graph, NodeId(0)).unwrap();
//! assert_eq!(paths[2].distance, Distance::reachable(5));
//! assert_eq!(paths[2].path, vec![NodeId(0), NodeId(1), NodeId(2)]);
//! ```

use crate::error::Result;
use crate::storage::{AdjacencyMatrix, Distance, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shortest route from the source to one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Total weight, or unreachable
    pub distance: Distance,
    /// Vertices from source to target inclusive; empty when unreachable
    pub path: Vec<NodeId>,
}

/// Compute single-source shortest paths using Dijkstra's algorithm
///
/// Returns one [`PathResult`] per vertex, indexed by vertex id. Unreachable
/// vertices get [`Distance::UNREACHABLE`] and an empty path.
///
/// Edge weights must be non-negative. Negative weights are not rejected, but
/// the distances they produce are meaningless. A relaxation whose sum would
/// overflow `i64` is skipped.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
/// if `source` is not a vertex of a non-empty graph. An empty graph yields an
/// empty result regardless of `source`.
///
/// # Complexity
///
/// O(V²) time, O(V) extra space
#[tracing::instrument(skip(graph), fields(vertices = graph.num_nodes()))]
pub fn dijkstra(graph: &AdjacencyMatrix, source: NodeId) -> Result<Vec<PathResult>> {
    let n = graph.num_nodes();
    if n == 0 {
        return Ok(Vec::new());
    }
    graph.check_node(source)?;

    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    distances[source.index()] = Some(0);

    for _ in 0..n {
        let Some((node, cost)) = closest_unvisited(&distances, &visited) else {
            break;
        };
        visited[node] = true;

        for neighbor in 0..n {
            if visited[neighbor] {
                continue;
            }
            let Some(weight) = graph.weight_at(node, neighbor) else {
                continue;
            };
            let Some(next_cost) = cost.checked_add(weight) else {
                continue;
            };

            if distances[neighbor].map_or(true, |d| next_cost < d) {
                distances[neighbor] = Some(next_cost);
                predecessors[neighbor] = Some(node);
            }
        }
    }

    let settled = visited.iter().filter(|&&v| v).count();
    debug!(settled, unreachable = n - settled, "dijkstra finished");

    Ok((0..n)
        .map(|target| match distances[target] {
            Some(d) => PathResult {
                distance: Distance::reachable(d),
                path: walk_predecessors(&predecessors, source.index(), target),
            },
            None => PathResult {
                distance: Distance::UNREACHABLE,
                path: Vec::new(),
            },
        })
        .collect())
}

/// Lowest-index unvisited vertex with the smallest tentative distance
fn closest_unvisited(distances: &[Option<i64>], visited: &[bool]) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64)> = None;
    for (node, distance) in distances.iter().enumerate() {
        if visited[node] {
            continue;
        }
        if let Some(d) = *distance {
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((node, d));
            }
        }
    }
    best
}

/// Follow predecessor links from `target` back to `source`
fn walk_predecessors(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<NodeId> {
    let mut path = vec![NodeId::from_index(target)];
    let mut current = target;
    while current != source {
        match predecessors[current] {
            Some(pred) => {
                path.push(NodeId::from_index(pred));
                current = pred;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    fn graph(rows: &[Vec<i64>]) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(rows).unwrap()
    }

    fn distances(paths: &[PathResult]) -> Vec<i64> {
        paths.iter().map(|p| i64::from(p.distance)).collect()
    }

    #[test]
    fn test_empty_graph() {
        let paths = dijkstra(&AdjacencyMatrix::new(), NodeId(0)).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_source_is_zero() {
        let g = graph(&[vec![0, 2], vec![2, 0]]);
        let paths = dijkstra(&g, NodeId(1)).unwrap();
        assert_eq!(paths[1].distance, Distance::reachable(0));
        assert_eq!(paths[1].path, vec![NodeId(1)]);
    }

    #[test]
    fn test_worked_example() {
        let g = graph(&[vec![0, 4, 0], vec![4, 0, 1], vec![0, 1, 0]]);
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert_eq!(distances(&paths), vec![0, 4, 5]);
        assert_eq!(paths[2].path, vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_shorter_path_via_intermediate() {
        // Direct: 0 --5--> 2
        // Via 1:  0 --1--> 1 --2--> 2 (total: 3)
        let g = graph(&[vec![0, 1, 5], vec![0, 0, 2], vec![0, 0, 0]]);
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert_eq!(paths[2].distance, Distance::reachable(3));
        assert_eq!(paths[2].path, vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_unreachable_node() {
        // 0 → 1, 2 isolated
        let g = graph(&[vec![0, 1, 0], vec![0, 0, 0], vec![0, 0, 0]]);
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert_eq!(paths[2].distance, Distance::UNREACHABLE);
        assert!(paths[2].path.is_empty());
    }

    #[test]
    fn test_directed_edges_respected() {
        // Only 1 → 0 exists
        let g = graph(&[vec![0, 0], vec![3, 0]]);
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert!(!paths[1].distance.is_reachable());
    }

    #[test]
    fn test_tie_prefers_lower_index() {
        // 0 → 1 (1), 0 → 2 (1), both reach 3 at total 2
        let g = graph(&[
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ]);
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert_eq!(paths[3].distance, Distance::reachable(2));
        assert_eq!(paths[3].path, vec![NodeId(0), NodeId(1), NodeId(3)]);
    }

    #[test]
    fn test_zero_weight_edge() {
        let g = AdjacencyMatrix::from_optional_rows(&[
            vec![None, Some(0), None],
            vec![None, None, Some(0)],
            vec![None, None, None],
        ])
        .unwrap();
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert_eq!(paths[2].distance, Distance::reachable(0));
        assert_eq!(paths[2].path.len(), 3);
    }

    #[test]
    fn test_overflowing_relaxation_skipped() {
        let g = graph(&[
            vec![0, i64::MAX, 0],
            vec![0, 0, 1],
            vec![0, 0, 0],
        ]);
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert_eq!(paths[1].distance, Distance::reachable(i64::MAX));
        assert_eq!(paths[2].distance, Distance::UNREACHABLE);
    }

    #[test]
    fn test_source_out_of_bounds() {
        let g = graph(&[vec![0, 1], vec![1, 0]]);
        let err = dijkstra(&g, NodeId(100)).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 100, .. }));
    }

    #[test]
    fn test_cycle_in_graph() {
        // Cycle: 0 → 1 → 2 → 0, with 0 → 3
        let g = graph(&[
            vec![0, 1, 0, 10],
            vec![0, 0, 1, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let paths = dijkstra(&g, NodeId(0)).unwrap();
        assert_eq!(distances(&paths), vec![0, 1, 2, 10]);
    }
}
