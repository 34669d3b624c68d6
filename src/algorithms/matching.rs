//! Maximum matching via augmenting paths (Kuhn's algorithm)
//!
//! Each free vertex, in index order, starts a depth-first search for an
//! alternating path ending at another free vertex; the matching is flipped
//! along the path when one is found. The search runs on an explicit stack.
//!
//! # Limitation
//!
//! Augmenting search without blossom contraction is exact only on bipartite
//! graphs. On general graphs (odd cycles) the result is a valid, maximal
//! matching that may be smaller than the maximum.
//!
//! # Example
//!
//! ```
//! use trueno_algo::{max_matching, AdjacencyMatrix};
//!
//! // Path 0 - 1 - 2 - 3: the perfect matching {0-1, 2-3}
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 1, 0, 0],
//!     vec![1, 0, 1, 0],
//!     vec![0, 1, 0, 1],
//!     vec![0, 0, 1, 0],
//! ]).unwrap();
//!
//! let result = max_matching(&graph);
//! assert_eq!(result.size, 2);
//! ```

use crate::storage::{AdjacencyMatrix, Edge, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vertex-disjoint edge set
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchingResult {
    /// Matched pairs, `from < to`, ordered by `from`
    pub matching: Vec<Edge>,
    /// Number of matched pairs
    pub size: usize,
}

/// Search frame: a vertex on the alternating path and its next candidate
struct Frame {
    vertex: usize,
    cursor: usize,
}

/// Compute a maximum matching over the undirected view of the graph
///
/// Exact for bipartite graphs; maximal (not necessarily maximum) otherwise.
/// Self-loops are ignored.
///
/// # Complexity
///
/// O(V³) time, O(V) extra space
#[must_use]
#[tracing::instrument(skip(graph), fields(vertices = graph.num_nodes()))]
pub fn max_matching(graph: &AdjacencyMatrix) -> MatchingResult {
    let n = graph.num_nodes();
    if n == 0 {
        return MatchingResult::default();
    }

    let mut mate: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    for root in 0..n {
        if mate[root].is_some() {
            continue;
        }
        visited.fill(false);
        if augment(graph, root, &mut mate, &mut visited) {
            debug!(root, "augmenting path found");
        }
    }

    let matching: Vec<Edge> = mate
        .iter()
        .enumerate()
        .filter_map(|(u, &partner)| {
            let v = partner.filter(|&v| u < v)?;
            Some(Edge {
                from: NodeId::from_index(u),
                to: NodeId::from_index(v),
                weight: graph.undirected_weight_at(u, v)?,
            })
        })
        .collect();

    MatchingResult {
        size: matching.len(),
        matching,
    }
}

/// Search for an augmenting path from the free vertex `root` and flip it
///
/// Both endpoints of every matched edge crossed are marked visited, so the
/// path never revisits a vertex and the flip keeps `mate` symmetric.
fn augment(
    graph: &AdjacencyMatrix,
    root: usize,
    mate: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    let n = graph.num_nodes();
    let mut stack = vec![Frame {
        vertex: root,
        cursor: 0,
    }];
    // through[i]: neighbor chosen by stack[i] to reach stack[i + 1]
    let mut through: Vec<usize> = Vec::new();
    visited[root] = true;

    while let Some(frame) = stack.last_mut() {
        let vertex = frame.vertex;
        let mut candidate = None;
        while frame.cursor < n {
            let neighbor = frame.cursor;
            frame.cursor += 1;
            if !visited[neighbor] && graph.undirected_weight_at(vertex, neighbor).is_some() {
                candidate = Some(neighbor);
                break;
            }
        }

        let Some(neighbor) = candidate else {
            stack.pop();
            through.pop();
            continue;
        };
        visited[neighbor] = true;

        match mate[neighbor] {
            None => {
                through.push(neighbor);
                for (frame, &partner) in stack.iter().zip(&through) {
                    mate[frame.vertex] = Some(partner);
                    mate[partner] = Some(frame.vertex);
                }
                return true;
            }
            Some(next) if !visited[next] => {
                visited[next] = true;
                through.push(neighbor);
                stack.push(Frame {
                    vertex: next,
                    cursor: 0,
                });
            }
            Some(_) => {}
        }
    }

    false
}
