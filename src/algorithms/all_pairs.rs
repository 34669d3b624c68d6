//! All-pairs shortest paths: Floyd–Warshall with next-hop reconstruction
//!
//! Distances are tracked as `Option<i64>` so "no route" never collides with
//! a real weight, and every relaxation is checked for overflow before it is
//! compared.
//!
//! # Example
//!
//! ```
//! use trueno_algo::{floyd_warshall, AdjacencyMatrix, Distance, NodeId};
//!
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 3, 0],
//!     vec![0, 0, 2],
//!     vec![0, 0, 0],
//! ]).unwrap();
//!
//! let result = floyd_warshall(&graph);
//! assert_eq!(result.distances[0][2], Distance::reachable(5));
//! assert_eq!(result.distances[2][0], Distance::UNREACHABLE);
//! assert_eq!(
//!     result.path(NodeId(0), NodeId(2)).unwrap(),
//!     vec![NodeId(0), NodeId(1), NodeId(2)]
//! );
//! ```

use crate::error::{GraphError, Result};
use crate::storage::{AdjacencyMatrix, Distance, NextHop, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Distance and next-hop matrices for every vertex pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllPairsResult {
    /// `distances[i][j]`: cheapest `i → j` route, or unreachable
    pub distances: Vec<Vec<Distance>>,
    /// `next[i][j]`: first vertex after `i` on that route
    pub next: Vec<Vec<NextHop>>,
}

impl AllPairsResult {
    /// Number of vertices covered
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// Materialize the shortest route `from → to`
    ///
    /// Empty when `to` is unreachable from `from`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
    pub fn path(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        let n = self.num_nodes();
        for node in [from, to] {
            if node.index() >= n {
                return Err(GraphError::VertexOutOfRange {
                    vertex: node.index(),
                    vertices: n,
                });
            }
        }
        Ok(reconstruct_path(&self.next, from, to))
    }
}

/// Compute shortest paths between every pair of vertices
///
/// Self-distances start at zero and stay there unless a negative cycle
/// passes through the vertex. Any pair still unreached after the
/// relaxation rounds reports [`Distance::UNREACHABLE`] with an unset next hop.
///
/// Negative edge weights are allowed; negative cycles make the result
/// meaningless but never panic or overflow.
///
/// # Complexity
///
/// O(V³) time, O(V²) space
#[must_use]
#[tracing::instrument(skip(graph), fields(vertices = graph.num_nodes()))]
pub fn floyd_warshall(graph: &AdjacencyMatrix) -> AllPairsResult {
    let n = graph.num_nodes();
    if n == 0 {
        return AllPairsResult::default();
    }

    let mut dist: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                dist[i][j] = Some(0);
                next[i][j] = Some(j);
            } else if let Some(w) = graph.weight_at(i, j) {
                dist[i][j] = Some(w);
                next[i][j] = Some(j);
            }
        }
    }

    let mut overflows = 0_usize;
    for k in 0..n {
        for i in 0..n {
            let Some(via_k) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(k_to_j) = dist[k][j] else {
                    continue;
                };
                let Some(candidate) = via_k.checked_add(k_to_j) else {
                    overflows += 1;
                    continue;
                };
                if dist[i][j].map_or(true, |current| candidate < current) {
                    dist[i][j] = Some(candidate);
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    if overflows > 0 {
        debug!(overflows, "skipped overflowing relaxations");
    }

    AllPairsResult {
        distances: dist
            .into_iter()
            .map(|row| row.into_iter().map(Distance::from).collect())
            .collect(),
        next: next
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|hop| NextHop(hop.map(NodeId::from_index)))
                    .collect()
            })
            .collect(),
    }
}

/// Follow next-hop pointers from `from` until reaching `to`
///
/// Returns an empty path when the route is unknown, when an endpoint is
/// outside the matrix, or when the pointers fail to reach `to` within
/// `n` hops (only possible with negative cycles).
#[must_use]
pub fn reconstruct_path(next: &[Vec<NextHop>], from: NodeId, to: NodeId) -> Vec<NodeId> {
    let n = next.len();
    let hop = |a: NodeId| -> Option<NodeId> { next.get(a.index())?.get(to.index())?.0 };

    if from.index() >= n || hop(from).is_none() {
        return Vec::new();
    }

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        match hop(current) {
            Some(step) if path.len() <= n => {
                path.push(step);
                current = step;
            }
            _ => return Vec::new(),
        }
    }
    path
}
