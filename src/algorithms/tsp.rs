//! Traveling salesman: exact tour via bitmask dynamic programming
//!
//! State `(visited, position)` is the cheapest way to finish the tour from
//! `position` having already visited the set `visited`, returning to vertex 0.
//! The table is filled bottom-up, from the full set downward, and each state
//! records its best continuation for path replay.
//!
//! The table has `2^n · n` entries, so inputs are capped by
//! [`Limits`](crate::Limits); no approximation is attempted.
//!
//! # Example
//!
//! ```
//! use trueno_algo::{tsp, AdjacencyMatrix, Distance, Limits, NodeId};
//!
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 10, 15, 20],
//!     vec![10, 0, 35, 25],
//!     vec![15, 35, 0, 30],
//!     vec![20, 25, 30, 0],
//! ]).unwrap();
//!
//! let tour = tsp(&graph, &Limits::default()).unwrap();
//! assert_eq!(tour.distance, Distance::reachable(80));
//! assert_eq!(tour.path.first(), Some(&NodeId(0)));
//! assert_eq!(tour.path.last(), Some(&NodeId(0)));
//! ```

use crate::config::Limits;
use crate::error::{GraphError, Result};
use crate::storage::{AdjacencyMatrix, Distance, NodeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Hamiltonian cycle through vertex 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourResult {
    /// `n + 1` vertices starting and ending at 0; empty if no tour exists
    pub path: Vec<NodeId>,
    /// Total tour weight, or unreachable if no tour exists
    pub distance: Distance,
}

impl TourResult {
    fn empty() -> Self {
        Self {
            path: Vec::new(),
            distance: Distance::reachable(0),
        }
    }

    fn no_tour() -> Self {
        Self {
            path: Vec::new(),
            distance: Distance::UNREACHABLE,
        }
    }
}

/// Memo table addressed by `mask * n + position`
struct TourTable {
    cost: Vec<Option<i64>>,
    choice: Vec<Option<u8>>,
    n: usize,
}

impl TourTable {
    fn new(n: usize) -> Self {
        let states = (1_usize << n) * n;
        Self {
            cost: vec![None; states],
            choice: vec![None; states],
            n,
        }
    }

    fn slot(&self, mask: usize, position: usize) -> usize {
        mask * self.n + position
    }
}

/// Find a minimum-cost cycle visiting every vertex once, from and to vertex 0
///
/// Missing edges are impassable; decode a complete distance table with
/// [`AdjacencyMatrix::complete_from_rows`] when `0` means a zero-cost hop.
/// When no Hamiltonian cycle exists the result has an empty path and
/// [`Distance::UNREACHABLE`]. Equal-cost continuations resolve to the lowest
/// vertex index. Sums that would overflow are dropped.
///
/// # Errors
///
/// Returns [`GraphError::InputTooLarge`] when the vertex count exceeds
/// [`Limits::effective_tsp_limit`].
///
/// # Complexity
///
/// O(2^V · V²) time, O(2^V · V) space
#[tracing::instrument(skip(graph, limits), fields(vertices = graph.num_nodes()))]
pub fn tsp(graph: &AdjacencyMatrix, limits: &Limits) -> Result<TourResult> {
    let n = graph.num_nodes();
    let limit = limits.effective_tsp_limit();
    if n > limit {
        warn!(limit, "refusing oversized tsp input");
        return Err(GraphError::InputTooLarge { vertices: n, limit });
    }

    match n {
        0 => return Ok(TourResult::empty()),
        1 => {
            return Ok(TourResult {
                path: vec![NodeId(0), NodeId(0)],
                distance: Distance::reachable(0),
            })
        }
        _ => {}
    }

    let table = fill_table(graph, n);
    let start = table.slot(1, 0);
    let Some(total) = table.cost[start] else {
        debug!("no hamiltonian cycle");
        return Ok(TourResult::no_tour());
    };

    Ok(TourResult {
        path: replay(&table),
        distance: Distance::reachable(total),
    })
}

fn fill_table(graph: &AdjacencyMatrix, n: usize) -> TourTable {
    let mut table = TourTable::new(n);
    let full = (1_usize << n) - 1;

    for position in 1..n {
        let slot = table.slot(full, position);
        table.cost[slot] = graph.weight_at(position, 0);
    }

    // Every reachable state contains vertex 0, so only odd masks matter.
    for mask in (1..full).rev().filter(|&m| m & 1 == 1) {
        for position in (0..n).filter(|&p| mask & (1 << p) != 0) {
            let mut best: Option<(i64, usize)> = None;

            for city in (0..n).filter(|&c| mask & (1 << c) == 0) {
                let Some(step) = graph.weight_at(position, city) else {
                    continue;
                };
                let Some(rest) = table.cost[table.slot(mask | (1 << city), city)] else {
                    continue;
                };
                let Some(total) = step.checked_add(rest) else {
                    continue;
                };
                if best.map_or(true, |(b, _)| total < b) {
                    best = Some((total, city));
                }
            }

            if let Some((total, city)) = best {
                let slot = table.slot(mask, position);
                table.cost[slot] = Some(total);
                table.choice[slot] = u8::try_from(city).ok();
            }
        }
    }

    table
}

/// Rebuild the tour by following recorded choices from `({0}, 0)`
fn replay(table: &TourTable) -> Vec<NodeId> {
    let n = table.n;
    let mut path = Vec::with_capacity(n + 1);
    path.push(NodeId(0));

    let mut mask = 1_usize;
    let mut position = 0_usize;
    while let Some(next) = table.choice[table.slot(mask, position)] {
        position = usize::from(next);
        mask |= 1 << position;
        path.push(NodeId::from_index(position));
    }

    path.push(NodeId(0));
    path
}
