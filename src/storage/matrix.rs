//! Dense adjacency-matrix graph representation
//!
//! Every algorithm in this crate consumes an [`AdjacencyMatrix`]: an `n × n`
//! grid of optional integer weights where `None` means "no edge".
//!
//! # Wire format
//!
//! ```text
//! [[0, 4, 0],        0 ──4── 1 ──1── 2
//!  [4, 0, 1],
//!  [0, 1, 0]]        0 decodes to "no edge" (see `from_rows`)
//! ```
//!
//! Callers that need genuine zero-weight edges build the matrix with
//! [`AdjacencyMatrix::from_optional_rows`] instead. Complete distance tables
//! (the TSP request body) decode through
//! [`AdjacencyMatrix::complete_from_rows`], where `0` is a zero-cost hop.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex identifier (zero-indexed, dense)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Row/column index of this vertex in an adjacency matrix
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[allow(clippy::cast_possible_truncation)] // Matrices >4B vertices not supported
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Path length with an explicit unreachable tag
///
/// Serialized as a plain integer; `-1` stands for unreachable. A reachable
/// negative length (only possible with negative edge weights) serializes as
/// itself, but every negative integer deserializes as unreachable, so such a
/// value does not survive the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Distance(Option<i64>);

impl Distance {
    /// No path exists
    pub const UNREACHABLE: Self = Self(None);

    /// Wire encoding of [`Distance::UNREACHABLE`]
    pub const UNREACHABLE_WIRE: i64 = -1;

    /// Reachable at the given total weight
    #[must_use]
    pub const fn reachable(weight: i64) -> Self {
        Self(Some(weight))
    }

    /// Total weight, `None` when unreachable
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        self.0
    }

    /// Whether a path exists
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(weight) => fmt::Display::fmt(&weight, f),
            None => f.pad("∞"),
        }
    }
}

impl From<Option<i64>> for Distance {
    fn from(value: Option<i64>) -> Self {
        Self(value)
    }
}

impl From<i64> for Distance {
    fn from(value: i64) -> Self {
        if value < 0 {
            Self::UNREACHABLE
        } else {
            Self(Some(value))
        }
    }
}

impl From<Distance> for i64 {
    fn from(distance: Distance) -> i64 {
        distance.0.unwrap_or(Distance::UNREACHABLE_WIRE)
    }
}

/// First hop on a shortest route, `None` when no route is known
///
/// Serialized as a plain integer; `-1` stands for "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct NextHop(pub Option<NodeId>);

impl From<i64> for NextHop {
    fn from(value: i64) -> Self {
        Self(u32::try_from(value).ok().map(NodeId))
    }
}

impl From<NextHop> for i64 {
    fn from(hop: NextHop) -> i64 {
        hop.0.map_or(-1, |node| i64::from(node.0))
    }
}

/// Weighted connection between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex
    pub from: NodeId,
    /// Target vertex
    pub to: NodeId,
    /// Edge weight
    pub weight: i64,
}

/// Dense `n × n` adjacency matrix with optional weights
///
/// Directed consumers (Dijkstra, Floyd–Warshall, TSP) read [`weight`](Self::weight);
/// undirected consumers (Prim, matching) read
/// [`undirected_weight`](Self::undirected_weight).
///
/// # Example
///
/// ```
/// use trueno_algo::{AdjacencyMatrix, NodeId};
///
/// let graph = AdjacencyMatrix::from_rows(&[vec![0, 4], vec![4, 0]]).unwrap();
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.weight(NodeId(0), NodeId(1)), Some(4));
/// assert_eq!(graph.weight(NodeId(0), NodeId(0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyMatrix {
    /// Row-major weights, length `num_nodes²`
    weights: Vec<Option<i64>>,

    num_nodes: usize,
}

impl AdjacencyMatrix {
    /// Create an empty (zero-vertex) graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `n` vertices and no edges
    #[must_use]
    pub fn with_nodes(n: usize) -> Self {
        Self {
            weights: vec![None; n * n],
            num_nodes: n,
        }
    }

    /// Decode the wire format, where `0` means "no edge"
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);

        for (row, values) in rows.iter().enumerate() {
            check_row_len(row, n, values.len())?;
            weights.extend(values.iter().map(|&w| (w != 0).then_some(w)));
        }

        Ok(Self {
            weights,
            num_nodes: n,
        })
    }

    /// Decode a complete distance table: every off-diagonal entry is an edge
    ///
    /// Unlike [`from_rows`](Self::from_rows), `0` off the diagonal is a
    /// zero-cost hop. The diagonal is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn complete_from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);

        for (row, values) in rows.iter().enumerate() {
            check_row_len(row, n, values.len())?;
            weights.extend(
                values
                    .iter()
                    .enumerate()
                    .map(|(col, &w)| (col != row).then_some(w)),
            );
        }

        Ok(Self {
            weights,
            num_nodes: n,
        })
    }

    /// Build from explicit optional weights (`Some(0)` is a zero-weight edge)
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_optional_rows(rows: &[Vec<Option<i64>>]) -> Result<Self> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);

        for (row, values) in rows.iter().enumerate() {
            check_row_len(row, n, values.len())?;
            weights.extend_from_slice(values);
        }

        Ok(Self {
            weights,
            num_nodes: n,
        })
    }

    /// Set (or clear, with `None`) the directed edge `from → to`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
    pub fn set_edge(&mut self, from: NodeId, to: NodeId, weight: Option<i64>) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        let slot = from.index() * self.num_nodes + to.index();
        self.weights[slot] = weight;
        Ok(())
    }

    /// Number of vertices
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Whether the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Weight of the directed edge `from → to`
    ///
    /// Returns `None` for a missing edge or an out-of-range endpoint.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<i64> {
        self.weight_at(from.index(), to.index())
    }

    /// Weight of the undirected edge `{u, v}`
    ///
    /// The lighter direction wins when both are present. Self-loops have no
    /// undirected weight.
    #[must_use]
    pub fn undirected_weight(&self, u: NodeId, v: NodeId) -> Option<i64> {
        self.undirected_weight_at(u.index(), v.index())
    }

    /// Ensure `node` is a valid vertex id
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] otherwise.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if node.index() < self.num_nodes {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: node.index(),
                vertices: self.num_nodes,
            })
        }
    }

    /// Iterate vertex ids in index order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.num_nodes).map(NodeId::from_index)
    }

    /// Wire-format rows (`0` for "no edge")
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        if self.num_nodes == 0 {
            return Vec::new();
        }
        self.weights
            .chunks(self.num_nodes)
            .map(|row| row.iter().map(|w| w.unwrap_or(0)).collect())
            .collect()
    }

    pub(crate) fn weight_at(&self, from: usize, to: usize) -> Option<i64> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return None;
        }
        self.weights[from * self.num_nodes + to]
    }

    pub(crate) fn undirected_weight_at(&self, u: usize, v: usize) -> Option<i64> {
        if u == v {
            return None;
        }
        match (self.weight_at(u, v), self.weight_at(v, u)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

fn check_row_len(row: usize, expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(GraphError::NotSquare {
            row,
            expected,
            actual,
        })
    }
}
