//! JSON request/response shapes for the six operations
//!
//! Transport is the caller's business; this module only turns a decoded
//! JSON body into a result envelope:
//!
//! ```text
//! POST /dijkstra  {"graph": [[0,4],[4,0]], "start": 0}
//!            →    {"result": [{"distance":0,"path":[0]}, {"distance":4,"path":[0,1]}]}
//! failure    →    {"error": "<message>"}
//! ```

use crate::algorithms::{dijkstra, floyd_warshall, max_matching, prim, tsp};
use crate::config::Limits;
use crate::inference::{infer, BayesNetwork, Evidence};
use crate::storage::{AdjacencyMatrix, NodeId};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// One of the six exposed operations, named by its route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Minimum spanning tree
    Prim,
    /// Single-source shortest paths
    Dijkstra,
    /// All-pairs shortest paths
    Floyd,
    /// Evidence weighting
    Bayes,
    /// Maximum matching
    MaxMatching,
    /// Traveling salesman
    Tsp,
}

impl Operation {
    /// Every operation, in route-registration order
    pub const ALL: [Self; 6] = [
        Self::Prim,
        Self::Dijkstra,
        Self::Floyd,
        Self::Bayes,
        Self::MaxMatching,
        Self::Tsp,
    ];

    /// Route name (`"max-matching"`, `"tsp"`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Dijkstra => "dijkstra",
            Self::Floyd => "floyd",
            Self::Bayes => "bayes",
            Self::MaxMatching => "max-matching",
            Self::Tsp => "tsp",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| anyhow!("unknown operation: {s}"))
    }
}

/// Body for `prim`, `floyd`, `max-matching` and `tsp`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRequest {
    /// Wire-format adjacency matrix
    ///
    /// `0` means "no edge", except for `tsp`, which reads a complete
    /// distance table where `0` is a zero-cost hop.
    pub graph: Vec<Vec<i64>>,
}

/// Body for `dijkstra`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraRequest {
    /// Wire-format adjacency matrix (`0` = no edge)
    pub graph: Vec<Vec<i64>>,
    /// Source vertex; a negative id fails to decode as an invalid request
    pub start: u32,
}

/// Body for `bayes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesRequest {
    /// Network definition
    pub network: BayesNetwork,
    /// Observed values, keyed by node id
    #[serde(default)]
    pub evidence: Evidence,
}

/// Run `op` on a JSON request body and wrap the output as `{"result": ...}`
///
/// # Errors
///
/// Returns an error if the body does not match the operation's request
/// shape or the algorithm rejects its input.
///
/// # Example
///
/// ```
/// use trueno_algo::api::{execute, Operation};
/// use trueno_algo::Limits;
/// use serde_json::json;
///
/// let body = json!({"graph": [[0, 4, 0], [4, 0, 1], [0, 1, 0]], "start": 0});
/// let response = execute(Operation::Dijkstra, &body, &Limits::default()).unwrap();
/// assert_eq!(response["result"][2]["distance"], 5);
/// assert_eq!(response["result"][2]["path"], json!([0, 1, 2]));
/// ```
#[tracing::instrument(skip(body, limits))]
pub fn execute(op: Operation, body: &Value, limits: &Limits) -> Result<Value> {
    let result = match op {
        Operation::Dijkstra => {
            let request: DijkstraRequest = decode(op, body)?;
            let graph = matrix(op, &request.graph)?;
            to_value(dijkstra(&graph, NodeId(request.start)).with_context(|| context(op))?)
        }
        Operation::Floyd => {
            let request: GraphRequest = decode(op, body)?;
            to_value(floyd_warshall(&matrix(op, &request.graph)?))
        }
        Operation::Prim => {
            let request: GraphRequest = decode(op, body)?;
            to_value(prim(&matrix(op, &request.graph)?))
        }
        Operation::MaxMatching => {
            let request: GraphRequest = decode(op, body)?;
            to_value(max_matching(&matrix(op, &request.graph)?))
        }
        Operation::Tsp => {
            let request: GraphRequest = decode(op, body)?;
            let graph = AdjacencyMatrix::complete_from_rows(&request.graph)
                .with_context(|| format!("invalid {op} graph"))?;
            to_value(tsp(&graph, limits).with_context(|| context(op))?)
        }
        Operation::Bayes => {
            let request: BayesRequest = decode(op, body)?;
            to_value(infer(request.network, &request.evidence).with_context(|| context(op))?)
        }
    }?;

    Ok(json!({ "result": result }))
}

/// Failure envelope `{"error": "<message>"}`, including the error chain
#[must_use]
pub fn error_body(error: &anyhow::Error) -> Value {
    json!({ "error": format!("{error:#}") })
}

fn context(op: Operation) -> String {
    format!("{op} failed")
}

fn decode<T: DeserializeOwned>(op: Operation, body: &Value) -> Result<T> {
    T::deserialize(body).with_context(|| format!("invalid {op} request"))
}

fn matrix(op: Operation, rows: &[Vec<i64>]) -> Result<AdjacencyMatrix> {
    AdjacencyMatrix::from_rows(rows).with_context(|| format!("invalid {op} graph"))
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("failed to encode result")
}
