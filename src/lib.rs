//! trueno-algo: classic graph algorithms and evidence weighting
//!
//! # Overview
//!
//! trueno-algo exposes six stateless computations over small, dense inputs:
//! single-source and all-pairs shortest paths, minimum spanning tree,
//! maximum matching, exact traveling salesman, and evidence weighting over a
//! boolean Bayesian network.
//!
//! # Quick Start
//!
//! ```
//! use trueno_algo::{dijkstra, floyd_warshall, AdjacencyMatrix, Distance, NodeId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 0 decodes to "no edge"
//! let graph = AdjacencyMatrix::from_rows(&[
//!     vec![0, 4, 0],
//!     vec![4, 0, 1],
//!     vec![0, 1, 0],
//! ])?;
//!
//! let paths = dijkstra(&graph, NodeId(0))?;
//! assert_eq!(paths[2].distance, Distance::reachable(5));
//!
//! let all = floyd_warshall(&graph);
//! assert_eq!(all.path(NodeId(2), NodeId(0))?, vec![NodeId(2), NodeId(1), NodeId(0)]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Storage**: dense `n × n` matrix of optional weights
//! - **Algorithms**: Dijkstra, Floyd–Warshall, Prim, augmenting-path matching, bitmask-DP TSP
//! - **Inference**: conditional probability table lookup per observed node
//! - **API**: JSON request/response envelopes for an external transport

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod api;
pub mod config;
pub mod error;
pub mod inference;
pub mod storage;

// Re-export core types
pub use algorithms::{
    dijkstra, floyd_warshall, max_matching, prim, reconstruct_path, tsp, AllPairsResult,
    MatchingResult, PathResult, TourResult,
};
pub use config::Limits;
pub use error::{ErrorKind, GraphError, Result};
pub use inference::{infer, BayesNetwork, BayesNode, BayesResult, Evidence};
pub use storage::{AdjacencyMatrix, Distance, Edge, NextHop, NodeId};
