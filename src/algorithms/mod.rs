//! Graph algorithms over dense adjacency matrices
//!
//! Each function is a pure computation: it borrows the matrix, allocates its
//! own working storage, and returns an owned result.

pub mod all_pairs;
pub mod matching;
pub mod shortest_path;
pub mod spanning_tree;
pub mod tsp;

pub use all_pairs::{floyd_warshall, reconstruct_path, AllPairsResult};
pub use matching::{max_matching, MatchingResult};
pub use shortest_path::{dijkstra, PathResult};
pub use spanning_tree::prim;
pub use tsp::{tsp, TourResult};
