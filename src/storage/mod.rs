//! Graph storage layer
//!
//! Provides the dense adjacency-matrix representation and the value types
//! (vertex ids, distances, edges) shared by every algorithm.

pub mod matrix;

pub use matrix::{AdjacencyMatrix, Distance, Edge, NextHop, NodeId};
