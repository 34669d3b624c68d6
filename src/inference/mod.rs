//! Evidence weighting over a discrete Bayesian network
//!
//! Nodes are boolean. Each node's conditional probability table is indexed
//! by a bitmask over its parents; bit `i` is set when `parents[i]` is true.

pub mod bayes;
pub mod network;

pub use bayes::{infer, BayesResult};
pub use network::{BayesNetwork, BayesNode, Evidence};
