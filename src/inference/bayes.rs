//! Joint probability of an evidence assignment
//!
//! This weights a single assignment; it is not marginal inference. Only
//! nodes named in the evidence contribute a factor, and any parent missing
//! from the evidence is read as false rather than summed out.
//!
//! # Example
//!
//! ```
//! use trueno_algo::{infer, BayesNetwork, BayesNode, Evidence};
//!
//! let network = BayesNetwork {
//!     nodes: vec![BayesNode::root(0, "rain", 0.3)],
//! };
//! let evidence: Evidence = [(0, false)].into_iter().collect();
//!
//! let result = infer(network, &evidence).unwrap();
//! assert!((result.probability - 0.7).abs() < 1e-12);
//! ```

use super::network::{BayesNetwork, Evidence};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The network, echoed, and the probability of the evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesResult {
    /// Input network, unchanged
    pub network: BayesNetwork,
    /// Product of the evidence nodes' conditional probabilities
    pub probability: f64,
}

/// Compute the probability of `evidence` under `network`
///
/// For each node with an observed value, looks up
/// `p = P(node | parents)` from its table and multiplies in `p` (observed
/// true) or `1 - p` (observed false). Empty evidence yields 1.
///
/// # Errors
///
/// Returns [`GraphError::ProbabilityTableMismatch`](crate::GraphError::ProbabilityTableMismatch)
/// or [`GraphError::TooManyParents`](crate::GraphError::TooManyParents) if any
/// node's table is malformed. Tables are checked before any factor is read.
#[tracing::instrument(skip_all, fields(nodes = network.nodes.len(), observed = evidence.len()))]
pub fn infer(network: BayesNetwork, evidence: &Evidence) -> Result<BayesResult> {
    network.validate()?;

    let mut probability = 1.0_f64;
    let mut factors = 0_usize;

    for node in &network.nodes {
        let Some(&observed) = evidence.get(&node.id) else {
            continue;
        };
        let p = node.probabilities[node.table_index(evidence)];
        probability *= if observed { p } else { 1.0 - p };
        factors += 1;
    }

    debug!(factors, probability, "evidence weighted");

    Ok(BayesResult {
        network,
        probability,
    })
}
