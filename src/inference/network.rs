//! Network representation and table validation

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Observed truth values, keyed by node id
pub type Evidence = BTreeMap<i64, bool>;

/// Parents beyond this count cannot index a table
pub const MAX_PARENTS: usize = 31;

/// One boolean variable and its conditional probability table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BayesNode {
    /// Node id, used as the evidence key; any integer, negatives included
    pub id: i64,
    /// Display name
    pub name: String,
    /// Parent node ids; position `i` is bit `i` of the table index
    pub parents: Vec<i64>,
    /// Child node ids (informational, echoed back unchanged)
    #[serde(default)]
    pub children: Vec<i64>,
    /// `probabilities[k] = P(node = true | parent assignment k)`
    pub probabilities: Vec<f64>,
}

impl BayesNode {
    /// Node with no parents and a single prior
    #[must_use]
    pub fn root(id: i64, name: impl Into<String>, prior: f64) -> Self {
        Self {
            id,
            name: name.into(),
            parents: Vec::new(),
            children: Vec::new(),
            probabilities: vec![prior],
        }
    }

    /// Check the table has exactly `2^|parents|` entries
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::TooManyParents`] or
    /// [`GraphError::ProbabilityTableMismatch`].
    pub fn validate(&self) -> Result<()> {
        if self.parents.len() > MAX_PARENTS {
            return Err(GraphError::TooManyParents {
                node: self.id,
                parents: self.parents.len(),
                max: MAX_PARENTS,
            });
        }

        let expected = 1_usize << self.parents.len();
        if self.probabilities.len() != expected {
            return Err(GraphError::ProbabilityTableMismatch {
                node: self.id,
                expected,
                actual: self.probabilities.len(),
            });
        }
        Ok(())
    }

    /// Table index for the parents' values under `evidence`
    ///
    /// Parents absent from `evidence` count as false.
    #[must_use]
    pub fn table_index(&self, evidence: &Evidence) -> usize {
        self.parents
            .iter()
            .enumerate()
            .filter(|&(_, &parent)| evidence.get(&parent).copied().unwrap_or(false))
            .fold(0, |index, (bit, _)| index | (1 << bit))
    }
}

/// Ordered collection of nodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BayesNetwork {
    /// Nodes in caller order
    pub nodes: Vec<BayesNode>,
}

impl BayesNetwork {
    /// Validate every node's table
    ///
    /// # Errors
    ///
    /// Returns the first node error encountered.
    pub fn validate(&self) -> Result<()> {
        self.nodes.iter().try_for_each(BayesNode::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(parents: Vec<i64>, probabilities: Vec<f64>) -> BayesNode {
        BayesNode {
            id: 9,
            name: "wet_grass".to_string(),
            parents,
            children: Vec::new(),
            probabilities,
        }
    }

    #[test]
    fn test_table_length_checked() {
        assert!(node(vec![1, 2], vec![0.1, 0.2, 0.3, 0.4]).validate().is_ok());

        let err = node(vec![1], vec![0.5]).validate().unwrap_err();
        assert_eq!(
            err,
            GraphError::ProbabilityTableMismatch {
                node: 9,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_too_many_parents() {
        let err = node((0..40).collect(), vec![0.5]).validate().unwrap_err();
        assert!(matches!(err, GraphError::TooManyParents { parents: 40, .. }));
    }

    #[test]
    fn test_table_index_bits_follow_parent_order() {
        let n = node(vec![3, 5], vec![0.0; 4]);
        let evidence: Evidence = [(3, false), (5, true)].into_iter().collect();
        assert_eq!(n.table_index(&evidence), 0b10);

        let evidence: Evidence = [(3, true)].into_iter().collect();
        assert_eq!(n.table_index(&evidence), 0b01);
    }

    #[test]
    fn test_negative_ids_are_ordinary_keys() {
        let n = node(vec![-4, 7], vec![0.0; 4]);
        let evidence: Evidence = [(-4, true), (7, true)].into_iter().collect();
        assert_eq!(n.table_index(&evidence), 0b11);

        let json = r#"{"id": -1, "name": "fog", "parents": [], "probabilities": [0.1]}"#;
        let parsed: BayesNode = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, BayesNode::root(-1, "fog", 0.1));
    }

    #[test]
    fn test_children_default_when_missing() {
        let json = r#"{"id": 0, "name": "rain", "parents": [], "probabilities": [0.2]}"#;
        let parsed: BayesNode = serde_json::from_str(json).unwrap();
        assert!(parsed.children.is_empty());
        assert_eq!(parsed, BayesNode::root(0, "rain", 0.2));
    }
}
