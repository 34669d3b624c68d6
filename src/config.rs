//! Size limits for exponential algorithms
//!
//! The TSP table has `2^n · n` entries, so callers bound `n` up front rather
//! than timing out mid-computation.

use serde::Deserialize;

/// Default maximum vertex count accepted by [`tsp`](crate::tsp)
pub const DEFAULT_MAX_TSP_VERTICES: usize = 16;

/// Absolute ceiling on TSP vertex count, whatever the configuration says
pub const TSP_HARD_LIMIT: usize = 20;

/// Input size limits
///
/// Deserializable so it can sit inside a caller's own configuration file;
/// missing fields take their defaults.
///
/// # Example
///
/// ```
/// use trueno_algo::Limits;
///
/// let limits = Limits::default().with_max_tsp_vertices(12);
/// assert_eq!(limits.effective_tsp_limit(), 12);
///
/// let capped = Limits::default().with_max_tsp_vertices(64);
/// assert_eq!(capped.effective_tsp_limit(), trueno_algo::config::TSP_HARD_LIMIT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest graph accepted by the TSP solver
    pub max_tsp_vertices: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tsp_vertices: DEFAULT_MAX_TSP_VERTICES,
        }
    }
}

impl Limits {
    /// Override the TSP vertex limit
    #[must_use]
    pub fn with_max_tsp_vertices(mut self, max: usize) -> Self {
        self.max_tsp_vertices = max;
        self
    }

    /// Configured TSP limit clamped to [`TSP_HARD_LIMIT`]
    #[must_use]
    pub fn effective_tsp_limit(&self) -> usize {
        self.max_tsp_vertices.min(TSP_HARD_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let limits: Limits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, Limits::default());
    }

    #[test]
    fn test_deserialize_override() {
        let limits: Limits = serde_json::from_str(r#"{"max_tsp_vertices": 10}"#).unwrap();
        assert_eq!(limits.effective_tsp_limit(), 10);
    }
}
