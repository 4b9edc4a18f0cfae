use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::mapping::Mapping;

/// Immutable aggregate of one pipeline run. Every rendered view reads
/// its numbers from this one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub total_whitepaper_theorems: usize,
    pub total_tla_theorems: usize,
    pub mappings: Vec<Mapping>,
    /// Statements with no mapping candidate. Declared for report shape
    /// compatibility; the matcher does not populate them.
    pub unmapped_whitepaper: Vec<String>,
    pub unmapped_tla: Vec<String>,
    /// Whitepaper id to the formal ids it was mapped to
    pub cross_references: IndexMap<String, Vec<String>>,
    pub statistics: IndexMap<String, serde_json::Value>,
}

impl Report {
    /// Number of mapping candidates. Invariant: equals
    /// `mappings.len()`, a count of candidates rather than of uniquely
    /// covered whitepaper statements.
    pub fn mapped_theorems(&self) -> usize {
        self.mappings.len()
    }

    /// Coverage percentage recorded at assembly time; 0 when the
    /// whitepaper yielded no statements.
    pub fn coverage_percent(&self) -> f64 {
        self.statistics
            .get("coverage_percent")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0)
    }
}
