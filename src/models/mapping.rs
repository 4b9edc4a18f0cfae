use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-backend verification state attached to a mapping candidate.
///
/// Only `tlaps_status` is populated by the matcher (from the formal
/// statement's proof status). The TLC and Stateright fields reserve
/// room for verification backends not wired into this pipeline and
/// stay `"unknown"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationStatus {
    pub tlaps_status: String,
    pub tlc_status: String,
    pub stateright_status: String,
    pub last_verified: Option<DateTime<Utc>>,
    /// Wall-clock duration of the last verification run, in seconds
    pub verification_duration: Option<f64>,
    pub total_obligations: usize,
    pub complete_obligations: usize,
    pub errors: Vec<String>,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self {
            tlaps_status: "unknown".to_string(),
            tlc_status: "unknown".to_string(),
            stateright_status: "unknown".to_string(),
            last_verified: None,
            verification_duration: None,
            total_obligations: 0,
            complete_obligations: 0,
            errors: Vec::new(),
        }
    }
}

/// A confidence-scored correspondence between one whitepaper statement
/// and one formal declaration. Many-to-many: each match is kept as an
/// independent entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub whitepaper_id: String,
    pub tla_id: String,
    /// Heuristic confidence in [0, 1]
    pub confidence: f64,
    pub mapping_type: String,
    pub verification: VerificationStatus,
    pub tla_file: String,
    /// Line span covering the declaration site, `(start, start + 5)`
    pub line_range: (usize, usize),
    pub cross_references: Vec<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    /// Reserved for content-hash-based change detection
    pub checksum: Option<String>,
}
