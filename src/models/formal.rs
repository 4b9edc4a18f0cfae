use std::fmt;

use serde::{Deserialize, Serialize};

/// Proof status derived from the markers present in a module file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofStatus {
    Unknown,
    Incomplete,
    Complete,
}

impl ProofStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProofStatus::Unknown => "unknown",
            ProofStatus::Incomplete => "incomplete",
            ProofStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for ProofStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A THEOREM or LEMMA declaration recovered from a TLA+ module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormalStatement {
    /// `{module}_{name}`, unique across all modules (collisions
    /// overwrite, last write wins)
    pub id: String,
    /// Declared name after the THEOREM/LEMMA keyword
    pub name: String,
    /// `name == body`, whitespace-normalized
    pub statement_text: String,
    pub proof_status: ProofStatus,
    /// Owning module name (file stem)
    pub module: String,
    /// 1-based line of the declaration's first occurrence
    pub line: usize,
    pub dependencies: Vec<String>,
    pub proof_obligations: Vec<String>,
}
