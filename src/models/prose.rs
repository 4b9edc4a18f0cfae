use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of an informally numbered whitepaper statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Theorem,
    Assumption,
}

impl StatementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Theorem => "theorem",
            StatementKind::Assumption => "assumption",
        }
    }

    /// Display form used for synthesized titles
    pub fn label(&self) -> &'static str {
        match self {
            StatementKind::Theorem => "Theorem",
            StatementKind::Assumption => "Assumption",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A numbered statement recovered from the whitepaper text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProseStatement {
    /// Synthesized identifier, e.g. `theorem_7`
    pub id: String,
    pub kind: StatementKind,
    /// Explicit parenthetical name, or a synthesized default
    pub title: String,
    /// Full statement text with whitespace runs collapsed
    pub statement_text: String,
    /// Best-effort originating section; "unknown" when undetermined
    pub section: String,
    pub page: Option<usize>,
    /// Identifiers of statements this one depends on (structural
    /// placeholder; no extraction logic populates it yet)
    pub dependencies: Vec<String>,
}
