use std::collections::HashSet;

use chrono::Utc;
use indexmap::IndexMap;

use crate::logging::LogContext;
use crate::models::formal::FormalStatement;
use crate::models::mapping::{Mapping, VerificationStatus};
use crate::models::prose::{ProseStatement, StatementKind};
use crate::vocabulary::{IMPORTANCE_KEYWORDS, WORD_RE};

/// Fixed confidence assigned to every heuristic match. The score is a
/// constant "match found" signal, not graded by overlap strength.
const KEYWORD_MATCH_CONFIDENCE: f64 = 0.7;

const MAPPING_TYPE_KEYWORD: &str = "keyword_based";

/// Produces confidence-scored mapping candidates by exhaustive
/// pairwise comparison of the two statement collections.
pub struct StatementMatcher;

impl StatementMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Compare every (prose, formal) pair. Each pair is evaluated
    /// independently, so reordering either collection changes only the
    /// order of the resulting list, never its contents.
    pub fn correlate(
        &self,
        prose: &IndexMap<String, ProseStatement>,
        formal: &IndexMap<String, FormalStatement>,
        log: &LogContext,
    ) -> Vec<Mapping> {
        let mut mappings = Vec::new();

        for statement in prose.values() {
            let prose_terms = important_terms(&statement.statement_text);
            for declaration in formal.values() {
                if pair_matches(statement, &prose_terms, declaration) {
                    mappings.push(build_mapping(statement, declaration));
                }
            }
        }

        log.info(&format!("Produced {} mapping candidates", mappings.len()));
        mappings
    }
}

/// Lowercase word-token set of a statement text.
fn tokenize(text: &str) -> HashSet<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// The statement's tokens restricted to the domain-importance
/// vocabulary.
fn important_terms(text: &str) -> HashSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| IMPORTANCE_KEYWORDS.contains(token.as_str()))
        .collect()
}

fn pair_matches(
    statement: &ProseStatement,
    prose_terms: &HashSet<String>,
    declaration: &FormalStatement,
) -> bool {
    let formal_terms = important_terms(&declaration.statement_text);
    if !prose_terms.is_empty()
        && !formal_terms.is_empty()
        && prose_terms.intersection(&formal_terms).next().is_some()
    {
        return true;
    }

    // Fallback for pairs with no shared importance keyword.
    statement.kind == StatementKind::Theorem
        && declaration.name.to_lowercase().contains("theorem")
}

fn build_mapping(statement: &ProseStatement, declaration: &FormalStatement) -> Mapping {
    let verification = VerificationStatus {
        tlaps_status: declaration.proof_status.as_str().to_string(),
        ..VerificationStatus::default()
    };

    Mapping {
        whitepaper_id: statement.id.clone(),
        tla_id: declaration.id.clone(),
        confidence: KEYWORD_MATCH_CONFIDENCE,
        mapping_type: MAPPING_TYPE_KEYWORD.to_string(),
        verification,
        tla_file: format!("{}.tla", declaration.module),
        line_range: (declaration.line, declaration.line + 5),
        cross_references: Vec::new(),
        notes: "Auto-generated mapping based on keyword matching".to_string(),
        created_at: Utc::now(),
        checksum: None,
    }
}
