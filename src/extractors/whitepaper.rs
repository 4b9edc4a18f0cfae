use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::extractors::normalize_whitespace;
use crate::logging::LogContext;
use crate::models::prose::{ProseStatement, StatementKind};
use crate::vocabulary::{HEADING_RE, PROSE_BOUNDARY_RE, PROSE_HEAD_RE};

/// Extracts informally numbered theorem and assumption statements from
/// the whitepaper text.
pub struct WhitepaperExtractor;

impl WhitepaperExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Read and scan the whitepaper. A document that cannot be read
    /// yields no statements: the error is logged and the pipeline
    /// continues with an empty collection.
    pub fn extract_file(&self, path: &Path, log: &LogContext) -> IndexMap<String, ProseStatement> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log.error(&format!(
                    "Failed to read whitepaper {}: {}",
                    path.display(),
                    e
                ));
                return IndexMap::new();
            }
        };

        let statements = self.extract_text(&text);
        log.info(&format!(
            "Extracted {} whitepaper statements from {}",
            statements.len(),
            path.display()
        ));
        statements
    }

    /// Scan `text` for every `Theorem N` / `Assumption N` occurrence.
    /// Duplicate kind+ordinal keys overwrite, last write wins.
    pub fn extract_text(&self, text: &str) -> IndexMap<String, ProseStatement> {
        let mut statements = IndexMap::new();
        let has_page_breaks = text.contains('\u{c}');

        for caps in PROSE_HEAD_RE.captures_iter(text) {
            let head = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let kind = match &caps[1].to_lowercase()[..] {
                "theorem" => StatementKind::Theorem,
                _ => StatementKind::Assumption,
            };
            let ordinal: usize = match caps[2].parse() {
                Ok(n) => n,
                Err(_) => continue,
            };

            // Body runs to the earliest boundary after the head, or to
            // the end of input.
            let tail = &text[head.end()..];
            let body_len = PROSE_BOUNDARY_RE
                .find(tail)
                .map(|m| m.start())
                .unwrap_or(tail.len());
            let statement_text = normalize_whitespace(&text[head.start()..head.end() + body_len]);

            let title = caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_else(|| format!("{} {}", kind.label(), ordinal));

            let page = has_page_breaks
                .then(|| text[..head.start()].matches('\u{c}').count() + 1);

            let id = format!("{}_{}", kind.as_str(), ordinal);
            statements.insert(
                id.clone(),
                ProseStatement {
                    id,
                    kind,
                    title,
                    statement_text,
                    section: section_before(text, head.start()),
                    page,
                    dependencies: Vec::new(),
                },
            );
        }

        statements
    }
}

/// Best-effort section attribution: the last heading preceding the
/// statement, or "unknown".
fn section_before(text: &str, start: usize) -> String {
    HEADING_RE
        .find_iter(&text[..start])
        .last()
        .map(|m| m.as_str().trim_start_matches('#').trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
