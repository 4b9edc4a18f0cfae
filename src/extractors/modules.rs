use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use walkdir::WalkDir;

use crate::extractors::normalize_whitespace;
use crate::logging::LogContext;
use crate::models::formal::{FormalStatement, ProofStatus};
use crate::vocabulary::{
    FORMAL_BOUNDARY_RE, FORMAL_DECL_RE, PROOF_COMPLETE_MARKER, PROOF_START_MARKER,
};

/// Extracts THEOREM and LEMMA declarations from TLA+ modules under the
/// specification and proof directory roots.
pub struct ModuleExtractor {
    extension: String,
}

impl ModuleExtractor {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
        }
    }

    /// Recursively discover module files under `roots` and extract
    /// every declaration. A file that cannot be read is skipped with a
    /// warning; extraction continues over the remaining files.
    pub fn extract_dirs(
        &self,
        roots: &[&Path],
        log: &LogContext,
    ) -> IndexMap<String, FormalStatement> {
        let files = self.discover_modules(roots, log);
        log.info(&format!("Discovered {} module files", files.len()));

        let mut statements = IndexMap::new();
        for path in &files {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    log.warn(&format!("Skipping module {}: {}", path.display(), e));
                    continue;
                }
            };
            let module = path
                .file_stem()
                .and_then(OsStr::to_str)
                .unwrap_or("module");
            for statement in self.extract_module(&text, module) {
                // Identifier collisions overwrite, last write wins.
                statements.insert(statement.id.clone(), statement);
            }
        }

        log.info(&format!("Extracted {} formal statements", statements.len()));
        statements
    }

    /// Extract every `THEOREM name ==` / `LEMMA name ==` declaration
    /// from one module text.
    pub fn extract_module(&self, text: &str, module: &str) -> Vec<FormalStatement> {
        let proof_status = derive_proof_status(text);
        let mut statements = Vec::new();

        for caps in FORMAL_DECL_RE.captures_iter(text) {
            let decl = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let name = &caps[2];

            let tail = &text[decl.end()..];
            let body_len = FORMAL_BOUNDARY_RE
                .find(tail)
                .map(|m| m.start())
                .unwrap_or(tail.len());
            let body = normalize_whitespace(&tail[..body_len]);
            let statement_text = if body.is_empty() {
                name.to_string()
            } else {
                format!("{} == {}", name, body)
            };

            statements.push(FormalStatement {
                id: format!("{}_{}", module, name),
                name: name.to_string(),
                statement_text,
                proof_status,
                module: module.to_string(),
                line: text[..decl.start()].matches('\n').count() + 1,
                dependencies: Vec::new(),
                proof_obligations: Vec::new(),
            });
        }

        statements
    }

    fn discover_modules(&self, roots: &[&Path], log: &LogContext) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for root in roots {
            for entry in WalkDir::new(root) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if entry.file_type().is_file()
                            && path.extension().and_then(OsStr::to_str)
                                == Some(self.extension.as_str())
                        {
                            files.push(entry.into_path());
                        }
                    }
                    Err(e) => {
                        log.warn(&format!(
                            "Skipping entry under {}: {}",
                            root.display(),
                            e
                        ));
                    }
                }
            }
        }
        // WalkDir order is platform-dependent; sort for stable output.
        files.sort();
        files
    }
}

/// Proof status is derived per file, not per declaration: a module
/// containing both markers marks every declaration in it complete.
fn derive_proof_status(text: &str) -> ProofStatus {
    let has_start = text.contains(PROOF_START_MARKER);
    let has_completion = text.contains(PROOF_COMPLETE_MARKER);
    if has_start && has_completion {
        ProofStatus::Complete
    } else if has_start {
        ProofStatus::Incomplete
    } else {
        ProofStatus::Unknown
    }
}
