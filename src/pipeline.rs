use std::path::PathBuf;

use chrono::Utc;
use indexmap::IndexMap;
use serde_json::json;

use crate::config::MappingConfig;
use crate::errors::ProofmapResult;
use crate::extractors::{ModuleExtractor, WhitepaperExtractor};
use crate::logging::LogContext;
use crate::matcher::StatementMatcher;
use crate::models::formal::{FormalStatement, ProofStatus};
use crate::models::mapping::Mapping;
use crate::models::prose::ProseStatement;
use crate::models::report::Report;
use crate::renderers;

/// Everything one run produces: the assembled report and the files it
/// was rendered into.
pub struct PipelineOutcome {
    pub report: Report,
    pub written_files: Vec<PathBuf>,
}

/// Sequential single-pass driver: prose extraction, formal extraction,
/// matching, report assembly, report writing.
pub struct MappingPipeline {
    config: MappingConfig,
}

impl MappingPipeline {
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, log: &LogContext) -> ProofmapResult<PipelineOutcome> {
        log.info(&format!(
            "Scanning whitepaper {}",
            self.config.whitepaper_path.display()
        ));
        let prose = WhitepaperExtractor::new().extract_file(&self.config.whitepaper_path, log);

        let formal = ModuleExtractor::new(&self.config.module_extension).extract_dirs(
            &[self.config.specs_dir.as_path(), self.config.proofs_dir.as_path()],
            log,
        );

        let mappings = StatementMatcher::new().correlate(&prose, &formal, log);

        let report = assemble_report(&prose, &formal, mappings);
        let written_files = renderers::write_reports(&report, &self.config.output_dir, log)?;

        Ok(PipelineOutcome {
            report,
            written_files,
        })
    }
}

/// Build the report aggregate. Coverage and the statistics breakdown
/// are computed here once; renderers only read them.
pub fn assemble_report(
    prose: &IndexMap<String, ProseStatement>,
    formal: &IndexMap<String, FormalStatement>,
    mappings: Vec<Mapping>,
) -> Report {
    let total_whitepaper = prose.len();
    let coverage = if total_whitepaper == 0 {
        0.0
    } else {
        mappings.len() as f64 / total_whitepaper as f64 * 100.0
    };

    let mut cross_references: IndexMap<String, Vec<String>> = IndexMap::new();
    for mapping in &mappings {
        cross_references
            .entry(mapping.whitepaper_id.clone())
            .or_insert_with(Vec::new)
            .push(mapping.tla_id.clone());
    }

    let mut statistics = IndexMap::new();
    statistics.insert("mapped_theorems".to_string(), json!(mappings.len()));
    statistics.insert("coverage_percent".to_string(), json!(coverage));
    for status in [
        ProofStatus::Complete,
        ProofStatus::Incomplete,
        ProofStatus::Unknown,
    ] {
        let count = formal
            .values()
            .filter(|statement| statement.proof_status == status)
            .count();
        statistics.insert(format!("proofs_{}", status), json!(count));
    }

    Report {
        generated_at: Utc::now(),
        total_whitepaper_theorems: total_whitepaper,
        total_tla_theorems: formal.len(),
        mappings,
        unmapped_whitepaper: Vec::new(),
        unmapped_tla: Vec::new(),
        cross_references,
        statistics,
    }
}
