use crate::errors::{ProofmapError, ProofmapResult};
use crate::models::report::Report;
use crate::traits::renderer::ReportRenderer;

/// Flat tabular view: one row per mapping, fixed column order.
pub struct CsvRenderer;

impl ReportRenderer for CsvRenderer {
    fn file_name(&self) -> &'static str {
        "theorem_mapping.csv"
    }

    fn render(&self, report: &Report) -> ProofmapResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "whitepaper_id",
            "tla_id",
            "confidence",
            "mapping_type",
            "tlaps_status",
            "tlc_status",
            "stateright_status",
            "tla_file",
            "line_range",
        ])?;

        for mapping in &report.mappings {
            writer.write_record([
                mapping.whitepaper_id.clone(),
                mapping.tla_id.clone(),
                mapping.confidence.to_string(),
                mapping.mapping_type.clone(),
                mapping.verification.tlaps_status.clone(),
                mapping.verification.tlc_status.clone(),
                mapping.verification.stateright_status.clone(),
                mapping.tla_file.clone(),
                format!("{}-{}", mapping.line_range.0, mapping.line_range.1),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ProofmapError::ReportError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ProofmapError::ReportError(e.to_string()))
    }
}
