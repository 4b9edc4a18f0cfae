use crate::errors::ProofmapResult;
use crate::models::report::Report;
use crate::traits::renderer::ReportRenderer;

/// Structured data view: a pretty-printed dump of the whole report.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn file_name(&self) -> &'static str {
        "theorem_mapping.json"
    }

    fn render(&self, report: &Report) -> ProofmapResult<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
