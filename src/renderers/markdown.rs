use crate::errors::ProofmapResult;
use crate::models::report::Report;
use crate::traits::renderer::ReportRenderer;

/// Narrative view: summary counts, coverage, and a mapping table. The
/// table mirrors the tabular view minus the two unused backend status
/// columns.
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn file_name(&self) -> &'static str {
        "theorem_mapping.md"
    }

    fn render(&self, report: &Report) -> ProofmapResult<String> {
        let mut out = String::new();
        out.push_str("# Theorem Mapping Report\n\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        out.push_str("## Summary\n\n");
        out.push_str(&format!(
            "- Whitepaper statements: {}\n",
            report.total_whitepaper_theorems
        ));
        out.push_str(&format!("- Formal statements: {}\n", report.total_tla_theorems));
        out.push_str(&format!("- Mapping candidates: {}\n", report.mapped_theorems()));
        out.push_str(&format!("- Coverage: {:.1}%\n\n", report.coverage_percent()));

        out.push_str("## Mappings\n\n");
        out.push_str("| Whitepaper | TLA+ | Confidence | Type | TLAPS | File | Lines |\n");
        out.push_str("|---|---|---|---|---|---|---|\n");
        for mapping in &report.mappings {
            out.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {}-{} |\n",
                mapping.whitepaper_id,
                mapping.tla_id,
                mapping.confidence,
                mapping.mapping_type,
                mapping.verification.tlaps_status,
                mapping.tla_file,
                mapping.line_range.0,
                mapping.line_range.1,
            ));
        }

        Ok(out)
    }
}
