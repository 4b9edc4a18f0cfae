use crate::errors::ProofmapResult;
use crate::models::report::Report;
use crate::traits::renderer::ReportRenderer;

/// Minimal styled hypertext view: summary line plus a mapping table.
pub struct HtmlRenderer;

impl ReportRenderer for HtmlRenderer {
    fn file_name(&self) -> &'static str {
        "theorem_mapping.html"
    }

    fn render(&self, report: &Report) -> ProofmapResult<String> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<title>Theorem Mapping Report</title>\n");
        out.push_str("<style>\n");
        out.push_str("body { font-family: sans-serif; margin: 2em; }\n");
        out.push_str("table { border-collapse: collapse; }\n");
        out.push_str("th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: left; }\n");
        out.push_str("th { background: #f0f0f0; }\n");
        out.push_str("</style>\n</head>\n<body>\n");

        out.push_str("<h1>Theorem Mapping Report</h1>\n");
        out.push_str(&format!(
            "<p>{} mapping candidates across {} whitepaper statements and {} formal \
             statements ({:.1}% coverage). Generated {}.</p>\n",
            report.mapped_theorems(),
            report.total_whitepaper_theorems,
            report.total_tla_theorems,
            report.coverage_percent(),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        ));

        out.push_str("<table>\n");
        out.push_str(
            "<tr><th>Whitepaper</th><th>TLA+</th><th>Confidence</th>\
             <th>TLAPS</th><th>File</th></tr>\n",
        );
        for mapping in &report.mappings {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                mapping.whitepaper_id,
                mapping.tla_id,
                mapping.confidence,
                mapping.verification.tlaps_status,
                mapping.tla_file,
            ));
        }
        out.push_str("</table>\n</body>\n</html>\n");

        Ok(out)
    }
}
