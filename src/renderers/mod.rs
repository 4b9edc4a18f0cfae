use std::fs;
use std::path::{Path, PathBuf};

pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;

// Re-export renderers
pub use csv::CsvRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

use crate::errors::ProofmapResult;
use crate::logging::LogContext;
use crate::models::report::Report;
use crate::traits::renderer::ReportRenderer;

/// All report views, in the order they are written.
pub fn all_renderers() -> Vec<Box<dyn ReportRenderer>> {
    vec![
        Box::new(JsonRenderer),
        Box::new(CsvRenderer),
        Box::new(MarkdownRenderer),
        Box::new(HtmlRenderer),
    ]
}

/// Render every view of `report` into `output_dir`, creating the
/// directory first. Write failures propagate to the caller.
pub fn write_reports(
    report: &Report,
    output_dir: &Path,
    log: &LogContext,
) -> ProofmapResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for renderer in all_renderers() {
        let path = output_dir.join(renderer.file_name());
        fs::write(&path, renderer.render(report)?)?;
        log.info(&format!("Wrote {}", path.display()));
        written.push(path);
    }
    Ok(written)
}
