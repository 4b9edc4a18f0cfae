use crate::errors::ProofmapResult;
use crate::models::report::Report;

/// One serialized view of a mapping report.
///
/// Every renderer reads from the same `Report` instance and never
/// recomputes a displayed number, so the emitted views cannot diverge.
pub trait ReportRenderer {
    /// File name of this view inside the output directory
    fn file_name(&self) -> &'static str;

    /// Render the report into the view's textual format
    fn render(&self, report: &Report) -> ProofmapResult<String>;
}
