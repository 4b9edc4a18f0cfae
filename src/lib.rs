pub mod config;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod pipeline;
pub mod renderers;
pub mod traits;
pub mod vocabulary;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::MappingConfig;
pub use errors::{ProofmapError, ProofmapResult};
pub use extractors::{ModuleExtractor, WhitepaperExtractor};
pub use logging::LogContext;
pub use matcher::StatementMatcher;
pub use models::{
    FormalStatement,
    Mapping,
    ProofStatus,
    ProseStatement,
    Report,
    StatementKind,
    VerificationStatus,
};
pub use pipeline::{MappingPipeline, PipelineOutcome};
pub use traits::ReportRenderer;
