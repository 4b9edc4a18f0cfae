pub mod formal;
pub mod mapping;
pub mod prose;
pub mod report;

// Re-export common model types
pub use formal::{FormalStatement, ProofStatus};
pub use mapping::{Mapping, VerificationStatus};
pub use prose::{ProseStatement, StatementKind};
pub use report::Report;
