use thiserror::Error;

/// Custom error types for the proofmap pipeline
#[derive(Debug, Error)]
pub enum ProofmapError {
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Report error: {0}")]
    ReportError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type specific to proofmap operations
pub type ProofmapResult<T> = Result<T, ProofmapError>;
