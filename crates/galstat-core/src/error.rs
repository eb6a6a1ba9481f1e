//! Error types for catalog analysis

use thiserror::Error;

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can abort an analysis run
///
/// Every variant is terminal for the run that triggers it; the pipeline is a
/// batch job with no retries or degraded output.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("malformed input in {file}: {detail}")]
    MalformedInput { file: String, detail: String },

    #[error("insufficient sample for {statistic}: need at least {required} values, got {actual}")]
    InsufficientSample {
        statistic: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("invalid domain for {quantity}: {detail}")]
    InvalidDomain {
        quantity: &'static str,
        detail: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
