//! Error types and result aliases for quiz-to-SQL conversion
//!
//! Two failure tiers exist: top-level failures (`ConvertError`) abort one
//! run with empty output, per-question failures (`SkipReason`) drop a
//! single question and let the run continue. Neither tier ever crosses the
//! library boundary as a panic.

/// Failures while reading or parsing the input document
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Top-level conversion failures
///
/// Both variants are recovered at the engine boundary: the engine logs the
/// message and the conversion yields empty output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Error reading file: {0}")]
    Load(#[from] LoadError),

    #[error("No 'mainCategories' found in JSON")]
    MissingCategories,
}

/// Reasons a single question is rejected without failing the run
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("Question has empty text")]
    EmptyText,

    #[error("Question has less than 3 answers: {preview}...")]
    TooFewAnswers { preview: String },

    #[error(transparent)]
    Malformed(#[from] serde_json::Error),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
