use thiserror::Error;

/// Main error type for rankmetrics
#[derive(Error, Debug)]
pub enum RankingError {
    /// No predicted item is a ground-truth positive, so no reciprocal rank exists
    #[error("No match between ground-truth items and recommendations")]
    NoMatch,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Query file (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type using RankingError
pub type Result<T> = std::result::Result<T, RankingError>;
