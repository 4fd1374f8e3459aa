//! Error types for centering.

use thiserror::Error;

/// Result type for centering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for centering operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Annotation of the input text failed.
    #[error("Annotation failed: {0}")]
    Annotation(String),

    /// Center analysis failed.
    #[error("Analysis failed: {0}")]
    Analysis(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an annotation error.
    pub fn annotation(msg: impl Into<String>) -> Self {
        Error::Annotation(msg.into())
    }

    /// Create an analysis error.
    pub fn analysis(msg: impl Into<String>) -> Self {
        Error::Analysis(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
