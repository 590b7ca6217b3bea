//! Layered error types

use corecoding_core::{ConfigError, TreeError};
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed CoNLL-U line
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Sentence violates the tree invariants
    #[error("invalid tree in sentence starting at line {line}: {source}")]
    InvalidTree {
        /// 1-based line number where the sentence starts
        line: usize,
        /// The violated invariant
        #[source]
        source: TreeError,
    },

    /// Classifier configuration error
    #[error("invalid classifier configuration: {0}")]
    Classifier(#[from] ConfigError),

    /// Engine configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl EngineError {
    /// Whether the error only affects one sentence, so reading can go on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::Parse { .. }
                | EngineError::InvalidTree { .. }
                | EngineError::EncodingError(_)
        )
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::InvalidData => EngineError::EncodingError(err.to_string()),
            _ => EngineError::IoError(err.to_string()),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
