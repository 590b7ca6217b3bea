//! Core error types (deterministic only)

use thiserror::Error;

/// Violations of the dependency tree invariants
///
/// Raised when a sentence is assembled, so that classification never runs
/// on a tree whose positions or head links are inconsistent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Sentence without any words
    #[error("sentence has no words")]
    Empty,

    /// Word positions are not exactly 1..=n in order
    #[error("word at index {index} has ord {found}, expected {expected}")]
    InvalidOrd {
        /// Zero-based index of the word in the sentence
        index: usize,
        /// The position that was expected at this index
        expected: usize,
        /// The position actually found
        found: usize,
    },

    /// Head points outside the sentence
    #[error("word {ord} has head {head}, but the sentence only has {len} words")]
    HeadOutOfRange {
        /// Position of the offending word
        ord: usize,
        /// The head it points to
        head: usize,
        /// Number of words in the sentence
        len: usize,
    },

    /// Word attached to itself
    #[error("word {ord} is its own head")]
    SelfLoop {
        /// Position of the offending word
        ord: usize,
    },

    /// Head relation does not reach the artificial root
    #[error("head relation contains a cycle through word {ord}")]
    Cycle {
        /// A position on the cycle
        ord: usize,
    },
}

/// Invalid classifier configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unrecognised `arg` value
    #[error("unknown argument category '{0}' (expected subj, obj, iobj, agreement or all)")]
    UnknownCategory(String),

    /// Agreement feature list is empty
    #[error("agreement feature list must not be empty")]
    NoAgreementFeatures,

    /// Agreement feature pattern failed to compile
    #[error("invalid agreement feature pattern: {0}")]
    InvalidPattern(String),
}

/// Result type for tree construction
pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_error_display() {
        let error = TreeError::HeadOutOfRange {
            ord: 3,
            head: 9,
            len: 4,
        };
        assert_eq!(
            error.to_string(),
            "word 3 has head 9, but the sentence only has 4 words"
        );
        assert_eq!(TreeError::SelfLoop { ord: 2 }.to_string(), "word 2 is its own head");
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::UnknownCategory("subject".to_string());
        assert!(error.to_string().contains("'subject'"));
        assert!(error.to_string().contains("agreement"));
    }
}
