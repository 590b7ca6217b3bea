//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from the engine
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("corpus.conllu".to_string());
        assert_eq!(error.to_string(), "File not found: corpus.conllu");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown argument category 'verbs'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown argument category 'verbs'"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("broken pipe".to_string());
        assert_eq!(error.to_string(), "Processing error: broken pipe");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let result: anyhow::Result<()> =
            Err(CliError::FileNotFound("x.conllu".to_string()).into());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("x.conllu"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ツリーバンク/cs_pdt-ud-train.conllu".to_string());
        assert_eq!(
            error.to_string(),
            "File not found: ツリーバンク/cs_pdt-ud-train.conllu"
        );
    }
}
