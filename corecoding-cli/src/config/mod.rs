//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use corecoding_core::config::defaults::AGREEMENT_FEATURES;
use corecoding_core::ClassifierConfig;
use corecoding_engine::{EngineConfig, ExecutionMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Classification configuration
    #[serde(default)]
    pub classifier: ClassifierSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Classification-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierSection {
    /// Report category: subj, obj, iobj, agreement or all
    pub arg: String,

    /// Whether the language marks finiteness with VerbForm
    pub verbform: bool,

    /// Report relation subtypes in argument lines
    pub full_deprel: bool,

    /// Feature names counted as verbal agreement
    pub agreement_features: Vec<String>,
}

impl Default for ClassifierSection {
    fn default() -> Self {
        Self {
            arg: "all".to_string(),
            verbform: true,
            full_deprel: false,
            agreement_features: AGREEMENT_FEATURES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format (text or json)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Always classify sentence batches in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Batch size (sentences) from which batches are processed in parallel
    pub parallel_threshold: usize,

    /// Sentences read per batch
    pub batch_size: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            parallel: false,
            threads: 0,
            parallel_threshold: engine.parallel_threshold,
            batch_size: engine.batch_size,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.classifier_config()?;
        config.output_format()?;
        config.engine_config(None)?;
        Ok(config)
    }

    /// Classifier configuration described by the file
    pub fn classifier_config(&self) -> Result<ClassifierConfig> {
        ClassifierConfig::builder()
            .arg(self.classifier.arg.as_str())
            .verbform(self.classifier.verbform)
            .full_deprel(self.classifier.full_deprel)
            .agreement_features(self.classifier.agreement_features.iter().cloned())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Output format named by the file
    pub fn output_format(&self) -> Result<crate::commands::process::OutputFormat> {
        use clap::ValueEnum;
        crate::commands::process::OutputFormat::from_str(&self.output.format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}' (expected text or json)",
                self.output.format
            ))
            .into()
        })
    }

    /// Engine configuration, with `parallel` forcing parallel execution
    pub fn engine_config(&self, parallel: Option<bool>) -> Result<EngineConfig> {
        let performance = &self.performance;
        let threads = match performance.threads {
            0 => None,
            n => Some(n),
        };

        let execution_mode = if parallel.unwrap_or(performance.parallel) {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Adaptive
        };

        let config = EngineConfig {
            execution_mode,
            threads,
            parallel_threshold: performance.parallel_threshold,
            batch_size: performance.batch_size,
        };
        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corecoding_core::ArgCategory;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.classifier_config().unwrap(), ClassifierConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::parse(
            r#"
[classifier]
arg = "obj"
verbform = false

[performance]
threads = 2
"#,
        )
        .unwrap();

        let classifier = config.classifier_config().unwrap();
        assert_eq!(classifier.arg, ArgCategory::Obj);
        assert!(!classifier.verbform);
        assert_eq!(classifier.agreement_features.len(), 7);

        let engine = config.engine_config(None).unwrap();
        assert_eq!(engine.threads, Some(2));
        assert_eq!(engine.execution_mode, ExecutionMode::Adaptive);
        assert_eq!(
            config.engine_config(Some(true)).unwrap().execution_mode,
            ExecutionMode::Parallel
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = CliConfig::parse("[classifier]\narg = \"verbs\"\n").unwrap_err();
        assert!(err.to_string().contains("verbs"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(CliConfig::parse("[classifier]\nverb_form = true\n").is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = CliConfig::parse("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        assert!(CliConfig::parse("[performance]\nbatch_size = 0\n").is_err());
    }
}
