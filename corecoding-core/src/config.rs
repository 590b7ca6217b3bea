//! Classifier configuration

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Features reported as verbal agreement
    pub const AGREEMENT_FEATURES: &[&str] = &[
        "Person",
        "Number",
        "Clusivity",
        "Gender",
        "Animacy",
        "NounClass",
        "Polite",
    ];
}

/// Report categories selectable with the `arg` option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArgCategory {
    /// SUBJECT lines only
    Subj,
    /// OBJECT lines only
    Obj,
    /// IOBJECT lines only
    Iobj,
    /// AGREEMENT lines only
    Agreement,
    /// Every category
    #[default]
    All,
}

impl ArgCategory {
    /// All values in the order they are listed to users
    pub const ALL_VALUES: [ArgCategory; 5] = [
        ArgCategory::Subj,
        ArgCategory::Obj,
        ArgCategory::Iobj,
        ArgCategory::Agreement,
        ArgCategory::All,
    ];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgCategory::Subj => "subj",
            ArgCategory::Obj => "obj",
            ArgCategory::Iobj => "iobj",
            ArgCategory::Agreement => "agreement",
            ArgCategory::All => "all",
        }
    }

    /// Whether lines of `category` are emitted under this selection
    pub fn includes(&self, category: ArgCategory) -> bool {
        *self == ArgCategory::All || *self == category
    }
}

impl FromStr for ArgCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subj" => Ok(ArgCategory::Subj),
            "obj" => Ok(ArgCategory::Obj),
            "iobj" => Ok(ArgCategory::Iobj),
            "agreement" => Ok(ArgCategory::Agreement),
            "all" => Ok(ArgCategory::All),
            _ => Err(ConfigError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for ArgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Which report categories to emit
    pub arg: ArgCategory,
    /// Whether the language marks finiteness with `VerbForm`
    pub verbform: bool,
    /// Report `nsubj:pass` instead of `nsubj` in argument lines
    pub full_deprel: bool,
    /// Feature names counted as agreement
    pub agreement_features: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            arg: ArgCategory::default(),
            verbform: true,
            full_deprel: false,
            agreement_features: defaults::AGREEMENT_FEATURES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl ClassifierConfig {
    /// Create a configuration builder
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.agreement_features.iter().all(|name| name.trim().is_empty()) {
            return Err(ConfigError::NoAgreementFeatures);
        }
        Ok(())
    }
}

/// Fluent builder for [`ClassifierConfig`]
#[derive(Debug, Default)]
pub struct ClassifierConfigBuilder {
    arg: Option<String>,
    verbform: Option<bool>,
    full_deprel: Option<bool>,
    agreement_features: Option<Vec<String>>,
}

impl ClassifierConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the report category by name (`subj`, `obj`, `iobj`, `agreement`, `all`)
    pub fn arg(mut self, category: impl Into<String>) -> Self {
        self.arg = Some(category.into());
        self
    }

    /// Select the report category
    pub fn category(mut self, category: ArgCategory) -> Self {
        self.arg = Some(category.as_str().to_string());
        self
    }

    /// Toggle the `VerbForm`-based finiteness test
    pub fn verbform(mut self, enabled: bool) -> Self {
        self.verbform = Some(enabled);
        self
    }

    /// Toggle full relation labels in argument lines
    pub fn full_deprel(mut self, enabled: bool) -> Self {
        self.full_deprel = Some(enabled);
        self
    }

    /// Replace the agreement feature list
    pub fn agreement_features<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agreement_features = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClassifierConfig, ConfigError> {
        let mut config = ClassifierConfig::default();

        if let Some(arg) = self.arg {
            config.arg = arg.parse()?;
        }

        if let Some(verbform) = self.verbform {
            config.verbform = verbform;
        }

        if let Some(full_deprel) = self.full_deprel {
            config.full_deprel = full_deprel;
        }

        if let Some(features) = self.agreement_features {
            config.agreement_features = features;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.arg, ArgCategory::All);
        assert!(config.verbform);
        assert!(!config.full_deprel);
        assert_eq!(config.agreement_features.len(), 7);
    }

    #[test]
    fn test_parse_categories() {
        assert_eq!("subj".parse::<ArgCategory>().unwrap(), ArgCategory::Subj);
        assert_eq!("IOBJ".parse::<ArgCategory>().unwrap(), ArgCategory::Iobj);
        assert_eq!(
            "agreement".parse::<ArgCategory>().unwrap(),
            ArgCategory::Agreement
        );
        assert!(matches!(
            "subject".parse::<ArgCategory>(),
            Err(ConfigError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_includes() {
        assert!(ArgCategory::All.includes(ArgCategory::Obj));
        assert!(ArgCategory::Obj.includes(ArgCategory::Obj));
        assert!(!ArgCategory::Obj.includes(ArgCategory::Subj));
        assert!(!ArgCategory::Agreement.includes(ArgCategory::Iobj));
    }

    #[test]
    fn test_builder() {
        let config = ClassifierConfig::builder()
            .arg("obj")
            .verbform(false)
            .full_deprel(true)
            .build()
            .unwrap();
        assert_eq!(config.arg, ArgCategory::Obj);
        assert!(!config.verbform);
        assert!(config.full_deprel);
    }

    #[test]
    fn test_builder_rejects_unknown_category() {
        let result = ClassifierConfig::builder().arg("verbs").build();
        assert_eq!(
            result,
            Err(ConfigError::UnknownCategory("verbs".to_string()))
        );
    }

    #[test]
    fn test_builder_rejects_empty_feature_list() {
        let result = ClassifierConfig::builder()
            .agreement_features(Vec::<String>::new())
            .build();
        assert_eq!(result, Err(ConfigError::NoAgreementFeatures));
    }
}
