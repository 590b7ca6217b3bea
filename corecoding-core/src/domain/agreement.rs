//! Agreement feature extraction

use crate::error::ConfigError;
use crate::tree::TreeNode;
use regex::Regex;

/// Separator between the blocks of different verbal nodes
pub const BLOCK_SEPARATOR: &str = "|||";

/// Matches agreement feature names, including layered ones like `Number[psor]`
#[derive(Debug, Clone)]
pub struct AgreementMatcher {
    pattern: Regex,
}

impl AgreementMatcher {
    /// Compile a matcher for the given base feature names
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let alternatives: Vec<String> = names
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Err(ConfigError::NoAgreementFeatures);
        }

        let pattern_str = format!(r"^({})(\[|$)", alternatives.join("|"));
        let pattern = Regex::new(&pattern_str)
            .map_err(|e| ConfigError::InvalidPattern(format!("'{pattern_str}': {e}")))?;

        Ok(Self { pattern })
    }

    /// Whether `name` is an agreement feature
    pub fn is_match(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// `Name=Value` pairs of `node` joined by `|`, or `None` without any
    pub fn block<N: TreeNode>(&self, node: &N) -> Option<String> {
        let features: Vec<String> = node
            .feats()
            .iter()
            .filter(|(name, _)| self.is_match(name))
            .map(|(name, value)| format!("{name}={value}"))
            .collect();

        if features.is_empty() {
            None
        } else {
            Some(features.join("|"))
        }
    }
}
