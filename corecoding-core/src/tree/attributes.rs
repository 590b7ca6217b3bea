//! `Name=Value` attribute maps for the FEATS and MISC columns

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered attribute mapping with total lookups
///
/// Missing names read as the empty string, so callers never branch on
/// absence before comparing values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

/// Morphological features of a word
pub type Features = AttributeMap;

/// Miscellaneous annotation of a word (transliterations, spacing, ...)
pub type Misc = AttributeMap;

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a CoNLL-U column such as `Case=Nom|Number=Sing`
    ///
    /// `_` and the empty string yield an empty map. Entries without `=`
    /// are kept with an empty value.
    pub fn parse(column: &str) -> Self {
        let column = column.trim();
        if column.is_empty() || column == "_" {
            return Self::new();
        }

        column
            .split('|')
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((name, value)) => (name, value),
                None => (entry, ""),
            })
            .collect()
    }

    /// Value for `name`, or `""` when absent
    pub fn get(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Whether `name` is present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Insert or replace a value, keeping the original position on replace
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Iterate over `(name, value)` pairs in stored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.set(name, value);
        }
        map
    }
}

impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "_");
        }
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            if value.is_empty() {
                write!(f, "{name}")?;
            } else {
                write!(f, "{name}={value}")?;
            }
        }
        Ok(())
    }
}
