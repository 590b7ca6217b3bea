//! Morphosyntactic description of a single argument

use super::lemma::resolve_lemma;
use crate::tree::TreeNode;
use std::fmt;

/// Case value reported when the argument carries no `Case` feature
pub const NO_CASE: &str = "NoCase";

/// Broad word class of an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// NOUN and PROPN
    Noun,
    /// PRON and DET
    Pron,
    /// Anything else (clausal arguments, numerals, ...)
    Other,
}

impl WordClass {
    /// Bucket a universal part-of-speech tag
    pub fn from_upos(upos: &str) -> Self {
        match upos {
            "NOUN" | "PROPN" => WordClass::Noun,
            "PRON" | "DET" => WordClass::Pron,
            _ => WordClass::Other,
        }
    }

    /// Label used in descriptors
    pub fn as_str(&self) -> &'static str {
        match self {
            WordClass::Noun => "NOUN",
            WordClass::Pron => "PRON",
            WordClass::Other => "OTHER",
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word class, adpositions and case of an argument
///
/// Renders as `WORDCLASS[+adposition]*+CASE`, e.g. `NOUN+of+NoCase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    /// Broad word class
    pub word_class: WordClass,
    /// Lemmas of `case` dependents, in ascending `ord`
    pub adpositions: Vec<String>,
    /// `Case` feature value, or [`NO_CASE`]
    pub case: String,
}

impl ArgumentDescriptor {
    /// Describe `node`
    ///
    /// Only direct `case` dependents are considered; `fixed` parts of
    /// multiword adpositions are not followed.
    pub fn of<N: TreeNode>(node: &N) -> Self {
        let case = match node.feats().get("Case") {
            "" => NO_CASE.to_string(),
            value => value.to_string(),
        };

        let adpositions = node
            .children()
            .iter()
            .filter(|child| child.udeprel() == "case")
            .map(resolve_lemma)
            .collect();

        Self {
            word_class: WordClass::from_upos(node.upos()),
            adpositions,
            case,
        }
    }
}

impl fmt::Display for ArgumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word_class)?;
        for adposition in &self.adpositions {
            write!(f, "+{adposition}")?;
        }
        write!(f, "+{}", self.case)
    }
}

/// Descriptor string for `node`
pub fn describe_argument<N: TreeNode>(node: &N) -> String {
    ArgumentDescriptor::of(node).to_string()
}
