//! Node interface consumed by the classifier

use super::attributes::{Features, Misc};
use super::sentence::{Sentence, Word};
use std::fmt;

/// Read-only view of a dependency tree node
///
/// The classifier only walks downwards, so a node exposes its immediate
/// dependents and nothing about its ancestors.
pub trait TreeNode: Sized {
    /// 1-based position within the sentence
    fn ord(&self) -> usize;

    /// Universal part-of-speech tag
    fn upos(&self) -> &str;

    /// Full dependency relation, including any subtype
    fn deprel(&self) -> &str;

    /// Universal part of the dependency relation
    fn udeprel(&self) -> &str {
        let deprel = self.deprel();
        deprel.split_once(':').map_or(deprel, |(universal, _)| universal)
    }

    /// Citation form, empty when unannotated
    fn lemma(&self) -> &str;

    /// Surface form
    fn form(&self) -> &str;

    /// Morphological features
    fn feats(&self) -> &Features;

    /// Miscellaneous annotation
    fn misc(&self) -> &Misc;

    /// Immediate dependents in ascending `ord`
    fn children(&self) -> Vec<Self>;
}

/// Borrowed handle to one word of a [`Sentence`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    sentence: &'a Sentence,
    ord: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(sentence: &'a Sentence, ord: usize) -> Self {
        Self { sentence, ord }
    }

    /// The underlying word
    pub fn word(&self) -> &'a Word {
        // ords handed out by Sentence are always in 1..=len
        &self.sentence.words()[self.ord - 1]
    }

    /// The sentence this node belongs to
    pub fn sentence(&self) -> &'a Sentence {
        self.sentence
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.word();
        f.debug_struct("NodeRef")
            .field("ord", &word.ord)
            .field("form", &word.form)
            .field("deprel", &word.deprel)
            .finish()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.sentence, other.sentence) && self.ord == other.ord
    }
}

impl Eq for NodeRef<'_> {}

impl TreeNode for NodeRef<'_> {
    fn ord(&self) -> usize {
        self.ord
    }

    fn upos(&self) -> &str {
        &self.word().upos
    }

    fn deprel(&self) -> &str {
        &self.word().deprel
    }

    fn lemma(&self) -> &str {
        &self.word().lemma
    }

    fn form(&self) -> &str {
        &self.word().form
    }

    fn feats(&self) -> &Features {
        &self.word().feats
    }

    fn misc(&self) -> &Misc {
        &self.word().misc
    }

    fn children(&self) -> Vec<Self> {
        self.sentence.dependents(self.ord)
    }
}
