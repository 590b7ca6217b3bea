//! Arena-backed sentence model

use super::attributes::{Features, Misc};
use super::node::NodeRef;
use crate::error::{Result, TreeError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One token of a dependency tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    /// 1-based position in the sentence
    pub ord: usize,
    /// Surface form
    pub form: String,
    /// Citation form (empty when unannotated)
    pub lemma: String,
    /// Universal part-of-speech tag
    pub upos: String,
    /// Language-specific part-of-speech tag
    pub xpos: String,
    /// Morphological features
    pub feats: Features,
    /// Position of the head, 0 for the artificial root
    pub head: usize,
    /// Dependency relation, possibly with a subtype (`nsubj:pass`)
    pub deprel: String,
    /// Enhanced dependencies, kept verbatim
    pub deps: String,
    /// Miscellaneous annotation
    pub misc: Misc,
}

impl Word {
    /// Create a word with the given position and form
    pub fn new(ord: usize, form: impl Into<String>) -> Self {
        Self {
            ord,
            form: form.into(),
            ..Self::default()
        }
    }

    /// Set the lemma
    pub fn lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Set the universal part-of-speech tag
    pub fn upos(mut self, upos: impl Into<String>) -> Self {
        self.upos = upos.into();
        self
    }

    /// Set the language-specific part-of-speech tag
    pub fn xpos(mut self, xpos: impl Into<String>) -> Self {
        self.xpos = xpos.into();
        self
    }

    /// Set the features from a FEATS column string
    pub fn feats(mut self, feats: &str) -> Self {
        self.feats = Features::parse(feats);
        self
    }

    /// Set the head position
    pub fn head(mut self, head: usize) -> Self {
        self.head = head;
        self
    }

    /// Set the dependency relation
    pub fn deprel(mut self, deprel: impl Into<String>) -> Self {
        self.deprel = deprel.into();
        self
    }

    /// Set the miscellaneous annotation from a MISC column string
    pub fn misc(mut self, misc: &str) -> Self {
        self.misc = Misc::parse(misc);
        self
    }

    /// Universal part of the relation (`nsubj` for `nsubj:pass`)
    pub fn udeprel(&self) -> &str {
        match self.deprel.split_once(':') {
            Some((universal, _)) => universal,
            None => &self.deprel,
        }
    }

    /// Language-specific subtype of the relation, if any
    pub fn sdeprel(&self) -> Option<&str> {
        self.deprel.split_once(':').map(|(_, subtype)| subtype)
    }
}

/// A validated dependency tree
///
/// Children lists are built once and kept in ascending `ord`, which makes
/// every "first matching dependent" lookup deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    sent_id: Option<String>,
    text: Option<String>,
    words: Vec<Word>,
    // children[0] holds the dependents of the artificial root
    children: Vec<Vec<usize>>,
}

impl Sentence {
    /// Build a sentence, checking positions and head links
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(TreeError::Empty);
        }

        let len = words.len();
        for (index, word) in words.iter().enumerate() {
            if word.ord != index + 1 {
                return Err(TreeError::InvalidOrd {
                    index,
                    expected: index + 1,
                    found: word.ord,
                });
            }
            if word.head > len {
                return Err(TreeError::HeadOutOfRange {
                    ord: word.ord,
                    head: word.head,
                    len,
                });
            }
            if word.head == word.ord {
                return Err(TreeError::SelfLoop { ord: word.ord });
            }
        }

        check_acyclic(&words)?;

        let mut children = vec![Vec::new(); len + 1];
        for word in &words {
            children[word.head].push(word.ord);
        }

        Ok(Self {
            sent_id: None,
            text: None,
            words,
            children,
        })
    }

    /// Attach a sentence identifier
    pub fn with_sent_id(mut self, sent_id: impl Into<String>) -> Self {
        self.sent_id = Some(sent_id.into());
        self
    }

    /// Attach the sentence text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sentence identifier from the `# sent_id` comment
    pub fn sent_id(&self) -> Option<&str> {
        self.sent_id.as_deref()
    }

    /// Sentence text from the `# text` comment
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// All words in ascending `ord`
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a validated sentence
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at 1-based position `ord`
    pub fn word(&self, ord: usize) -> Option<&Word> {
        ord.checked_sub(1).and_then(|index| self.words.get(index))
    }

    /// Node handle for 1-based position `ord`
    pub fn node(&self, ord: usize) -> Option<NodeRef<'_>> {
        self.word(ord).map(|_| NodeRef::new(self, ord))
    }

    /// Node handles for every word in ascending `ord`
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        (1..=self.words.len()).map(move |ord| NodeRef::new(self, ord))
    }

    /// Words attached to the artificial root
    pub fn roots(&self) -> Vec<NodeRef<'_>> {
        self.dependents(0)
    }

    pub(crate) fn dependents(&self, ord: usize) -> Vec<NodeRef<'_>> {
        self.children
            .get(ord)
            .map(|ords| ords.iter().map(|&child| NodeRef::new(self, child)).collect())
            .unwrap_or_default()
    }
}

fn check_acyclic(words: &[Word]) -> Result<()> {
    const UNVISITED: u8 = 0;
    const ON_PATH: u8 = 1;
    const DONE: u8 = 2;

    let mut state = vec![UNVISITED; words.len() + 1];
    state[0] = DONE;

    let mut path = Vec::new();
    for start in 1..=words.len() {
        let mut current = start;
        while state[current] == UNVISITED {
            state[current] = ON_PATH;
            path.push(current);
            current = words[current - 1].head;
        }
        if state[current] == ON_PATH {
            return Err(TreeError::Cycle { ord: current });
        }
        for ord in path.drain(..) {
            state[ord] = DONE;
        }
    }
    Ok(())
}

/// Fluent constructor for sentences
#[derive(Debug, Default)]
pub struct SentenceBuilder {
    sent_id: Option<String>,
    text: Option<String>,
    words: Vec<Word>,
}

impl SentenceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sentence identifier
    pub fn sent_id(mut self, sent_id: impl Into<String>) -> Self {
        self.sent_id = Some(sent_id.into());
        self
    }

    /// Set the sentence text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a word
    pub fn word(mut self, word: Word) -> Self {
        self.words.push(word);
        self
    }

    /// Append a word in place
    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Number of words collected so far
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were collected
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Validate and build the sentence
    pub fn build(self) -> Result<Sentence> {
        let mut sentence = Sentence::new(self.words)?;
        sentence.sent_id = self.sent_id;
        sentence.text = self.text;
        Ok(sentence)
    }
}
