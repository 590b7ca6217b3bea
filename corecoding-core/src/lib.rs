//! Core argument coding classification for dependency trees
//!
//! This crate inspects clause heads in Universal Dependencies trees and
//! reports how a language encodes its core grammatical relations: which
//! word class and case marks the subject, object and indirect object, which
//! adpositions govern them, the linear order of the verb and its arguments,
//! and which morphological features the verb uses to agree with them.
//!
//! # Architecture
//!
//! - **Tree layer**: an arena-backed sentence model with total feature lookups
//! - **Domain layer**: the classification procedure, split into the clause
//!   classifier, argument describer, lemma resolver and order tagger
//! - **Configuration**: category filter and finiteness strategy
//!
//! # Example
//!
//! ```rust
//! use corecoding_core::{ClassifierConfig, ClauseClassifier, SentenceBuilder, Word};
//!
//! let sentence = SentenceBuilder::new()
//!     .word(Word::new(1, "She").upos("PRON").feats("Case=Nom").head(2).deprel("nsubj"))
//!     .word(Word::new(2, "sleeps").upos("VERB").feats("Number=Sing|Person=3|VerbForm=Fin").deprel("root"))
//!     .build()
//!     .unwrap();
//!
//! let classifier = ClauseClassifier::new(ClassifierConfig::default()).unwrap();
//! let head = sentence.node(2).unwrap();
//! let lines: Vec<String> = classifier.classify(&head).iter().map(|r| r.to_string()).collect();
//!
//! assert_eq!(lines[0], "SUBJECT finite nsubj PRON+Nom SV");
//! assert_eq!(lines[1], "AGREEMENT finite Number=Sing|Person=3");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error;
pub mod tree;

pub use config::{ArgCategory, ClassifierConfig, ClassifierConfigBuilder};
pub use domain::{
    describe_argument, order_tag, resolve_lemma, AgreementMatcher, ArgumentDescriptor,
    ArgumentReport, ClauseClassifier, ClauseType, Report, Role, RoleMap, WordClass,
};
pub use error::{ConfigError, TreeError};
pub use tree::{AttributeMap, Features, Misc, NodeRef, Sentence, SentenceBuilder, TreeNode, Word};
