//! Treebank processing for core argument classification
//!
//! This crate reads CoNLL-U documents, drives the clause classifier over
//! every node of every sentence, and coordinates sequential or parallel
//! execution while preserving document order.

#![warn(missing_docs)]

pub mod config;
pub mod conllu;
pub mod error;
pub mod executor;
pub mod input;
pub mod processor;

// Re-export key types
pub use config::EngineConfig;
pub use conllu::ConlluReader;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor, NodeReport, SentenceReport};
pub use input::Input;
pub use processor::{CorpusProcessor, CorpusProcessorBuilder, ProcessingStats};

// Re-export from core for convenience
pub use corecoding_core::{ArgCategory, ClassifierConfig, ClauseClassifier, Report, Sentence};
