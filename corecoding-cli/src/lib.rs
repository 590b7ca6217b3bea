//! Corecoding CLI library
//!
//! This library provides the command-line interface for classifying the
//! core argument coding of clauses in CoNLL-U treebanks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
