//! Output formatting module

use anyhow::Result;
use corecoding_engine::SentenceReport;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output the report lines of one sentence
    fn write_sentence(&mut self, sentence: &SentenceReport) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
