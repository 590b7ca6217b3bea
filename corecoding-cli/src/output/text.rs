//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use corecoding_engine::SentenceReport;
use std::io::Write;

/// Plain text formatter - outputs one report per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn write_sentence(&mut self, sentence: &SentenceReport) -> Result<()> {
        for node in &sentence.reports {
            writeln!(self.writer, "{}", node.report)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
