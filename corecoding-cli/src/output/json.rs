//! JSON lines output formatter

use super::OutputFormatter;
use anyhow::Result;
use corecoding_engine::SentenceReport;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one JSON object per report line
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportData {
    /// Sentence identifier, if the input provided one
    pub sent_id: Option<String>,
    /// 1-based position of the sentence in its document
    pub sentence: usize,
    /// Position of the clause head
    pub ord: usize,
    /// Report category (subj, obj, iobj or agreement)
    pub category: String,
    /// The report line as printed by the text format
    pub line: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn write_sentence(&mut self, sentence: &SentenceReport) -> Result<()> {
        for node in &sentence.reports {
            let data = ReportData {
                sent_id: sentence.sent_id.clone(),
                sentence: sentence.index + 1,
                ord: node.ord,
                category: node.report.category().to_string(),
                line: node.report.to_string(),
            };
            serde_json::to_writer(&mut self.writer, &data)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
