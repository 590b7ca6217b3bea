//! CoNLL-U reader
//!
//! Builds validated [`Sentence`]s from a treebank stream. Multiword token
//! ranges (`1-2`) and empty nodes (`8.1`) are not part of the basic tree and
//! are skipped.

use crate::error::{EngineError, Result};
use corecoding_core::{Features, Misc, SentenceBuilder, Sentence, Word};
use std::io::BufRead;

const COLUMNS: usize = 10;

/// Iterator over the sentences of a CoNLL-U document
///
/// A malformed sentence yields an error but does not end the iteration:
/// the next call resumes after the following blank line. Lines that are not
/// valid UTF-8 spoil only the sentence they belong to. An I/O error ends
/// the iteration.
pub struct ConlluReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> ConlluReader<R> {
    /// Create a reader over a buffered stream
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> Option<std::io::Result<Vec<u8>>> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = self.buffer.as_slice();
                while let [rest @ .., b'\n' | b'\r'] = line {
                    line = rest;
                }
                Some(Ok(line.to_vec()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<R: BufRead> Iterator for ConlluReader<R> {
    type Item = Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut block = Block::default();
        loop {
            match self.read_line() {
                None => return (!block.is_empty()).then(|| block.into_sentence()),
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
                Some(Ok(bytes)) => {
                    self.line_number += 1;
                    match String::from_utf8(bytes) {
                        Ok(line) => {
                            if line.trim().is_empty() {
                                if block.is_empty() {
                                    continue;
                                }
                                return Some(block.into_sentence());
                            }
                            block.push(self.line_number, line);
                        }
                        Err(e) => block.reject(EngineError::EncodingError(format!(
                            "line {}: {}",
                            self.line_number,
                            e.utf8_error()
                        ))),
                    }
                }
            }
        }
    }
}

/// Raw lines of one sentence
#[derive(Default)]
struct Block {
    lines: Vec<(usize, String)>,
    // first undecodable line, which spoils the whole sentence
    error: Option<EngineError>,
}

impl Block {
    fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.error.is_none()
    }

    fn push(&mut self, line_number: usize, line: String) {
        self.lines.push((line_number, line));
    }

    fn reject(&mut self, error: EngineError) {
        self.error.get_or_insert(error);
    }

    fn into_sentence(self) -> Result<Sentence> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let start = self.lines.first().map_or(0, |(number, _)| *number);
        let mut builder = SentenceBuilder::new();

        for (number, line) in &self.lines {
            if let Some(comment) = line.strip_prefix('#') {
                if let Some((key, value)) = comment.split_once('=') {
                    match key.trim() {
                        "sent_id" => builder = builder.sent_id(value.trim()),
                        "text" => builder = builder.text(value.trim()),
                        _ => {}
                    }
                }
                continue;
            }

            if let Some(word) = parse_word(*number, line)? {
                builder.push(word);
            }
        }

        if builder.is_empty() {
            return Err(EngineError::Parse {
                line: start,
                reason: "sentence has no word lines".to_string(),
            });
        }

        builder
            .build()
            .map_err(|source| EngineError::InvalidTree {
                line: start,
                source,
            })
    }
}

/// Parse one word line, returning `None` for multiword tokens and empty nodes
pub fn parse_word(line_number: usize, line: &str) -> Result<Option<Word>> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != COLUMNS {
        return Err(EngineError::Parse {
            line: line_number,
            reason: format!(
                "expected {COLUMNS} tab-separated columns, found {}",
                columns.len()
            ),
        });
    }

    let id = columns[0];
    if id.contains('-') || id.contains('.') {
        return Ok(None);
    }

    let ord = parse_position(line_number, "ID", id)?;
    let head = parse_position(line_number, "HEAD", columns[6])?;

    Ok(Some(Word {
        ord,
        form: columns[1].to_string(),
        lemma: optional(columns[2]),
        upos: optional(columns[3]),
        xpos: optional(columns[4]),
        feats: Features::parse(columns[5]),
        head,
        deprel: optional(columns[7]),
        deps: optional(columns[8]),
        misc: Misc::parse(columns[9]),
    }))
}

fn parse_position(line_number: usize, column: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| EngineError::Parse {
        line: line_number,
        reason: format!("{column} column is not a non-negative integer: '{value}'"),
    })
}

fn optional(value: &str) -> String {
    if value == "_" {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corecoding_core::TreeNode;

    const SAMPLE: &str = "# sent_id = s1
# text = She didn't go.
1\tShe\tshe\tPRON\tPRP\tCase=Nom|Number=Sing|Person=3\t4\tnsubj\t_\t_
2-3\tdidn't\t_\t_\t_\t_\t_\t_\t_\t_
2\tdid\tdo\tAUX\tVBD\tMood=Ind|Tense=Past|VerbForm=Fin\t4\taux\t_\t_
3\tn't\tnot\tPART\tRB\t_\t4\tadvmod\t_\t_
4\tgo\tgo\tVERB\tVB\tVerbForm=Inf\t0\troot\t_\tSpaceAfter=No
5\t.\t.\tPUNCT\t.\t_\t4\tpunct\t_\t_

";

    #[test]
    fn test_reads_sentence_and_metadata() {
        let sentences: Vec<_> = ConlluReader::new(SAMPLE.as_bytes())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(sentences.len(), 1);

        let sentence = &sentences[0];
        assert_eq!(sentence.sent_id(), Some("s1"));
        assert_eq!(sentence.text(), Some("She didn't go."));
        assert_eq!(sentence.len(), 5);

        let root = sentence.roots()[0];
        assert_eq!(root.form(), "go");
        assert_eq!(root.children().len(), 4);
        assert_eq!(root.misc().get("SpaceAfter"), "No");
    }

    #[test]
    fn test_underscore_columns_become_empty() {
        let word = parse_word(1, "1\t_\t_\t_\t_\t_\t0\troot\t_\t_")
            .unwrap()
            .unwrap();
        assert_eq!(word.form, "_");
        assert_eq!(word.lemma, "");
        assert_eq!(word.upos, "");
        assert!(word.feats.is_empty());
        assert!(word.misc.is_empty());
    }

    #[test]
    fn test_empty_nodes_are_skipped() {
        assert!(parse_word(1, "8.1\tgo\tgo\tVERB\t_\t_\t_\t_\t5:conj\t_")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_wrong_column_count() {
        let err = parse_word(7, "1\tword\tword").unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 7, .. }));
    }

    #[test]
    fn test_non_numeric_head() {
        let err = parse_word(3, "1\tgo\tgo\tVERB\t_\t_\tx\troot\t_\t_").unwrap_err();
        assert!(err.to_string().contains("HEAD"));
    }

    #[test]
    fn test_recovers_after_bad_sentence() {
        let text = "1\tbad\tbad\tNOUN\n\n# sent_id = ok\n1\tgood\tgood\tADJ\t_\t_\t0\troot\t_\t_\n";
        let results: Vec<_> = ConlluReader::new(text.as_bytes()).collect();
        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(EngineError::Parse { line: 1, .. })));
        assert_eq!(results[1].as_ref().unwrap().sent_id(), Some("ok"));
    }

    #[test]
    fn test_invalid_tree_reports_start_line() {
        let text = "\n\n# sent_id = cyclic\n1\ta\ta\tX\t_\t_\t2\tdep\t_\t_\n2\tb\tb\tX\t_\t_\t1\tdep\t_\t_\n";
        let results: Vec<_> = ConlluReader::new(text.as_bytes()).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(EngineError::InvalidTree { line: 3, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_skips_only_its_sentence() {
        let mut bytes = b"# sent_id = \xff\xfe\n".to_vec();
        bytes.extend_from_slice(b"1\tgo\tgo\tVERB\t_\t_\t0\troot\t_\t_\n\n");
        bytes.extend_from_slice(b"# sent_id = s2\n");
        bytes.extend_from_slice(b"1\tcame\tcome\tVERB\t_\t_\t0\troot\t_\t_\n");
        bytes.extend_from_slice(b"2\t\xc3\tx\tX\t_\t_\t1\tdep\t_\t_\n\n");
        bytes.extend_from_slice(b"# sent_id = s3\n");
        bytes.extend_from_slice(b"1\tleft\tleave\tVERB\t_\t_\t0\troot\t_\t_\n");

        let mut reader = ConlluReader::new(&bytes[..]);

        let first = reader.next().unwrap().unwrap_err();
        assert!(first.is_recoverable());
        assert!(first.to_string().contains("line 1"));

        // the bad word line does not split its sentence in two
        let second = reader.next().unwrap().unwrap_err();
        assert!(matches!(second, EngineError::EncodingError(_)));
        assert!(second.to_string().contains("line 6"));

        let third = reader.next().unwrap().unwrap();
        assert_eq!(third.sent_id(), Some("s3"));
        assert_eq!(third.len(), 1);

        assert!(reader.next().is_none());
        assert_eq!(reader.line_number(), 9);
    }

    #[test]
    fn test_io_error_ends_iteration() {
        struct Broken;

        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "device gone"))
            }
        }

        let mut reader = ConlluReader::new(std::io::BufReader::new(Broken));
        assert!(matches!(reader.next(), Some(Err(EngineError::IoError(_)))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_windows_line_endings() {
        let text = "1\tgo\tgo\tVERB\t_\tVerbForm=Inf\t0\troot\t_\t_\r\n\r\n";
        let sentences: Vec<_> = ConlluReader::new(text.as_bytes())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(sentences[0].words()[0].misc.len(), 0);
        assert_eq!(sentences[0].words()[0].feats.get("VerbForm"), "Inf");
    }
}
