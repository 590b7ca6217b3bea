//! Input abstraction for treebank processing
//!
//! Provides a unified interface for reading CoNLL-U from various sources.

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::PathBuf;

/// Unified input abstraction
pub enum Input {
    /// CoNLL-U text held in memory
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (for stdin, network, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_tuple("Text")
                .field(&format!("<{} bytes>", text.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from CoNLL-U text
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Open the input as a buffered line source
    pub fn into_reader(self) -> Result<Box<dyn BufRead + Send>> {
        match self {
            Input::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
            Input::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    EngineError::IoError(format!("Failed to open file {}: {e}", path.display()))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Input::Reader(reader) => Ok(Box::new(BufReader::new(reader))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read_all(input: Input) -> String {
        let mut text = String::new();
        input.into_reader().unwrap().read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_text_input() {
        assert_eq!(read_all(Input::from_text("1\ta")), "1\ta");
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# sent_id = f1").unwrap();
        assert_eq!(read_all(Input::from_file(file.path())), "# sent_id = f1");
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/corpus.conllu")
            .into_reader()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(Cursor::new(b"abc".to_vec()));
        assert_eq!(read_all(input), "abc");
        assert!(format!("{:?}", Input::from_text("xy")).contains("2 bytes"));
    }
}
