//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use corecoding_engine::Input;
use glob::glob;
use std::fmt;
use std::path::PathBuf;

/// Pattern that selects standard input
pub const STDIN_PATTERN: &str = "-";

/// A treebank to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A CoNLL-U file
    File(PathBuf),
}

impl InputSource {
    /// Convert into an engine input
    pub fn into_input(self) -> Input {
        match self {
            InputSource::Stdin => Input::from_reader(std::io::stdin()),
            InputSource::File(path) => Input::from_file(path),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve input arguments, where `-` stands for standard input
///
/// Standard input, if requested, comes first; files follow sorted.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<&String>, Vec<&String>) = patterns
        .iter()
        .partition(|pattern| pattern.as_str() == STDIN_PATTERN);

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }
    if !patterns.is_empty() {
        let patterns: Vec<String> = patterns.into_iter().cloned().collect();
        sources.extend(resolve_patterns(&patterns)?.into_iter().map(InputSource::File));
    }
    Ok(sources)
}

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let before = files.len();
        for path_result in paths {
            let path = path_result
                .map_err(|e| CliError::FileNotFound(format!("{pattern} ({e})")))?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_glob_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        for name in ["b.conllu", "a.conllu", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = resolve_patterns(&[
            pattern(&dir, "*.conllu"),
            pattern(&dir, "a.conllu"),
        ])
        .unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.conllu"), dir.path().join("b.conllu")]
        );
    }

    #[test]
    fn test_missing_file_reported() {
        let dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&dir, "missing.conllu")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_stdin_comes_first() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.conllu"), "").unwrap();

        let sources =
            resolve_inputs(&[pattern(&dir, "a.conllu"), "-".to_string(), "-".to_string()])
                .unwrap();

        assert_eq!(
            sources,
            vec![
                InputSource::Stdin,
                InputSource::File(dir.path().join("a.conllu"))
            ]
        );
        assert_eq!(sources[0].to_string(), "<stdin>");
    }
}
