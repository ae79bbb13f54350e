pub mod classify;
pub mod dictionary;
pub mod matcher;
pub mod tokenizer;

use crate::error::{Error, Result};
use crate::{Config, FileReport, Misspelling};
use dictionary::Dictionary;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tokenizer::{normalize, Candidate, Tokens};

pub struct SpellChecker {
    dictionary: Dictionary,
    max_word_length: usize,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary, config: &Config) -> Self {
        Self {
            dictionary,
            max_word_length: config.max_word_length,
        }
    }

    /// Check one file. Failing to read it is an error for this file only.
    pub fn check_file(&self, path: &Path) -> Result<FileReport> {
        let bytes = fs::read(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        let misspellings = self.check_str(&content);

        log::debug!(
            "{}: {} misspelling(s)",
            path.display(),
            misspellings.len()
        );

        Ok(FileReport { misspellings })
    }

    /// Check a batch of files, one result per path in input order.
    pub fn check_files(&self, paths: &[PathBuf], parallel: bool) -> Vec<Result<FileReport>> {
        if parallel {
            paths.par_iter().map(|p| self.check_file(p)).collect()
        } else {
            paths.iter().map(|p| self.check_file(p)).collect()
        }
    }

    pub fn check_str(&self, content: &str) -> Vec<Misspelling> {
        content
            .lines()
            .enumerate()
            .flat_map(|(idx, line)| self.check_line(line, idx + 1))
            .collect()
    }

    pub fn check_line(&self, line: &str, line_number: usize) -> Vec<Misspelling> {
        Tokens::new(line)
            .filter_map(|token| {
                let candidate = normalize(token)?;
                if self.is_valid(&candidate) {
                    return None;
                }
                Some(Misspelling {
                    line: line_number,
                    column: candidate.column + 1,
                    word: token.text.to_string(),
                })
            })
            .collect()
    }

    fn is_valid(&self, candidate: &Candidate<'_>) -> bool {
        if candidate.word.len() > self.max_word_length {
            log::trace!("rejecting over-long word {:?}", candidate.word);
            return false;
        }

        if candidate.hyphenated {
            candidate
                .segments()
                .all(|segment| matcher::is_known(segment, &self.dictionary))
        } else {
            matcher::is_known(candidate.word, &self.dictionary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn checker(words: &[&str]) -> SpellChecker {
        let dictionary = Dictionary::from_words(words.iter().copied()).unwrap();
        SpellChecker::new(dictionary, &Config::default())
    }

    fn report(line: usize, column: usize, word: &str) -> Misspelling {
        Misspelling {
            line,
            column,
            word: word.to_string(),
        }
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let checker = checker(&["Hello", "world"]);
        assert!(checker.check_line("Hello, world!!", 1).is_empty());
        assert_eq!(
            checker.check_line("Hello, wrold!!", 1),
            vec![report(1, 8, "wrold!!")]
        );
    }

    #[test]
    fn test_column_skips_leading_punctuation() {
        let checker = checker(&["quote"]);
        assert_eq!(
            checker.check_line("  \"qoute\"", 3),
            vec![report(3, 4, "\"qoute\"")]
        );
    }

    #[test]
    fn test_hyphenated_compound() {
        let checker = checker(&["well", "known"]);
        assert!(checker.check_line("a well-known fact", 1).len() == 2);
        assert!(checker.check_line("well-known", 1).is_empty());
        assert!(checker.check_line("Well-Known", 1).is_empty());
        assert_eq!(
            checker.check_line("well-unknownxyz.", 1),
            vec![report(1, 1, "well-unknownxyz.")]
        );
    }

    #[test]
    fn test_leading_hyphen_segment_is_looked_up() {
        assert_eq!(
            checker(&["abc"]).check_line("-abc", 1),
            vec![report(1, 1, "-abc")]
        );
        assert!(checker(&["abc", ""]).check_line("-abc", 1).is_empty());
    }

    #[test]
    fn test_numbers_and_symbols_are_skipped() {
        let checker = checker(&[]);
        assert!(checker.check_line("123 -45 3. +7 ... --- (42", 1).is_empty());
        assert_eq!(checker.check_line("12.3", 1), vec![report(1, 1, "12.3")]);
    }

    #[test]
    fn test_end_to_end_content() {
        let checker = checker(&["cat", "dog"]);
        let misspellings = checker.check_str("I have a Cat and a dogg\n");

        let words: Vec<_> = misspellings.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["I", "have", "a", "and", "a", "dogg"]);

        let dogg = misspellings.last().unwrap();
        assert_eq!((dogg.line, dogg.column), (1, 20));
    }

    #[test]
    fn test_line_numbers() {
        let checker = checker(&["ok"]);
        assert_eq!(
            checker.check_str("ok\n\nok nope\r\n"),
            vec![report(3, 4, "nope")]
        );
    }

    #[test]
    fn test_over_long_word_rejected() {
        let long = "a".repeat(46);
        let checker = checker(&[long.as_str(), "b"]);
        assert_eq!(checker.check_line(&long, 1), vec![report(1, 1, &long)]);
        assert!(checker.check_line(&long[..45], 1).len() == 1);
        assert!(checker.check_line("b", 1).is_empty());
    }

    #[test]
    fn test_check_file_is_idempotent() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "the quick brwn fox").unwrap();
        writeln!(file, "jumps ovr").unwrap();

        let checker = checker(&["the", "quick", "fox", "jumps"]);
        let first = checker.check_file(file.path()).unwrap();
        let second = checker.check_file(file.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.misspellings,
            vec![report(1, 11, "brwn"), report(2, 7, "ovr")]
        );
    }

    #[test]
    fn test_missing_file_is_recoverable_error() {
        let dir = tempfile::tempdir().unwrap();
        let checker = checker(&["word"]);
        let result = checker.check_file(&dir.path().join("gone.txt"));
        assert!(matches!(result, Err(Error::FileOpen { .. })));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for i in 0..8 {
            let path = dir.path().join(format!("{i}.txt"));
            fs::write(&path, format!("word numbr {i}\nwrd\n")).unwrap();
            paths.push(path);
        }
        paths.push(dir.path().join("missing.txt"));

        let checker = checker(&["word"]);
        let sequential = checker.check_files(&paths, false);
        let parallel = checker.check_files(&paths, true);

        assert_eq!(sequential.len(), parallel.len());
        for (a, b) in sequential.iter().zip(&parallel) {
            match (a, b) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(_), Err(_)) => {}
                _ => panic!("sequential and parallel results differ"),
            }
        }
        assert!(parallel.last().unwrap().is_err());
    }
}
