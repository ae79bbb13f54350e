pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod walk;

pub use checker::dictionary::Dictionary;
pub use checker::SpellChecker;
pub use config::Config;
pub use error::{Error, Result};

use serde::Serialize;

/// A word that failed the dictionary check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misspelling {
    /// 1-based line number
    pub line: usize,
    /// 1-based byte column of the first kept character
    pub column: usize,
    /// The token exactly as written, punctuation included
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub misspellings: Vec<Misspelling>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        !self.misspellings.is_empty()
    }
}
