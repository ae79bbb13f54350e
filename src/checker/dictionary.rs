use crate::error::{Error, Result};
use fst::Set;
use std::fs;
use std::path::Path;

/// Immutable word list with exact and ASCII case-insensitive lookup.
///
/// Words keep their case as stored, so `Paris` and `paris` are distinct
/// entries. Two FST sets back the lookups: one over the words as written,
/// one over their ASCII-lowercased forms.
pub struct Dictionary {
    exact: Set<Vec<u8>>,
    folded: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load a word list with one word per line.
    ///
    /// Only the line terminator is removed. Blank lines become the empty
    /// word, which a few token shapes (a leading hyphen, for instance) end
    /// up looking for.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(content.lines())?;
        log::debug!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Build a dictionary from any word iterator; order and duplicates do not matter.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact: Vec<String> = Vec::new();
        let mut folded: Vec<String> = Vec::new();

        for word in words {
            let word = word.as_ref();
            folded.push(word.to_ascii_lowercase());
            exact.push(word.to_string());
        }

        Ok(Self {
            exact: build_set(exact)?,
            folded: build_set(folded)?,
        })
    }

    pub fn contains_exact(&self, word: &str) -> bool {
        self.exact.contains(word.as_bytes())
    }

    pub fn contains_case_insensitive(&self, word: &str) -> bool {
        self.folded.contains(word.to_ascii_lowercase().as_bytes())
    }

    /// Number of distinct words as stored.
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

fn build_set(mut keys: Vec<String>) -> Result<Set<Vec<u8>>> {
    // FST construction requires sorted, unique keys
    keys.sort();
    keys.dedup();
    Ok(Set::from_iter(keys)?)
}
