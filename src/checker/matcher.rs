use super::classify::{classify, Shape};
use super::dictionary::Dictionary;

/// Decide whether a cleaned word is spelled correctly.
///
/// An exact match always wins. A case-insensitive match is only accepted
/// when the word is written in all caps or capitalized, so `NASA` and
/// `Paris` match the entry `paris`, while `pARIS` does not and a stored
/// `Paris` still rejects `paris`.
pub fn is_known(word: &str, dictionary: &Dictionary) -> bool {
    if dictionary.contains_exact(word) {
        return true;
    }

    let folded_match = dictionary.contains_case_insensitive(word)
        || dictionary.contains_case_insensitive(&title_variant(word));

    folded_match && matches!(classify(word), Shape::AllUppercase | Shape::Capitalized)
}

/// Every character after the first lowercased; the first is left alone.
fn title_variant(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut variant = String::with_capacity(word.len());
            variant.push(first);
            variant.extend(chars.map(|c| c.to_ascii_lowercase()));
            variant
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied()).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let d = dict(&["hello", "Paris", "iPhone"]);
        assert!(is_known("hello", &d));
        assert!(is_known("Paris", &d));
        assert!(is_known("iPhone", &d));
    }

    #[test]
    fn test_capitalized_and_uppercase_match_lowercase_entry() {
        let d = dict(&["paris", "nasa"]);
        assert!(is_known("Paris", &d));
        assert!(is_known("PARIS", &d));
        assert!(is_known("NASA", &d));
        assert!(is_known("Nasa", &d));
    }

    #[test]
    fn test_mixed_case_rejected() {
        let d = dict(&["paris"]);
        assert!(!is_known("pARIS", &d));
        assert!(!is_known("PaRiS", &d));
    }

    #[test]
    fn test_proper_noun_requires_capital() {
        let d = dict(&["Paris"]);
        assert!(!is_known("paris", &d));
        assert!(is_known("PARIS", &d));
    }

    #[test]
    fn test_single_letters() {
        let d = dict(&["a", "i"]);
        assert!(is_known("a", &d));
        assert!(is_known("I", &d));
        assert!(is_known("A", &d));
        assert!(!is_known("b", &d));
    }

    #[test]
    fn test_unknown_word() {
        let d = dict(&["cat", "dog"]);
        assert!(!is_known("dogg", &d));
        assert!(!is_known("DOGG", &d));
    }

    #[test]
    fn test_empty_word_needs_empty_entry() {
        assert!(!is_known("", &dict(&["cat"])));
        assert!(is_known("", &dict(&["cat", ""])));
    }

    #[test]
    fn test_title_variant() {
        assert_eq!(title_variant("hELLO"), "hello");
        assert_eq!(title_variant("HELLO"), "Hello");
        assert_eq!(title_variant(""), "");
    }
}
