//! Token shape predicates.
//!
//! Everything here is ASCII-only: bytes outside ASCII are neither upper nor
//! lower case letters nor digits.

/// Coarse shape of a token, as used by the matcher's capitalization rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Number,
    AllLowercase,
    AllUppercase,
    Capitalized,
    Mixed,
}

/// Classify a token. An earlier shape wins when several predicates hold.
pub fn classify(token: &str) -> Shape {
    if is_number(token) {
        Shape::Number
    } else if is_all_uppercase(token) {
        Shape::AllUppercase
    } else if is_capitalized(token) {
        Shape::Capitalized
    } else if is_all_lowercase(token) {
        Shape::AllLowercase
    } else {
        Shape::Mixed
    }
}

/// Optional sign, then one or more digits, then at most one trailing '.'.
pub fn is_number(token: &str) -> bool {
    let digits = token
        .strip_prefix(['+', '-'])
        .unwrap_or(token);
    let digits = digits.strip_suffix('.').unwrap_or(digits);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Every byte is an uppercase letter; digits and punctuation disqualify.
pub fn is_all_uppercase(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_uppercase())
}

/// Uppercase first letter, at least one more character, no other uppercase.
pub fn is_capitalized(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            first.is_ascii_uppercase()
                && !rest.is_empty()
                && !rest.iter().any(|b| b.is_ascii_uppercase())
        }
        None => false,
    }
}

/// No uppercase letters; anything that is not a letter is ignored.
pub fn is_all_lowercase(token: &str) -> bool {
    !token.bytes().any(|b| b.is_ascii_uppercase())
}
