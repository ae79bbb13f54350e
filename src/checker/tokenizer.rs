use super::classify::is_number;

/// Longest cleaned word accepted for lookup, in bytes.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 45;

/// A whitespace-delimited piece of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// 0-based byte offset of the first character in the line
    pub start: usize,
}

/// Lazily splits a line on spaces and tabs.
pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.line.as_bytes();

        while self.pos < bytes.len() && is_separator(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && !is_separator(bytes[self.pos]) {
            self.pos += 1;
        }

        Some(Token {
            text: &self.line[start..self.pos],
            start,
        })
    }
}

fn is_separator(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// A token with its surrounding punctuation stripped, ready for lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// 0-based byte offset of the first kept character in the line
    pub column: usize,
    pub word: &'a str,
    pub hyphenated: bool,
}

impl<'a> Candidate<'a> {
    /// Pieces between hyphens; adjacent or leading hyphens yield empty segments.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.word.split('-')
    }
}

/// Strip leading and trailing punctuation from a token.
///
/// Leading characters that are neither alphanumeric nor '-' are skipped.
/// Returns `None` when what remains is empty, only hyphens, or a number.
/// Otherwise the word runs over alphanumerics and any hyphen directly
/// followed by an alphanumeric, and ends at the first other character.
pub fn normalize(token: Token<'_>) -> Option<Candidate<'_>> {
    let text = token.text;
    let bytes = text.as_bytes();

    let lead = bytes
        .iter()
        .take_while(|&&b| !b.is_ascii_alphanumeric() && b != b'-')
        .count();
    let rest = &text[lead..];

    if rest.is_empty() || rest.bytes().all(|b| b == b'-') || is_number(rest) {
        return None;
    }

    let rest_bytes = rest.as_bytes();
    let mut end = 0;
    let mut hyphenated = false;
    while end < rest_bytes.len() {
        let b = rest_bytes[end];
        if b.is_ascii_alphanumeric() {
            end += 1;
        } else if b == b'-'
            && rest_bytes
                .get(end + 1)
                .is_some_and(|next| next.is_ascii_alphanumeric())
        {
            hyphenated = true;
            end += 1;
        } else {
            break;
        }
    }

    Some(Candidate {
        column: token.start + lead,
        word: &rest[..end],
        hyphenated,
    })
}
