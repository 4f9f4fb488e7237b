//! Output grammar: fragments, literals, character classes and sentinels.

use std::fmt;

/// Suffix wildcard: anything may follow.
pub const WILDCARD: &str = ".*";
pub const ALTERNATION: char = '|';
/// Option meaning "stop here": matches the empty continuation.
pub const EMPTY_OPTION: &str = "()";
/// Whole-pattern sentinel for "matches nothing" (no accepted words).
pub const MATCH_NOTHING: &str = "()";
/// Whole-pattern sentinel for "matches only the empty string".
pub const MATCH_EMPTY: &str = "()";

/// Pattern text produced for one subtree.
///
/// Besides the text, a fragment remembers whether synthesis put an alternation
/// into it and whether it already ends in the wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    alternation: bool,
    open: bool,
}

impl Fragment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(text: String, alternation: bool, open: bool) -> Self {
        Self {
            text,
            alternation,
            open,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn has_alternation(&self) -> bool {
        self.alternation
    }

    /// Ends in the suffix wildcard.
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn with_wildcard(mut self) -> Self {
        self.text.push_str(WILDCARD);
        self.open = true;
        self
    }

    /// `(self|())`: also allow stopping before this fragment.
    pub fn or_empty(self) -> Self {
        if self.is_empty() {
            return Self::new(EMPTY_OPTION.to_string(), false, false);
        }
        Self::new(
            format!("({}{}{})", self.text, ALTERNATION, EMPTY_OPTION),
            true,
            false,
        )
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders characters of accepted words into pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Escape characters that are special in the pattern syntax
    pub escape: bool,
}

impl Default for Grammar {
    fn default() -> Self {
        Self { escape: true }
    }
}

impl Grammar {
    pub fn new(escape: bool) -> Self {
        Self { escape }
    }

    pub fn push_char(&self, out: &mut String, c: char) {
        if self.escape {
            let mut buf = [0u8; 4];
            out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        } else {
            out.push(c);
        }
    }

    pub fn word(&self, word: &str) -> String {
        if self.escape {
            regex::escape(word)
        } else {
            word.to_string()
        }
    }

    /// A single literal for one character, a bracketed class for several.
    ///
    /// `chars` must already be sorted and free of duplicates.
    pub fn class(&self, chars: &[char]) -> String {
        let mut out = String::new();
        match chars {
            [single] => self.push_char(&mut out, *single),
            _ => {
                out.push('[');
                for &c in chars {
                    self.push_char(&mut out, c);
                }
                out.push(']');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_rendering() {
        let g = Grammar::new(true);
        assert_eq!(g.class(&['a']), "a");
        assert_eq!(g.class(&['r', 't']), "[rt]");
        assert_eq!(g.class(&['.', ']']), r"[\.\]]");
        assert_eq!(Grammar::new(false).class(&['.', ']']), "[.]]");
    }

    #[test]
    fn test_word_escaping() {
        assert_eq!(Grammar::new(true).word("a|b"), r"a\|b");
        assert_eq!(Grammar::new(false).word("a|b"), "a|b");
    }

    #[test]
    fn test_or_empty() {
        assert_eq!(Fragment::empty().or_empty().as_str(), "()");
        let f = Fragment::new("b".into(), false, false).or_empty();
        assert_eq!(f.as_str(), "(b|())");
        assert!(f.has_alternation());
    }

    #[test]
    fn test_with_wildcard_marks_open() {
        let f = Fragment::empty().with_wildcard();
        assert_eq!(f.as_str(), ".*");
        assert!(f.is_open());
    }
}
