//! Problem input: counts header followed by accepted and rejected words.
//!
//! Format (whitespace separated tokens, line breaks not significant):
//! ```text
//! <accepted_count> <rejected_count> <max_word_length>
//! <accepted_1> ... <accepted_n>
//! <rejected_1> ... <rejected_m>
//! ```

use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemInput {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
    /// Declared maximum word length; informational only
    pub max_word_length: usize,
}

impl ProblemInput {
    pub fn new(accepted: Vec<String>, rejected: Vec<String>) -> Self {
        let max_word_length = accepted
            .iter()
            .chain(&rejected)
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0);
        Self {
            accepted,
            rejected,
            max_word_length,
        }
    }

    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let content = fs::read_to_string(path).with_path_context("read input", path)?;
        Self::parse(&content)
    }

    /// Parses the counts header and the declared number of words.
    ///
    /// Fails on a missing or non-numeric count and on too few words.
    pub fn parse(content: &str) -> ApplicationResult<Self> {
        let mut tokens = content.split_whitespace();
        let accepted_count = next_count(&mut tokens, "accepted count")?;
        let rejected_count = next_count(&mut tokens, "rejected count")?;
        let max_word_length = next_count(&mut tokens, "max word length")?;

        let accepted = take_words(&mut tokens, accepted_count, "accepted")?;
        let rejected = take_words(&mut tokens, rejected_count, "rejected")?;

        let trailing = tokens.count();
        if trailing > 0 {
            debug!("ignoring {} trailing tokens", trailing);
        }

        for word in accepted.iter().chain(&rejected) {
            if word.chars().count() > max_word_length {
                warn!(
                    "word {:?} is longer than declared max length {}",
                    word, max_word_length
                );
            }
        }

        Ok(Self {
            accepted,
            rejected,
            max_word_length,
        })
    }
}

fn next_count(tokens: &mut SplitWhitespace<'_>, what: &str) -> ApplicationResult<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| ApplicationError::invalid_input(format!("missing {}", what)))?;
    token.parse().map_err(|_| {
        ApplicationError::invalid_input(format!("{} is not a non-negative integer: {:?}", what, token))
    })
}

fn take_words(
    tokens: &mut SplitWhitespace<'_>,
    count: usize,
    what: &str,
) -> ApplicationResult<Vec<String>> {
    let words: Vec<String> = tokens.by_ref().take(count).map(str::to_string).collect();
    if words.len() < count {
        return Err(ApplicationError::invalid_input(format!(
            "expected {} {} words, found {}",
            count,
            what,
            words.len()
        )));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words_across_lines() {
        let input = ProblemInput::parse("2 1 3\ncat car\n\nca\n").unwrap();
        assert_eq!(input.accepted, vec!["cat", "car"]);
        assert_eq!(input.rejected, vec!["ca"]);
        assert_eq!(input.max_word_length, 3);
    }

    #[test]
    fn test_new_derives_max_length() {
        let input = ProblemInput::new(vec!["abc".into()], vec!["abcdef".into()]);
        assert_eq!(input.max_word_length, 6);
    }
}
