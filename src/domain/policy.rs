//! Top-level policy: generalize when safe, enumerate otherwise.

use std::fmt;

use itertools::Itertools;
use tracing::{info, instrument, warn};

use crate::domain::conflict::find_conflict;
use crate::domain::pattern::{Grammar, ALTERNATION, MATCH_EMPTY, MATCH_NOTHING};
use crate::domain::synthesizer::{SynthesisOptions, Synthesizer};
use crate::domain::trie::Trie;

/// Which branch of the policy produced the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationKind {
    /// No accepted words
    MatchNothing,
    /// Only the empty word is accepted
    MatchEmpty,
    /// Synthesized from the tree, no conflict found
    Generalized,
    /// A rejected word collided with the tree; literal alternation of accepted words
    Fallback { conflict: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub kind: DerivationKind,
    pub pattern: String,
}

impl Derivation {
    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, DerivationKind::Fallback { .. })
    }

    pub fn matches_nothing(&self) -> bool {
        self.kind == DerivationKind::MatchNothing
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Derives the pattern for `accepted` guarded by `rejected`.
///
/// Never fails: every input shape maps to one of the `DerivationKind` branches.
#[instrument(level = "debug", skip_all, fields(accepted = accepted.len(), rejected = rejected.len()))]
pub fn derive_pattern<S: AsRef<str>>(
    accepted: &[S],
    rejected: &[S],
    options: SynthesisOptions,
) -> Derivation {
    if accepted.is_empty() {
        info!("no accepted words");
        return Derivation {
            kind: DerivationKind::MatchNothing,
            pattern: MATCH_NOTHING.to_string(),
        };
    }

    let trie = Trie::from_words(accepted);
    let candidate = Synthesizer::new(&trie, options).synthesize();

    if let Some(word) = find_conflict(&trie, rejected) {
        warn!("rejected word {:?} is accepted, falling back to enumeration", word);
        return Derivation {
            kind: DerivationKind::Fallback {
                conflict: word.to_string(),
            },
            pattern: literal_alternation(accepted, options.grammar),
        };
    }

    if candidate.is_empty() {
        return Derivation {
            kind: DerivationKind::MatchEmpty,
            pattern: MATCH_EMPTY.to_string(),
        };
    }
    Derivation {
        kind: DerivationKind::Generalized,
        pattern: candidate.into_string(),
    }
}

/// `(w1|w2|...)` with each distinct word once, in first-occurrence order.
pub fn literal_alternation<S: AsRef<str>>(words: &[S], grammar: Grammar) -> String {
    let body = words
        .iter()
        .map(|word| AsRef::<str>::as_ref(word))
        .unique()
        .map(|word| grammar.word(word))
        .join(&ALTERNATION.to_string());
    format!("({})", body)
}
