//! Conflict check of rejected words against the exact tree.
//!
//! Only exact recognition is checked. A rejected word that merely extends an
//! accepted word can still match a generalized pattern through the suffix
//! wildcard without being reported here; `application::audit` exposes such cases.

use tracing::{debug, instrument};

use crate::domain::trie::Trie;

/// First rejected word the tree recognizes, if any.
#[instrument(level = "debug", skip_all)]
pub fn find_conflict<'w, S>(trie: &Trie, rejected: &'w [S]) -> Option<&'w str>
where
    S: AsRef<str>,
{
    let conflict = rejected
        .iter()
        .map(|word| AsRef::<str>::as_ref(word))
        .find(|word| trie.recognizes(word));
    if let Some(word) = conflict {
        debug!("rejected word recognized by tree: {:?}", word);
    }
    conflict
}

/// True iff some rejected word is recognized by the tree.
pub fn has_conflict<S: AsRef<str>>(trie: &Trie, rejected: &[S]) -> bool {
    find_conflict(trie, rejected).is_some()
}
