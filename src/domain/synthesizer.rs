//! Pattern synthesis from a prefix tree.
//!
//! Fragments are built bottom-up: every node combines the fragments of its
//! children by grouping edge characters that lead to identical text into one
//! character class, then alternating the groups.
//!
//! Output order is canonical: characters inside a class ascend, and branches are
//! ordered by the smallest character of their class.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::domain::pattern::{Fragment, Grammar, ALTERNATION};
use crate::domain::reachability::Reachability;
use crate::domain::trie::{Trie, TrieNode};

/// When a child edge gets the suffix wildcard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardPolicy {
    /// Only after children whose subtree terminates strictly below them,
    /// and never twice in a row
    #[default]
    Interior,
    /// After every child whose subtree can terminate
    Reachable,
    /// Never: the pattern is exact
    Never,
}

impl fmt::Display for WildcardPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WildcardPolicy::Interior => "interior",
            WildcardPolicy::Reachable => "reachable",
            WildcardPolicy::Never => "never",
        };
        f.write_str(name)
    }
}

impl FromStr for WildcardPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "interior" => Ok(WildcardPolicy::Interior),
            "reachable" => Ok(WildcardPolicy::Reachable),
            "never" => Ok(WildcardPolicy::Never),
            other => Err(format!(
                "unknown wildcard policy '{}' (expected interior, reachable or never)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub wildcard: WildcardPolicy,
    pub grammar: Grammar,
}

/// Characters that lead to the same child fragment.
struct Group {
    fragment: Fragment,
    chars: Vec<char>,
}

pub struct Synthesizer<'a> {
    trie: &'a Trie,
    oracle: Reachability,
    options: SynthesisOptions,
}

impl<'a> Synthesizer<'a> {
    pub fn new(trie: &'a Trie, options: SynthesisOptions) -> Self {
        Self {
            trie,
            oracle: Reachability::compute(trie),
            options,
        }
    }

    /// Fragment for the whole tree.
    #[instrument(level = "debug", skip(self), fields(wildcard = %self.options.wildcard))]
    pub fn synthesize(&self) -> Fragment {
        let fragment = self.synthesize_node(self.trie.root());
        debug!("synthesized: {}", fragment);
        fragment
    }

    /// Fragment for the subtree rooted at `idx`.
    pub fn synthesize_node(&self, idx: Index) -> Fragment {
        let mut done: HashMap<Index, Fragment> = HashMap::new();
        for (node_idx, node) in self.trie.iter_postorder_from(idx) {
            let fragment = self.combine(node, &mut done);
            trace!(?node_idx, fragment = fragment.as_str(), "node fragment");
            done.insert(node_idx, fragment);
        }
        done.remove(&idx).unwrap_or_default()
    }

    /// Builds a node's fragment from the already finished fragments of its children.
    fn combine(&self, node: &TrieNode, done: &mut HashMap<Index, Fragment>) -> Fragment {
        if node.is_leaf() {
            return Fragment::empty();
        }

        let mut groups: BTreeMap<String, Group> = BTreeMap::new();
        for (&c, &child) in &node.children {
            let mut fragment = done.remove(&child).unwrap_or_default();
            if self.wants_wildcard(child, &fragment) {
                fragment = fragment.with_wildcard();
            }
            let key = fragment.as_str().to_string();
            groups
                .entry(key)
                .or_insert_with(|| Group {
                    fragment,
                    chars: Vec::new(),
                })
                .chars
                .push(c);
        }

        let mut branches: Vec<(char, Fragment)> = groups
            .into_values()
            .filter_map(|group| self.render_branch(group))
            .collect();
        branches.sort_by_key(|(first, _)| *first);

        let combined = match branches.len() {
            1 => branches.remove(0).1,
            _ => {
                let text = branches
                    .iter()
                    .map(|(_, branch)| branch.as_str())
                    .collect::<Vec<_>>()
                    .join(&ALTERNATION.to_string());
                Fragment::new(format!("({})", text), true, false)
            }
        };

        if node.accepting {
            combined.or_empty()
        } else {
            combined
        }
    }

    /// `class ++ fragment`, parenthesizing a fragment that carries an alternation.
    fn render_branch(&self, mut group: Group) -> Option<(char, Fragment)> {
        group.chars.sort_unstable();
        group.chars.dedup();
        let first = *group.chars.first()?;

        let mut text = self.options.grammar.class(&group.chars);
        let fragment = group.fragment;
        if fragment.is_empty() {
            return Some((first, Fragment::new(text, false, false)));
        }
        let alternation = fragment.has_alternation();
        let open = if alternation {
            text.push('(');
            text.push_str(fragment.as_str());
            text.push(')');
            false
        } else {
            text.push_str(fragment.as_str());
            fragment.is_open()
        };
        Some((first, Fragment::new(text, alternation, open)))
    }

    fn wants_wildcard(&self, child: Index, fragment: &Fragment) -> bool {
        match self.options.wildcard {
            WildcardPolicy::Never => false,
            WildcardPolicy::Reachable => self.oracle.can_terminate(child),
            WildcardPolicy::Interior => {
                !fragment.is_open() && self.oracle.can_terminate_below(self.trie, child)
            }
        }
    }
}

/// Synthesizes the fragment for a whole tree.
pub fn synthesize(trie: &Trie, options: SynthesisOptions) -> Fragment {
    Synthesizer::new(trie, options).synthesize()
}
