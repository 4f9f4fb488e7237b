//! Reachability oracle: can a subtree still terminate a word?

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::domain::trie::Trie;

/// Memoized answers to `can_terminate` for every node of one tree.
///
/// The tree is immutable during synthesis, so all answers are computed once in
/// a single post-order pass: a node terminates if it is accepting or any child
/// terminates.
#[derive(Debug)]
pub struct Reachability {
    terminates: HashMap<Index, bool>,
}

impl Reachability {
    #[instrument(level = "debug", skip(trie))]
    pub fn compute(trie: &Trie) -> Self {
        let mut terminates = HashMap::with_capacity(trie.node_count());
        for (idx, node) in trie.iter_postorder() {
            let value = node.accepting
                || node
                    .children
                    .values()
                    .any(|child| terminates.get(child).copied().unwrap_or(false));
            terminates.insert(idx, value);
        }
        trace!("reachability computed for {} nodes", terminates.len());
        Self { terminates }
    }

    /// True if the node is accepting or some descendant is.
    pub fn can_terminate(&self, idx: Index) -> bool {
        self.terminates.get(&idx).copied().unwrap_or(false)
    }

    /// True if some strict descendant of the node is accepting.
    pub fn can_terminate_below(&self, trie: &Trie, idx: Index) -> bool {
        trie.get_node(idx)
            .is_some_and(|node| node.children.values().any(|&c| self.can_terminate(c)))
    }
}

/// Unmemoized recursive form of the oracle.
pub fn can_terminate(trie: &Trie, idx: Index) -> bool {
    match trie.get_node(idx) {
        Some(node) => {
            node.accepting || node.children.values().any(|&child| can_terminate(trie, child))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(trie: &Trie, from: Index, c: char) -> Index {
        trie.get_node(from).unwrap().children[&c]
    }

    #[test]
    fn test_memoized_matches_recursive() {
        let trie = Trie::from_words(["a", "abc", "bd", ""]);
        let oracle = Reachability::compute(&trie);
        for (idx, _) in trie.iter_postorder() {
            assert_eq!(oracle.can_terminate(idx), can_terminate(&trie, idx));
        }
    }

    #[test]
    fn test_below_excludes_the_node_itself() {
        let trie = Trie::from_words(["a", "abc"]);
        let oracle = Reachability::compute(&trie);
        let a = child(&trie, trie.root(), 'a');
        let b = child(&trie, a, 'b');
        let c = child(&trie, b, 'c');
        assert!(oracle.can_terminate(c));
        assert!(!oracle.can_terminate_below(&trie, c));
        assert!(oracle.can_terminate_below(&trie, b));
        assert!(oracle.can_terminate_below(&trie, a));
    }

    #[test]
    fn test_empty_tree_root_cannot_terminate() {
        let trie = Trie::new();
        let oracle = Reachability::compute(&trie);
        assert!(!oracle.can_terminate(trie.root()));
    }
}
