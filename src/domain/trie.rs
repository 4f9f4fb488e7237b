//! Arena-backed prefix tree over the accepted words.

use std::collections::BTreeMap;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// One position shared by all words with the same prefix.
#[derive(Debug)]
pub struct TrieNode {
    /// Some inserted word ends exactly here
    pub accepting: bool,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Outgoing edges, ordered by character
    pub children: BTreeMap<char, Index>,
}

impl TrieNode {
    fn new(parent: Option<Index>) -> Self {
        Self {
            accepting: false,
            parent,
            children: BTreeMap::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Prefix tree whose nodes live in a generational arena.
///
/// The root (empty prefix) is created with the tree. Every other node is reached
/// by exactly one edge, so the structure is a true tree: no sharing, no cycles.
/// Nodes are only ever added; the tree is read-only once the words are inserted.
#[derive(Debug)]
pub struct Trie {
    arena: Arena<TrieNode>,
    root: Index,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TrieNode::new(None));
        Self { arena, root }
    }

    /// Builds a tree holding every word of `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn get_node(&self, idx: Index) -> Option<&TrieNode> {
        self.arena.get(idx)
    }

    /// Number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Walks the path for `word`, creating missing edges, and marks its end accepting.
    ///
    /// Inserting the same word again changes nothing. The empty word marks the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, word: &str) {
        let mut current = self.root;
        for c in word.chars() {
            let existing = self
                .arena
                .get(current)
                .and_then(|node| node.children.get(&c).copied());
            current = match existing {
                Some(child) => child,
                None => {
                    let child = self.arena.insert(TrieNode::new(Some(current)));
                    if let Some(node) = self.arena.get_mut(current) {
                        node.children.insert(c, child);
                    }
                    child
                }
            };
        }
        if let Some(node) = self.arena.get_mut(current) {
            node.accepting = true;
        }
    }

    /// True iff `word` was inserted: the path exists and ends on an accepting node.
    pub fn recognizes(&self, word: &str) -> bool {
        let mut current = self.root;
        for c in word.chars() {
            match self
                .arena
                .get(current)
                .and_then(|node| node.children.get(&c))
            {
                Some(&child) => current = child,
                None => return false,
            }
        }
        self.arena.get(current).is_some_and(|node| node.accepting)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, self.root)
    }

    /// Post-order traversal of the subtree rooted at `start`.
    pub fn iter_postorder_from(&self, start: Index) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self, start)
    }

    /// Length of the longest root-to-leaf path, counted in nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .values()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

/// Children-before-parent traversal driven by an explicit stack.
///
/// Siblings are yielded in ascending character order.
pub struct PostOrderIterator<'a> {
    trie: &'a Trie,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(trie: &'a Trie, start: Index) -> Self {
        Self {
            trie,
            stack: vec![(start, false)],
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.trie.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.values().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_nodes_lazily() {
        let mut trie = Trie::new();
        assert_eq!(trie.node_count(), 1);
        trie.insert("car");
        assert_eq!(trie.node_count(), 4);
        trie.insert("cat");
        assert_eq!(trie.node_count(), 5);
        trie.insert("cat");
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut trie = Trie::new();
        assert!(!trie.recognizes(""));
        trie.insert("");
        assert!(trie.recognizes(""));
        assert!(trie.get_node(trie.root()).unwrap().accepting);
    }

    #[test]
    fn test_postorder_visits_children_first() {
        let trie = Trie::from_words(["ab", "ac"]);
        let order: Vec<Index> = trie.iter_postorder().map(|(idx, _)| idx).collect();
        assert_eq!(order.len(), 4);
        assert_eq!(*order.last().unwrap(), trie.root());
        for (pos, idx) in order.iter().enumerate() {
            let node = trie.get_node(*idx).unwrap();
            if let Some(parent) = node.parent {
                let parent_pos = order.iter().position(|&i| i == parent).unwrap();
                assert!(parent_pos > pos);
            }
        }
    }

    #[test]
    fn test_depth() {
        assert_eq!(Trie::new().depth(), 1);
        assert_eq!(Trie::from_words(["a", "abc"]).depth(), 4);
    }
}
