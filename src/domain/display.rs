use generational_arena::Index;
use termtree::Tree;

use crate::domain::trie::Trie;

/// Label of the root node (empty prefix).
pub const ROOT_LABEL: &str = "ε";
/// Suffix marking accepting nodes.
pub const ACCEPTING_MARK: &str = " ✓";

pub trait TrieDisplay {
    fn to_display_tree(&self) -> Tree<String>;
}

impl TrieDisplay for Trie {
    fn to_display_tree(&self) -> Tree<String> {
        fn label(trie: &Trie, idx: Index, base: String) -> String {
            match trie.get_node(idx) {
                Some(node) if node.accepting => format!("{}{}", base, ACCEPTING_MARK),
                _ => base,
            }
        }

        fn build_tree(trie: &Trie, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = trie.get_node(node_idx) {
                for (&c, &child_idx) in &node.children {
                    let mut child_tree = Tree::new(label(trie, child_idx, c.to_string()));
                    build_tree(trie, child_idx, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        let root = self.root();
        let mut tree = Tree::new(label(self, root, ROOT_LABEL.to_string()));
        build_tree(self, root, &mut tree);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_marks_accepting_nodes() {
        let trie = Trie::from_words(["ab", "a"]);
        let rendered = trie.to_display_tree().to_string();
        assert!(rendered.starts_with(ROOT_LABEL));
        assert!(rendered.contains("a ✓"));
        assert!(rendered.contains("b ✓"));
    }
}
