//! Tests for prefix tree recognition

use rstest::rstest;

use patsyn::domain::{Reachability, Trie};

// ============================================================
// Recognition
// ============================================================

#[rstest]
#[case(&["cat", "car", "ca"])]
#[case(&["a", "ab", "abc", "b"])]
#[case(&["", "x"])]
#[case(&["ünï", "üno", "日本", "日本語"])]
fn given_inserted_words_when_recognizing_then_every_word_is_recognized(#[case] words: &[&str]) {
    let trie = Trie::from_words(words);
    for word in words {
        assert!(trie.recognizes(word), "{:?} should be recognized", word);
    }
}

#[rstest]
#[case("c")]
#[case("cats")]
#[case("cb")]
#[case("")]
#[case("dog")]
fn given_cat_and_car_when_recognizing_other_word_then_rejects(#[case] word: &str) {
    let trie = Trie::from_words(["cat", "car"]);
    assert!(!trie.recognizes(word));
}

#[test]
fn given_prefix_of_inserted_word_when_not_inserted_itself_then_not_recognized() {
    let trie = Trie::from_words(["abc"]);
    assert!(!trie.recognizes("ab"));
    assert!(!trie.recognizes("a"));
}

// ============================================================
// Idempotence
// ============================================================

#[test]
fn given_word_inserted_twice_when_recognizing_then_results_unchanged() {
    let probes = ["", "a", "ab", "abc", "abd", "b"];
    let once = Trie::from_words(["ab", "abd"]);
    let twice = Trie::from_words(["ab", "abd", "ab", "abd"]);

    assert_eq!(once.node_count(), twice.node_count());
    for probe in probes {
        assert_eq!(once.recognizes(probe), twice.recognizes(probe), "{:?}", probe);
    }
}

// ============================================================
// Structure
// ============================================================

#[test]
fn given_words_when_traversing_postorder_then_every_node_visited_once() {
    let trie = Trie::from_words(["car", "cat", "dog"]);
    let visited: Vec<_> = trie.iter_postorder().collect();
    assert_eq!(visited.len(), trie.node_count());
    assert_eq!(visited.last().map(|(idx, _)| *idx), Some(trie.root()));
}

#[test]
fn given_tree_from_insertions_when_checking_reachability_then_every_node_can_terminate() {
    let trie = Trie::from_words(["car", "cat", "dog", "do"]);
    let oracle = Reachability::compute(&trie);
    for (idx, _) in trie.iter_postorder() {
        assert!(oracle.can_terminate(idx));
    }
}
