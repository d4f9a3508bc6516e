//! Dictionary integration tests: loading, lookups, snapshots.

use std::io::Cursor;

use word_grid::dictionary::{load_words, snapshot, Trie, TrieNode};

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_word_list_with_noise() {
    let list = "Aardvark\n  zebra  \nx\n\n\r\nZEBRA\nzebras\n";
    let trie = load_words(Cursor::new(list)).unwrap();

    assert_eq!(trie.word_count(), 3);
    assert!(trie.contains("aardvark"));
    assert!(trie.contains("Zebra"));
    assert!(trie.contains("zebras"));
    assert!(!trie.contains("x"));
}

#[test]
fn test_empty_word_list() {
    let trie = load_words(Cursor::new("")).unwrap();
    assert!(trie.is_empty());
    assert!(trie.step(None, 'a').is_none());
}

// =============================================================================
// Stepping
// =============================================================================

#[test]
fn test_step_spells_every_stored_word() {
    let words = ["grid", "grids", "gridlock", "go", "goal"];
    let trie = Trie::from_words(words);

    for word in words {
        let mut node: Option<&TrieNode> = None;
        for c in word.chars() {
            node = trie.step(node, c);
            assert!(node.is_some(), "{word} broke at {c}");
        }
        assert_eq!(node.and_then(TrieNode::terminal_word), Some(word));
    }
}

#[test]
fn test_inner_prefix_is_not_a_word() {
    let trie = Trie::from_words(["gridlock"]);
    let node = trie.walk("grid").unwrap();

    assert!(!node.is_terminal());
    assert_eq!(node.children(), vec!['l']);
    assert!(trie.has_prefix("gridl"));
}

#[test]
fn test_collect_and_extend() {
    let mut trie: Trie = vec!["one", "two"].into_iter().collect();
    trie.extend(["three".to_string(), "two".to_string()]);

    assert_eq!(trie.word_count(), 3);
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn test_snapshot_stream_roundtrip() {
    let trie = load_words(Cursor::new("alpha\nalphabet\nbeta\n")).unwrap();

    let mut buf = Vec::new();
    snapshot::save(&trie, &mut buf).unwrap();
    let restored = snapshot::load(buf.as_slice()).unwrap();

    assert_eq!(restored.word_count(), 3);
    assert_eq!(restored.node_count(), trie.node_count());
    assert!(restored.contains("alphabet"));
}
