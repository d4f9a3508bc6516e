//! Prefix trie over dictionary words.
//!
//! The root level is a map from first letter to node; every node owns its
//! children outright. A word is stored by setting `terminal_word` on the node
//! its last letter reaches, so a word and its extensions ("cat", "cats")
//! coexist without any special casing.
//!
//! The trie is built once and only read afterwards. [`Trie::step`] is the
//! single primitive the search uses to advance.
//!
//! ```
//! use word_grid::dictionary::Trie;
//!
//! let trie: Trie = ["Cat", "cats", "a"].into_iter().collect();
//!
//! assert!(trie.contains("cat"));
//! assert!(trie.contains("cats"));
//! assert!(!trie.contains("a")); // single letters are dropped
//!
//! let c = trie.step(None, 'c').unwrap();
//! let a = trie.step(Some(c), 'a').unwrap();
//! assert_eq!(a.terminal_word(), None);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Shortest word the trie will store, in characters.
pub const MIN_WORD_LEN: usize = 2;

/// One prefix position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    character: char,
    terminal_word: Option<String>,
    children: FxHashMap<char, TrieNode>,
}

impl TrieNode {
    fn new(character: char) -> Self {
        Self {
            character,
            terminal_word: None,
            children: FxHashMap::default(),
        }
    }

    /// The letter this node matches.
    #[must_use]
    pub fn character(&self) -> char {
        self.character
    }

    /// The full word ending here, if any.
    #[inline]
    #[must_use]
    pub fn terminal_word(&self) -> Option<&str> {
        self.terminal_word.as_deref()
    }

    /// True if a stored word ends at this node.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal_word.is_some()
    }

    /// The child reached by `c`.
    #[inline]
    #[must_use]
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Letters that extend this prefix, sorted.
    #[must_use]
    pub fn children(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.children.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.values().map(TrieNode::count_nodes).sum::<usize>()
    }
}

impl std::fmt::Display for TrieNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {:?}", self.character, self.children())
    }
}

/// Dictionary index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    roots: FxHashMap<char, TrieNode>,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }

    /// Insert a word.
    ///
    /// Surrounding whitespace is trimmed and the word is lowercased. Words
    /// shorter than [`MIN_WORD_LEN`] characters are dropped. Returns true if
    /// the word was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        let mut letters = word.chars();

        let Some(first) = letters.next() else {
            return false;
        };
        if word.chars().count() < MIN_WORD_LEN {
            return false;
        }

        let mut node = self.roots.entry(first).or_insert_with(|| TrieNode::new(first));
        for c in letters {
            node = node.children.entry(c).or_insert_with(|| TrieNode::new(c));
        }

        if node.terminal_word.is_some() {
            return false;
        }
        node.terminal_word = Some(word);
        self.word_count += 1;
        true
    }

    /// Advance one letter.
    ///
    /// `None` means "at the root": the lookup goes through the first-letter
    /// map. Otherwise it goes through `node`'s children. A miss means no
    /// stored word continues this way.
    #[inline]
    #[must_use]
    pub fn step<'a>(&'a self, node: Option<&'a TrieNode>, c: char) -> Option<&'a TrieNode> {
        match node {
            None => self.roots.get(&c),
            Some(node) => node.children.get(&c),
        }
    }

    /// The depth-1 node for `c`.
    #[must_use]
    pub fn root(&self, c: char) -> Option<&TrieNode> {
        self.roots.get(&c)
    }

    /// Follow `prefix` from the root. `prefix` must already be lowercase.
    #[must_use]
    pub fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = None;
        for c in prefix.chars() {
            node = Some(self.step(node, c)?);
        }
        node
    }

    /// True if `word` was stored.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(&word.to_lowercase())
            .is_some_and(TrieNode::is_terminal)
    }

    /// True if some stored word starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.walk(&prefix.to_lowercase()).is_some()
    }

    /// Number of distinct stored words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root entries included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.roots.values().map(TrieNode::count_nodes).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();
        assert!(trie.insert("cat"));
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cats"));
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn test_short_words_dropped() {
        let mut trie = Trie::new();
        assert!(!trie.insert(""));
        assert!(!trie.insert("a"));
        assert!(!trie.insert("  b \n"));
        assert!(!trie.insert("   "));

        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn test_lowercases_and_trims() {
        let trie = Trie::from_words([" Cat\r", "DOG"]);

        assert!(trie.contains("cat"));
        assert!(trie.contains("dog"));
        assert_eq!(trie.walk("dog").and_then(TrieNode::terminal_word), Some("dog"));
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert("tea"));
        let nodes = trie.node_count();

        assert!(!trie.insert("tea"));
        assert!(!trie.insert("TEA"));
        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_prefix_words_coexist() {
        let trie = Trie::from_words(["cats", "cat", "at"]);

        assert!(trie.contains("cat"));
        assert!(trie.contains("cats"));
        assert!(trie.contains("at"));
        assert_eq!(trie.word_count(), 3);
        // c-a-t-s plus a-t
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn test_step() {
        let trie = Trie::from_words(["cat"]);

        let c = trie.step(None, 'c').unwrap();
        assert_eq!(c.character(), 'c');
        assert!(trie.step(None, 'a').is_none());

        let a = trie.step(Some(c), 'a').unwrap();
        let t = trie.step(Some(a), 't').unwrap();
        assert_eq!(t.terminal_word(), Some("cat"));
        assert!(trie.step(Some(t), 's').is_none());
    }

    #[test]
    fn test_has_prefix() {
        let trie = Trie::from_words(["queen"]);
        assert!(trie.has_prefix("qu"));
        assert!(trie.has_prefix("QUEEN"));
        assert!(!trie.has_prefix("queens"));
        assert!(!trie.has_prefix(""));
    }

    #[test]
    fn test_unicode_length_in_chars() {
        let trie = Trie::from_words(["é", "ét"]);
        assert_eq!(trie.word_count(), 1);
        assert!(trie.contains("ÉT"));
    }

    #[test]
    fn test_node_display() {
        let trie = Trie::from_words(["ab", "ac", "ad"]);
        let a = trie.root('a').unwrap();
        assert_eq!(a.to_string(), "'a': ['b', 'c', 'd']");
    }

    #[test]
    fn test_children_sorted() {
        let trie = Trie::from_words(["tz", "ta", "tm", "t\u{e9}"]);
        let t = trie.root('t').unwrap();
        assert_eq!(t.children(), vec!['a', 'm', 'z', '\u{e9}']);
        assert!(t.child('m').unwrap().children().is_empty());
    }
}
