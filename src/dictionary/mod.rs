//! Dictionary index and the ways to fill it.
//!
//! - `trie`: the prefix trie the search walks
//! - `loader`: word lists, one word per line
//! - `snapshot`: bincode-encoded prebuilt tries

pub mod error;
pub mod loader;
pub mod snapshot;
pub mod trie;

pub use error::DictionaryError;
pub use loader::{load_path, load_path_or_empty, load_words, DEFAULT_WORDS_PATH};
pub use trie::{Trie, TrieNode, MIN_WORD_LEN};
