//! # word-grid
//!
//! Finds every dictionary word that can be traced through a letter grid by
//! moving between touching cells (diagonals included), using each cell at
//! most once per word.
//!
//! ## Design Principles
//!
//! 1. **Build Once, Read Many**: The dictionary trie is built up front and
//!    never mutated by a search, so it can be shared across threads freely.
//!
//! 2. **Strict Undo**: The walk marks a cell and advances the trie on entry,
//!    and undoes both on exit, in reverse order, on every path out.
//!
//! 3. **Explicit Randomness**: Grid population takes a seeded `GridRng`;
//!    nothing reads process-global random state.
//!
//! ## Modules
//!
//! - `core`: Coordinates, the grid, RNG, grid configuration
//! - `dictionary`: Prefix trie, word-list loading, snapshots
//! - `search`: Backtracking search engine, results, statistics

pub mod core;
pub mod dictionary;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Coord, Grid, GridConfig, GridError, GridRng};

pub use crate::dictionary::{DictionaryError, Trie, TrieNode};

pub use crate::search::{
    find_words, unique_words, PathState, SearchConfig, SearchEngine, SearchStats, VisitedSet,
    WordMatch,
};
