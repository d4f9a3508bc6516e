//! Grid word search.
//!
//! ## Overview
//!
//! [`SearchEngine`] walks every starting cell depth-first, stepping the
//! dictionary trie one letter per cell and pruning as soon as no word can
//! continue. Each found word is reported with the cells that spell it.
//!
//! ## Usage
//!
//! ```rust
//! use word_grid::core::Grid;
//! use word_grid::dictionary::Trie;
//! use word_grid::search::{SearchConfig, SearchEngine};
//!
//! let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
//! let trie = Trie::from_words(["cat", "cats", "at"]);
//!
//! let mut engine = SearchEngine::new(SearchConfig::default());
//! let found = engine.find_words(&grid, &trie);
//!
//! assert_eq!(found.len(), 3);
//! assert_eq!(found[1].to_string(), "cats: [[0 0] [1 0] [0 1] [1 1]]");
//! ```

pub mod config;
pub mod engine;
pub mod path;
pub mod result;
pub mod stats;
pub mod visited;

pub use config::SearchConfig;
pub use engine::{find_words, SearchEngine};
pub use path::PathState;
pub use result::{unique_words, WordMatch};
pub use stats::SearchStats;
pub use visited::VisitedSet;
