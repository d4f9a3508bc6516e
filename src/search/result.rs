//! Found words.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Grid};

/// A dictionary word and the cells that spell it, in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordMatch {
    pub word: String,
    pub path: Vec<Coord>,
}

impl WordMatch {
    pub fn new(word: impl Into<String>, path: Vec<Coord>) -> Self {
        Self {
            word: word.into(),
            path,
        }
    }

    /// The cell the word starts on.
    #[must_use]
    pub fn start(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    /// Letters under the path, read from `grid`.
    ///
    /// Out-of-range coordinates are skipped.
    #[must_use]
    pub fn spelled_on(&self, grid: &Grid) -> String {
        self.path.iter().filter_map(|&c| grid.get(c)).collect()
    }

    /// True if consecutive cells touch and no cell repeats.
    #[must_use]
    pub fn is_simple_path(&self) -> bool {
        let adjacent = self.path.windows(2).all(|w| w[0].is_adjacent(w[1]));
        let distinct = self
            .path
            .iter()
            .enumerate()
            .all(|(i, c)| !self.path[..i].contains(c));
        adjacent && distinct
    }
}

impl std::fmt::Display for WordMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [", self.word)?;
        for (i, coord) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{coord}")?;
        }
        f.write_str("]")
    }
}

/// Distinct words across `matches`, sorted.
///
/// The search reports every path; this is the opt-in collapsed view.
#[must_use]
pub fn unique_words(matches: &[WordMatch]) -> Vec<&str> {
    let mut words: Vec<&str> = matches.iter().map(|m| m.word.as_str()).collect();
    words.sort_unstable();
    words.dedup();
    words
}
