//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Counters collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Cell entries attempted, including ones pruned as already visited.
    pub walks: u64,

    /// Starting cells whose traversal ran to completion.
    pub starting_cells: u32,

    /// Starting cells whose letter begins no dictionary word.
    pub root_misses: u32,

    /// Words reported, duplicates included.
    pub matches: u64,

    /// Wall time in microseconds.
    pub time_us: u64,

    /// True if the search stopped early on request.
    pub cancelled: bool,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold in counters from an independent traversal. Time is not summed;
    /// the caller records wall time for the whole search.
    pub fn merge(&mut self, other: &SearchStats) {
        self.walks += other.walks;
        self.starting_cells += other.starting_cells;
        self.root_misses += other.root_misses;
        self.matches += other.matches;
        self.cancelled |= other.cancelled;
    }

    #[must_use]
    pub fn walks_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.walks as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.walks, 0);
        assert!(!stats.cancelled);
    }

    #[test]
    fn test_walks_per_second() {
        let mut stats = SearchStats::new();
        stats.walks = 500;
        stats.time_us = 500_000;
        assert_eq!(stats.walks_per_second(), 1000.0);
    }

    #[test]
    fn test_merge() {
        let mut total = SearchStats {
            walks: 10,
            starting_cells: 1,
            matches: 2,
            time_us: 99,
            ..SearchStats::default()
        };
        let other = SearchStats {
            walks: 5,
            starting_cells: 1,
            root_misses: 1,
            cancelled: true,
            time_us: 7,
            ..SearchStats::default()
        };

        total.merge(&other);

        assert_eq!(total.walks, 15);
        assert_eq!(total.starting_cells, 2);
        assert_eq!(total.root_misses, 1);
        assert_eq!(total.matches, 2);
        assert_eq!(total.time_us, 99);
        assert!(total.cancelled);

        total.reset();
        assert_eq!(total, SearchStats::default());
    }
}
