//! Backtracking word search.
//!
//! From every starting cell, a depth-first walk advances through the grid
//! and the trie together. Entering a cell marks it visited and steps the
//! trie by its letter; a trie miss or an already-visited cell ends the
//! branch. Leaving a cell undoes both, in reverse order, whichever way the
//! branch ended.
//!
//! Starting cells share nothing but the read-only grid and trie, so the
//! parallel mode hands each one to the rayon pool with its own visited set
//! and path, then concatenates results in starting-cell order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::{Coord, Grid};
use crate::dictionary::Trie;

use super::config::SearchConfig;
use super::path::PathState;
use super::result::WordMatch;
use super::stats::SearchStats;
use super::visited::VisitedSet;

/// Search context.
///
/// Owns its configuration and the statistics of the most recent search.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Every (word, path) pair the grid spells.
    ///
    /// Results come in row-major order of starting cell, then in the order
    /// the walk found them. A word reachable along several paths is reported
    /// once per path.
    pub fn find_words(&mut self, grid: &Grid, trie: &Trie) -> Vec<WordMatch> {
        self.run(grid, trie, None)
    }

    /// [`find_words`](Self::find_words) plus a copy of the run's statistics.
    pub fn find_words_with_stats(
        &mut self,
        grid: &Grid,
        trie: &Trie,
    ) -> (Vec<WordMatch>, SearchStats) {
        let matches = self.run(grid, trie, None);
        (matches, self.stats.clone())
    }

    /// Like [`find_words`](Self::find_words), stopping once `cancel` is set.
    ///
    /// The flag is checked before each starting cell and before each
    /// neighbor is explored. Matches found before that point are returned
    /// and `stats().cancelled` is set.
    pub fn find_words_cancellable(
        &mut self,
        grid: &Grid,
        trie: &Trie,
        cancel: &AtomicBool,
    ) -> Vec<WordMatch> {
        self.run(grid, trie, Some(cancel))
    }

    fn run(&mut self, grid: &Grid, trie: &Trie, cancel: Option<&AtomicBool>) -> Vec<WordMatch> {
        let start = Instant::now();
        self.stats.reset();

        let matches = if self.config.parallel {
            run_parallel(grid, trie, cancel, &mut self.stats)
        } else {
            run_sequential(grid, trie, cancel, &mut self.stats)
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            width = grid.width(),
            height = grid.height(),
            parallel = self.config.parallel,
            walks = self.stats.walks,
            matches = self.stats.matches,
            root_misses = self.stats.root_misses,
            cancelled = self.stats.cancelled,
            time_us = self.stats.time_us,
            "search finished"
        );
        matches
    }
}

/// Search with the default (sequential) configuration.
pub fn find_words(grid: &Grid, trie: &Trie) -> Vec<WordMatch> {
    SearchEngine::default().find_words(grid, trie)
}

fn run_sequential(
    grid: &Grid,
    trie: &Trie,
    cancel: Option<&AtomicBool>,
    stats: &mut SearchStats,
) -> Vec<WordMatch> {
    let mut walk = Walk::new(grid, trie, cancel);
    for coord in grid.coords() {
        if walk.is_cancelled() {
            walk.stats.cancelled = true;
            break;
        }
        walk.start(coord);
    }
    stats.merge(&walk.stats);
    walk.matches
}

fn run_parallel(
    grid: &Grid,
    trie: &Trie,
    cancel: Option<&AtomicBool>,
    stats: &mut SearchStats,
) -> Vec<WordMatch> {
    // Indexed collect keeps starting-cell order.
    let per_cell: Vec<(Vec<WordMatch>, SearchStats)> = (0..grid.len())
        .into_par_iter()
        .map(|index| {
            let mut walk = Walk::new(grid, trie, cancel);
            if walk.is_cancelled() {
                walk.stats.cancelled = true;
            } else {
                walk.start(grid.coord_of(index));
            }
            (walk.matches, walk.stats)
        })
        .collect();

    let mut matches = Vec::new();
    for (found, cell_stats) in per_cell {
        stats.merge(&cell_stats);
        matches.extend(found);
    }
    matches
}

/// Mutable state of one traversal.
struct Walk<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    cancel: Option<&'a AtomicBool>,
    visited: VisitedSet,
    path: PathState<'a>,
    matches: Vec<WordMatch>,
    stats: SearchStats,
}

impl<'a> Walk<'a> {
    fn new(grid: &'a Grid, trie: &'a Trie, cancel: Option<&'a AtomicBool>) -> Self {
        Self {
            grid,
            trie,
            cancel,
            visited: VisitedSet::for_grid(grid),
            path: PathState::new(),
            matches: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Run the whole traversal tree rooted at `coord`.
    fn start(&mut self, coord: Coord) {
        self.visit(coord);
        debug_assert_eq!(
            self.visited.count_marked(),
            0,
            "visited marks leaked from {coord}"
        );
        debug_assert!(self.path.is_empty(), "path leaked from {coord}");

        if self.stats.cancelled {
            return;
        }
        self.stats.starting_cells += 1;
    }

    fn visit(&mut self, coord: Coord) {
        self.stats.walks += 1;

        if self.visited.is_marked(coord) {
            return;
        }
        self.visited.mark(coord);

        let trie = self.trie;
        let letter = self.grid.cell(coord);
        match trie.step(self.path.node(), letter) {
            None if self.path.is_empty() => {
                self.stats.root_misses += 1;
                trace!(%letter, x = coord.x, y = coord.y, "letter not found in root of trie");
            }
            None => {}
            Some(next) => {
                self.path.push(coord, next);

                if let Some(word) = next.terminal_word() {
                    self.matches.push(WordMatch::new(word, self.path.coords().to_vec()));
                    self.stats.matches += 1;
                }

                let grid = self.grid;
                for neighbor in grid.neighbors(coord) {
                    if self.is_cancelled() {
                        self.stats.cancelled = true;
                        break;
                    }
                    self.visit(neighbor);
                }

                self.path.pop();
            }
        }

        self.visited.unmark(coord);
    }
}
