//! Cells on the active path.

use crate::core::{Coord, Grid};

/// One flag per grid cell, true while the cell is on the path being walked.
///
/// A cell is marked when the walk enters it and unmarked when the walk
/// backtracks out of it, so between starting cells every flag is false.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    width: usize,
    flags: Vec<bool>,
}

impl VisitedSet {
    /// All-clear set sized for `grid`.
    #[must_use]
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            flags: vec![false; grid.len()],
        }
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }

    #[inline]
    #[must_use]
    pub fn is_marked(&self, coord: Coord) -> bool {
        self.flags[self.index(coord)]
    }

    #[inline]
    pub fn mark(&mut self, coord: Coord) {
        let idx = self.index(coord);
        debug_assert!(!self.flags[idx], "{coord} marked twice");
        self.flags[idx] = true;
    }

    #[inline]
    pub fn unmark(&mut self, coord: Coord) {
        let idx = self.index(coord);
        debug_assert!(self.flags[idx], "{coord} unmarked while clear");
        self.flags[idx] = false;
    }

    /// Number of marked cells. Zero between starting cells.
    #[must_use]
    pub fn count_marked(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}
