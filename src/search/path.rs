//! The candidate word being walked.

use smallvec::SmallVec;

use crate::core::{Coord, Grid};
use crate::dictionary::TrieNode;

/// Inline capacity; longer words spill to the heap.
const INLINE_PATH: usize = 16;

/// Coordinates walked so far, each paired with the trie node its letter
/// reached.
///
/// Grows and shrinks only at the tail. Popping an entry restores the trie
/// position that was current before it was pushed, so the path length always
/// equals the depth of the current node.
#[derive(Clone, Debug, Default)]
pub struct PathState<'t> {
    coords: SmallVec<[Coord; INLINE_PATH]>,
    nodes: SmallVec<[&'t TrieNode; INLINE_PATH]>,
}

impl<'t> PathState<'t> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current trie position, `None` before the first letter.
    #[inline]
    #[must_use]
    pub fn node(&self) -> Option<&'t TrieNode> {
        self.nodes.last().copied()
    }

    #[inline]
    pub fn push(&mut self, coord: Coord, node: &'t TrieNode) {
        self.coords.push(coord);
        self.nodes.push(node);
    }

    /// Drop the tail entry and return its coordinate.
    #[inline]
    pub fn pop(&mut self) -> Option<Coord> {
        self.nodes.pop();
        self.coords.pop()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Letters under the path, read from `grid`.
    #[must_use]
    pub fn spelled(&self, grid: &Grid) -> String {
        self.coords.iter().map(|&c| grid.cell(c)).collect()
    }
}
