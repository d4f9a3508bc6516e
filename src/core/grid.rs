//! The letter grid.
//!
//! Cells are stored row-major in a single vector. The grid is read-only
//! during a search; the engine only needs cell values and dimensions.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::GridError;
use super::rng::GridRng;

/// Placeholder letter for cells that have not been populated.
pub const EMPTY_CELL: char = '.';

/// Neighbor offsets in scan order: row above left to right, the two cells
/// beside, then the row below left to right.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Lowercase form of a single cell letter.
///
/// Letters whose lowercase form is several characters keep the first one.
fn lowercase(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// A W×H grid of letters. Letters are always stored lowercase, matching
/// the dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr {
            width,
            height,
            cells,
        } = repr;
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::CellCount {
                width,
                height,
                got: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells: cells.into_iter().map(lowercase).collect(),
        })
    }
}

impl Grid {
    /// Create a grid filled with [`EMPTY_CELL`].
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width * height],
        })
    }

    /// Build a grid from one string per row. Letters are lowercased.
    ///
    /// ```
    /// use word_grid::core::{Coord, Grid};
    ///
    /// let grid = Grid::from_rows(&["ca", "ts"]).unwrap();
    /// assert_eq!(grid.get(Coord::new(1, 0)), Some('a'));
    /// assert_eq!(grid.get(Coord::new(0, 1)), Some('t'));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows
            .first()
            .map_or(0, |r| r.as_ref().chars().flat_map(char::to_lowercase).count());
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, text) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(text.as_ref().chars().flat_map(char::to_lowercase));
            let got = cells.len() - before;
            if got != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    got,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid and fill it from `alphabet`.
    pub fn random(
        width: usize,
        height: usize,
        rng: &mut GridRng,
        alphabet: &str,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        grid.randomize(rng, alphabet)?;
        Ok(grid)
    }

    /// Fill every cell, row-major, with a letter drawn uniformly from
    /// `alphabet`. The alphabet is lowercased first.
    pub fn randomize(&mut self, rng: &mut GridRng, alphabet: &str) -> Result<(), GridError> {
        let letters: Vec<char> = alphabet.chars().flat_map(char::to_lowercase).collect();
        for cell in &mut self.cells {
            *cell = *rng.choose(&letters).ok_or(GridError::EmptyAlphabet)?;
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; construction and deserialization both reject empty grids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if `coord` lies inside the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Row-major index of a coordinate.
    #[inline]
    #[must_use]
    pub fn index_of(&self, coord: Coord) -> usize {
        coord.y * self.width + coord.x
    }

    /// Coordinate of a row-major index.
    #[inline]
    #[must_use]
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index % self.width, index / self.width)
    }

    /// Letter at `coord`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.contains(coord).then(|| self.cells[self.index_of(coord)])
    }

    /// Letter at `coord`.
    ///
    /// Panics when out of range; callers bounds-check first.
    #[inline]
    #[must_use]
    pub fn cell(&self, coord: Coord) -> char {
        assert!(self.contains(coord), "{coord} outside {}x{} grid", self.width, self.height);
        self.cells[self.index_of(coord)]
    }

    /// Overwrite the letter at `coord`, lowercased. Returns false when out
    /// of range.
    pub fn set(&mut self, coord: Coord, letter: char) -> bool {
        if !self.contains(coord) {
            return false;
        }
        let idx = self.index_of(coord);
        self.cells[idx] = lowercase(letter);
        true
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord_of(i))
    }

    /// The 8-connected neighbors of `coord`, clipped at the edges.
    ///
    /// Order is fixed: row above left to right, left, right, then row below
    /// left to right.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let x = coord.x.checked_add_signed(dx)?;
            let y = coord.y.checked_add_signed(dy)?;
            let next = Coord::new(x, y);
            self.contains(next).then_some(next)
        })
    }

    /// One row as a string.
    #[must_use]
    pub fn row(&self, y: usize) -> String {
        self.cells[y * self.width..(y + 1) * self.width].iter().collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let border = "-".repeat(self.width);
        writeln!(f, "+{border}+")?;
        for y in 0..self.height {
            writeln!(f, "|{}|", self.row(y))?;
        }
        writeln!(f, "+{border}+")
    }
}
