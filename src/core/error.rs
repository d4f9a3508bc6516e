//! Grid construction errors.

/// Errors raised while building or populating a [`Grid`](super::Grid).
///
/// The search itself never fails; these only guard the grid's
/// preconditions at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height is zero.
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// A row passed to `Grid::from_rows` has a different length than the first row.
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Cell count does not equal width times height.
    #[error("grid is {width}x{height} but has {got} cells")]
    CellCount {
        width: usize,
        height: usize,
        got: usize,
    },

    /// Random population was asked to draw from an empty alphabet.
    #[error("cannot populate grid from an empty alphabet")]
    EmptyAlphabet,
}
