//! Core types: coordinates, the letter grid, RNG, configuration.
//!
//! Everything the search consumes but does not own lives here.

pub mod coord;
pub mod error;
pub mod grid;
pub mod rng;
pub mod config;

pub use coord::Coord;
pub use error::GridError;
pub use grid::{Grid, EMPTY_CELL};
pub use rng::GridRng;
pub use config::{GridConfig, DEFAULT_SIZE, FULL_ALPHABET};
