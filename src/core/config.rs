//! Grid generation parameters.
//!
//! The search core takes a grid and a trie as plain inputs and has no
//! configuration of its own; this only describes how a random board is built.

use serde::{Deserialize, Serialize};

use super::error::GridError;
use super::grid::Grid;
use super::rng::GridRng;

/// The letters a random board is drawn from by default.
pub const FULL_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 4;

/// Parameters for building a random grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Letters to draw from. Repeating letters weights them.
    pub alphabet: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed: None,
            alphabet: FULL_ALPHABET.to_string(),
        }
    }
}

impl GridConfig {
    /// A `size` x `size` board.
    #[must_use]
    pub fn square(size: usize) -> Self {
        Self::default().with_dimensions(size, size)
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Check dimensions and alphabet without building anything.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.alphabet.is_empty() {
            return Err(GridError::EmptyAlphabet);
        }
        Ok(())
    }

    /// The RNG this config asks for.
    #[must_use]
    pub fn rng(&self) -> GridRng {
        self.seed.map_or_else(GridRng::from_entropy, GridRng::new)
    }

    /// Build and populate a grid using `rng`.
    pub fn build_grid(&self, rng: &mut GridRng) -> Result<Grid, GridError> {
        self.validate()?;
        Grid::random(self.width, self.height, rng, &self.alphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 4);
        assert_eq!(config.seed, None);
        assert_eq!(config.alphabet, FULL_ALPHABET);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GridConfig::square(6).with_seed(123).with_alphabet("xyz");

        assert_eq!((config.width, config.height), (6, 6));
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.alphabet, "xyz");
    }

    #[test]
    fn test_validate() {
        assert!(GridConfig::default().validate().is_ok());
        assert_eq!(
            GridConfig::square(0).validate(),
            Err(GridError::InvalidDimensions { width: 0, height: 0 })
        );
        assert_eq!(
            GridConfig::default().with_alphabet("").validate(),
            Err(GridError::EmptyAlphabet)
        );
    }

    #[test]
    fn test_seeded_build_is_deterministic() {
        let config = GridConfig::square(5).with_seed(77);

        let a = config.build_grid(&mut config.rng()).unwrap();
        let b = config.build_grid(&mut config.rng()).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.width(), 5);
    }

    #[test]
    fn test_forked_board_rebuilds_from_its_seed() {
        let config = GridConfig::square(4).with_seed(31);
        let mut base = config.rng();
        let mut forked = base.fork();
        let seed = forked.seed();

        let board = config.build_grid(&mut forked).unwrap();
        let replay = config.clone().with_seed(seed);
        assert_eq!(replay.build_grid(&mut replay.rng()).unwrap(), board);
        assert_ne!(board, config.build_grid(&mut config.rng()).unwrap());
    }

    #[test]
    fn test_uppercase_alphabet_builds_lowercase_grid() {
        let config = GridConfig::square(3).with_seed(2).with_alphabet("XY");
        let grid = config.build_grid(&mut config.rng()).unwrap();
        assert!(grid.coords().all(|c| matches!(grid.cell(c), 'x' | 'y')));
    }

    #[test]
    fn test_serialization() {
        let config = GridConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
