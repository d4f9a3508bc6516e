//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Walk starting cells on the rayon pool instead of one after another.
    /// Output order is the same either way.
    pub parallel: bool,
}

impl SearchConfig {
    /// Single-threaded, row-major search.
    #[must_use]
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// One unit of work per starting cell.
    #[must_use]
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        assert_eq!(SearchConfig::default(), SearchConfig::sequential());
        assert!(SearchConfig::default().with_parallel(true).parallel);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::parallel();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
