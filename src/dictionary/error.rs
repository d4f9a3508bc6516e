//! Dictionary loading errors.

use std::path::PathBuf;

/// Errors raised while reading a word list or a compiled snapshot.
///
/// These belong to the loading side only. An unreadable dictionary never
/// reaches the search; callers that prefer to carry on can fall back to an
/// empty trie with [`load_path_or_empty`](super::load_path_or_empty).
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list or snapshot file could not be opened or read.
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already-open source failed part way.
    #[error("failed to read dictionary stream: {0}")]
    Stream(#[from] std::io::Error),

    /// A snapshot could not be encoded or decoded.
    #[error("invalid trie snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl DictionaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
