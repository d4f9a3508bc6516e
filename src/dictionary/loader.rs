//! Building a trie from a word list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::error::DictionaryError;
use super::trie::Trie;

/// System word list used when no dictionary is given.
pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";

/// Read one word per line into a new trie.
pub fn load_words<R: BufRead>(reader: R) -> Result<Trie, DictionaryError> {
    let mut trie = Trie::new();
    let mut lines = 0usize;
    for line in reader.lines() {
        trie.insert(&line?);
        lines += 1;
    }
    debug!(lines, words = trie.word_count(), "read word list");
    Ok(trie)
}

/// Read a word-list file into a new trie.
pub fn load_path(path: impl AsRef<Path>) -> Result<Trie, DictionaryError> {
    let path = path.as_ref();
    let start = Instant::now();

    let file = File::open(path).map_err(|e| DictionaryError::io(path, e))?;
    let trie = load_words(BufReader::new(file)).map_err(|e| match e {
        DictionaryError::Stream(source) => DictionaryError::io(path, source),
        other => other,
    })?;

    info!(
        path = %path.display(),
        words = trie.word_count(),
        nodes = trie.node_count(),
        elapsed = ?start.elapsed(),
        "loaded trie"
    );
    Ok(trie)
}

/// Like [`load_path`], but an unreadable file yields an empty trie.
///
/// An empty trie is a valid dictionary: every search against it simply
/// finds nothing.
pub fn load_path_or_empty(path: impl AsRef<Path>) -> Trie {
    match load_path(path) {
        Ok(trie) => trie,
        Err(e) => {
            warn!(error = %e, "continuing with an empty dictionary");
            Trie::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_words_from_reader() {
        let input = "Cat\ncats\na\n\nat\r\n";
        let trie = load_words(Cursor::new(input)).unwrap();

        assert_eq!(trie.word_count(), 3);
        assert!(trie.contains("cat"));
        assert!(trie.contains("at"));
        assert!(!trie.contains("a"));
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = load_path("/nonexistent/word-grid/words").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/word-grid/words"));
    }

    #[test]
    fn test_load_path_or_empty_falls_back() {
        let trie = load_path_or_empty("/nonexistent/word-grid/words");
        assert!(trie.is_empty());
    }

    #[test]
    fn test_load_path_reads_file() {
        let path = std::env::temp_dir().join(format!("word-grid-loader-{}.txt", std::process::id()));
        std::fs::write(&path, "alpha\nbeta\n").unwrap();

        let trie = load_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(trie.word_count(), 2);
        assert!(trie.contains("beta"));
    }
}
