//! Compiled dictionary snapshots.
//!
//! Parsing a large word list dominates start-up time. A snapshot stores the
//! built trie with bincode so later runs can skip the parse.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use super::error::DictionaryError;
use super::trie::Trie;

/// Encode a trie to bytes.
pub fn to_bytes(trie: &Trie) -> Result<Vec<u8>, DictionaryError> {
    Ok(bincode::serialize(trie)?)
}

/// Decode a trie from bytes produced by [`to_bytes`].
pub fn from_bytes(bytes: &[u8]) -> Result<Trie, DictionaryError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Write a snapshot to `writer`.
pub fn save<W: Write>(trie: &Trie, writer: W) -> Result<(), DictionaryError> {
    Ok(bincode::serialize_into(writer, trie)?)
}

/// Read a snapshot from `reader`.
pub fn load<R: Read>(reader: R) -> Result<Trie, DictionaryError> {
    Ok(bincode::deserialize_from(reader)?)
}

/// Write a snapshot file.
pub fn save_path(trie: &Trie, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DictionaryError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    save(trie, &mut writer)?;
    writer.flush().map_err(|e| DictionaryError::io(path, e))?;
    info!(path = %path.display(), words = trie.word_count(), "saved trie snapshot");
    Ok(())
}

/// Read a snapshot file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Trie, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DictionaryError::io(path, e))?;
    let trie = load(BufReader::new(file))?;
    info!(path = %path.display(), words = trie.word_count(), "loaded trie snapshot");
    Ok(trie)
}
