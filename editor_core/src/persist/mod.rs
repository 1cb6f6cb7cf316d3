//! Persistence boundary - named JSON blobs.
//!
//! The editor core reads and writes opaque, named JSON documents through the
//! [`BlobStore`] trait; what durable medium backs them is the adapter's
//! business. Blob reads fail soft: a missing or malformed blob is "no data",
//! never a crash.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PersistError;

/// The blob keys the editor reads and writes.
pub mod keys {
    pub const IMAGES: &str = "images";
    pub const ACTIONS: &str = "actions";
    pub const PARAMETERS: &str = "parameters";
    pub const CARDS: &str = "cards";
    pub const EVENTS: &str = "events";
    pub const SETTINGS: &str = "settings";

    /// Key the exported document is written under for a given target.
    pub fn game_world(target: &str) -> String {
        format!("game_world:{target}")
    }
}

/// Byte-level load/save of named JSON documents.
pub trait BlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError>;
}

/// Ephemeral adapter for tests and in-browser sessions without storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: BTreeMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.blobs.keys().cloned().collect()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError> {
        self.blobs.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

/// Durable adapter keeping one `<key>.json` file per blob under a root
/// directory.
#[derive(Debug, Clone)]
pub struct DirectoryBlobStore {
    root: PathBuf,
}

impl DirectoryBlobStore {
    /// Use `root` as the blob directory, creating it if needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // ':' appears in game_world keys; keep filenames portable.
        self.root.join(format!("{}.json", key.replace(':', "_")))
    }
}

impl BlobStore for DirectoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), PersistError> {
        fs::write(self.path_for(key), payload)?;
        Ok(())
    }
}

/// Read and decode a blob, failing soft: missing, unreadable, or malformed
/// blobs all come back as `None` so callers can fall back to defaults.
pub fn read_blob<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Option<T> {
    let payload = match store.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, %err, "blob read failed");
            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, %err, "discarding malformed blob");
            None
        }
    }
}

/// Encode and write a blob.
pub fn write_blob<T: Serialize>(
    store: &mut dyn BlobStore,
    key: &str,
    value: &T,
) -> Result<(), PersistError> {
    let payload = serde_json::to_string(value).map_err(|source| PersistError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.write(key, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_model::ImageDescriptor;

    #[test]
    fn test_memory_round_trip() {
        let mut blobs = MemoryBlobStore::new();
        write_blob(&mut blobs, keys::SETTINGS, &vec![1, 2, 3]).unwrap();

        let back: Vec<i32> = read_blob(&blobs, keys::SETTINGS).unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_blob_reads_as_no_data() {
        let blobs = MemoryBlobStore::new();
        assert!(read_blob::<Vec<ImageDescriptor>>(&blobs, keys::IMAGES).is_none());
    }

    #[test]
    fn test_malformed_blob_reads_as_no_data() {
        let mut blobs = MemoryBlobStore::new();
        blobs.write(keys::CARDS, "{not json").unwrap();
        assert!(read_blob::<Vec<ImageDescriptor>>(&blobs, keys::CARDS).is_none());
    }

    #[test]
    fn test_game_world_key_carries_the_target() {
        assert_eq!(keys::game_world("default"), "game_world:default");
    }

    #[test]
    fn test_directory_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut blobs = DirectoryBlobStore::create(dir.path()).unwrap();

        write_blob(&mut blobs, &keys::game_world("default"), &42).unwrap();
        let back: i32 = read_blob(&blobs, &keys::game_world("default")).unwrap();
        assert_eq!(back, 42);

        // The ':' never reaches the filesystem.
        assert!(dir.path().join("game_world_default.json").exists());
    }

    #[test]
    fn test_directory_store_missing_file_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = DirectoryBlobStore::create(dir.path()).unwrap();
        assert!(blobs.read("images").unwrap().is_none());
    }
}
