//! Persistence adapter: schemas as JSON blobs in a key-value store.
//!
//! This module provides:
//! - A minimal `KvStore` abstraction over string keys and values
//! - `FileStore` (one file per key under a directory) and `MemoryStore`
//! - `SchemaStore`, which serializes the schema under a fixed key and
//!   stamps `updated_at` on every save
//!
//! The store is a single shared resource with last-writer-wins semantics;
//! only one session ever writes it.

use crate::schema::Schema;
use ahash::AHashMap;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed key the schema document is stored under.
pub const STORAGE_KEY: &str = "schema_flow_data";

/// Failure talking to the underlying store or decoding its contents.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("store read/write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize schema: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored schema is corrupted: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// A string key-value store.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: AHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: each key maps to `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory for the default store
    /// (e.g. `~/.local/share/schema-flow`).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
            .map(|d| d.join("schema-flow"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Schema persistence over any key-value store.
#[derive(Debug)]
pub struct SchemaStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> SchemaStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize the schema under the fixed key, overwriting any prior
    /// value. `updated_at` is stamped to now as part of serialization;
    /// the stamped schema is returned.
    pub fn save(&mut self, schema: &Schema) -> Result<Schema, PersistenceError> {
        let mut stamped = schema.clone();
        stamped.updated_at = Utc::now();

        let text = serde_json::to_string(&stamped).map_err(PersistenceError::Serialize)?;
        self.store.set(STORAGE_KEY, &text)?;
        Ok(stamped)
    }

    /// Load the stored schema, or `None` if nothing has been saved.
    pub fn load(&self) -> Result<Option<Schema>, PersistenceError> {
        match self.store.get(STORAGE_KEY)? {
            Some(text) => {
                let schema =
                    serde_json::from_str(&text).map_err(PersistenceError::Deserialize)?;
                Ok(Some(schema))
            }
            None => Ok(None),
        }
    }

    /// Remove the stored schema.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(STORAGE_KEY)
    }
}
