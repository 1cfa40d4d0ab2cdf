//! Persistence of saved patterns and regex history.
//!
//! The playground persists two collections, each under its own key in a
//! key-value [`Storage`]:
//! - [`SAVED_PATTERNS_KEY`] - the list of saved patterns
//! - [`REGEX_HISTORY_KEY`] - the regex history, most recent first
//!
//! Values are JSON documents replaced wholesale on every write.
//! [`Persistence`] wraps a storage backend with the recovery rules: a
//! missing or malformed value reads as an empty collection, and a failed
//! write is logged rather than propagated.

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{PlaygroundError, Result};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key for the saved pattern list.
pub const SAVED_PATTERNS_KEY: &str = "savedPatterns";

/// Key for the regex history list.
pub const REGEX_HISTORY_KEY: &str = "regexHistory";

/// A string key-value store.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Collection-level access to a [`Storage`] backend.
#[derive(Debug)]
pub struct Persistence<S> {
    storage: S,
}

impl<S: Storage> Persistence<S> {
    /// Wrap a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read and decode the collection under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` if the backend fails or the value is not a
    /// JSON list of `T`.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.storage.read(key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| PlaygroundError::StorageRead {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    /// Read the collection under `key`, treating any failure as empty.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(items) => {
                debug!("Loaded {} item(s) from '{}'", items.len(), key);
                items
            }
            Err(e) => {
                warn!("{}; starting with an empty collection", e);
                Vec::new()
            }
        }
    }

    /// Encode and write the collection under `key`.
    pub fn try_save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items).map_err(|e| PlaygroundError::StorageWrite {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.storage.write(key, &json)
    }

    /// Write the collection under `key`, logging instead of failing.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) {
        if let Err(e) = self.try_save(key, items) {
            warn!("Could not persist '{}': {}", key, e);
        }
    }
}
