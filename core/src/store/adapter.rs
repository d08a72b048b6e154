//! Persistence adapter contract.

use std::future::Future;
use std::sync::Mutex;

use hashbrown::HashMap;

use super::error::StoreError;

/// Asynchronous key-value store for whole-state blobs.
///
/// `load` must report an unwritten key as `Ok(None)`; absence is a normal
/// result, not an error. `save` overwrites the entire value under the key.
pub trait StateStore {
    fn load(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;
    fn save(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// In-memory store backing tests and the unpersisted mode.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().expect("store mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("store mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
