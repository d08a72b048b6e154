//! Persistence for the two session state containers.
//!
//! State is stored as whole-value TOML blobs under fixed keys, one file per
//! key. Absence is a normal result: a first run loads nothing and starts
//! from defaults.

mod adapter;
mod error;
mod file;
mod writer;

#[cfg(test)]
mod store_tests;

pub use adapter::{MemoryStore, StateStore};
pub use error::StoreError;
pub use file::FileStore;
pub use writer::StoreWriter;

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key the rotation state persists under.
pub const ROTATION_KEY: &str = "rotation";
/// Key the fight record log persists under.
pub const RECORD_KEY: &str = "records";

/// Default state directory, `~/.local/share/nemesis/` or the platform
/// equivalent.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nemesis")
}

/// Serialize a state container for storage.
pub fn encode<T: Serialize>(value: &T) -> Result<String, StoreError> {
    Ok(toml::to_string(value)?)
}

/// Deserialize a stored blob back into a state container.
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T, StoreError> {
    Ok(toml::from_str(payload)?)
}
