//! Error types for state persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors during state store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create state directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read state file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize state")]
    Encode(#[from] toml::ser::Error),

    #[error("stored state is not valid TOML")]
    Decode(#[from] toml::de::Error),
}
