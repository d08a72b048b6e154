//! File-backed state store.
//!
//! One TOML file per key inside the configured state directory, written
//! whole on every save.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::adapter::StateStore;
use super::error::StoreError;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.toml"))
    }
}

impl StateStore for FileStore {
    async fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::ReadFile { path, source }),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Err(source) = tokio::fs::create_dir_all(&self.dir).await {
            return Err(StoreError::CreateDir {
                path: self.dir.clone(),
                source,
            });
        }

        let path = self.path_for(key);
        if let Err(source) = tokio::fs::write(&path, value).await {
            return Err(StoreError::WriteFile { path, source });
        }

        tracing::debug!(path = %path.display(), "state saved");
        Ok(())
    }
}
