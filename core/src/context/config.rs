use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::store;

const APP_NAME: &str = "nemesis";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding persisted tracker state. Empty means the platform
    /// data dir.
    #[serde(default)]
    pub data_directory: String,
    /// When false the tracker runs purely in memory.
    #[serde(default = "default_persist")]
    pub persist_state: bool,
}

fn default_persist() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: String::new(),
            persist_state: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load(APP_NAME, None).unwrap_or_default()
    }

    pub fn save(self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self).map_err(ConfigError::Save)
    }

    /// Where persisted state lives under this config.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if self.data_directory.is_empty() {
            store::default_data_dir()
        } else {
            PathBuf::from(&self.data_directory)
        }
    }
}
