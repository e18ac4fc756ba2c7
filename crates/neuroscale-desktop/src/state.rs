use std::path::PathBuf;
use std::sync::Mutex;

use neuroscale_storage::RecordStore;

use crate::config::{self, NeuroscaleConfig};

/// Shared state behind the command layer.
pub struct DesktopState {
    /// Where [`crate::commands::update_config`] persists changes.
    pub config_path: PathBuf,
    pub config: Mutex<NeuroscaleConfig>,
}

impl DesktopState {
    pub fn new(config_path: PathBuf, config: NeuroscaleConfig) -> Self {
        Self {
            config_path,
            config: Mutex::new(config),
        }
    }

    /// State backed by the config file in the user's config directory.
    pub fn load() -> eyre::Result<Self> {
        let path = config::config_path()?;
        let config = config::load_config_from(&path)?;
        Ok(Self::new(path, config))
    }

    pub fn config(&self) -> Result<NeuroscaleConfig, String> {
        self.config
            .lock()
            .map(|config| config.clone())
            .map_err(|e| format!("config lock poisoned: {e}"))
    }

    pub fn store(&self) -> Result<RecordStore, String> {
        Ok(self.config()?.store())
    }
}
