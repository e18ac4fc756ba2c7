use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuroscale_core::models::record::DEFAULT_ASSESSOR;
use neuroscale_core::record_keys::{DATA_DIR, LEGACY_DIR};
use neuroscale_storage::RecordStore;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NeuroscaleConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory the record directories live under.
    pub data_root: PathBuf,
    /// Where new records are written, relative to `data_root`. Added in v1.
    pub data_dir: String,
    /// Directory older builds wrote to, relative to `data_root`. Added in v1.
    pub legacy_dir: String,
    /// Recorded on every saved assessment. Added in v1.
    pub assessor: String,
}

impl Default for NeuroscaleConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_root: PathBuf::from("."),
            data_dir: DATA_DIR.to_string(),
            legacy_dir: LEGACY_DIR.to_string(),
            assessor: DEFAULT_ASSESSOR.to_string(),
        }
    }
}

impl NeuroscaleConfig {
    pub fn store(&self) -> RecordStore {
        RecordStore::new(
            self.data_root.join(&self.data_dir),
            self.data_root.join(&self.legacy_dir),
        )
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.neuroscale.desktop"))
}

/// `<config dir>/com.neuroscale.desktop/config.json`.
pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Load and migrate the config at `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> eyre::Result<NeuroscaleConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(NeuroscaleConfig::default());
        }
        Err(e) => {
            return Err(eyre::eyre!(
                "failed to read config at {}: {e}",
                path.display()
            ));
        }
    };

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: NeuroscaleConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Neuroscale."
        ));
    }

    // v0 → v1: directory names and assessor became configurable.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("data_root")
            .or_insert(serde_json::Value::String(".".to_string()));
        obj.entry("data_dir")
            .or_insert(serde_json::Value::String(DATA_DIR.to_string()));
        obj.entry("legacy_dir")
            .or_insert(serde_json::Value::String(LEGACY_DIR.to_string()));
        obj.entry("assessor")
            .or_insert(serde_json::Value::String(DEFAULT_ASSESSOR.to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added data_dir, legacy_dir, assessor)");
    }

    Ok(json)
}

/// Write `config` to `path`, stamped with the current version.
pub fn save_config_to(path: &Path, config: &NeuroscaleConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
