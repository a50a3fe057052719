//! Store implementations.
//!
//! Configurations are stored one per key:
//! - [`MemoryStore`] keeps them in a map, for tests and embeddings
//!   without a filesystem.
//! - [`JsonFileStore`] keeps one `<key>.json` per key under a base
//!   directory, in the platform configuration folder by default.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use directories::ProjectDirs;
use ucm_model::CurveConfig;

use crate::envelope::{self, Envelope};
use crate::error::{Result, StoreError};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ucm-lab";
const APP_NAME: &str = "Banked Curve Lab";

/// Key the embedding application stores its single configuration under.
pub const DEFAULT_CONFIG_KEY: &str = "banked-curve";

/// Storage contract for the persisted configuration.
///
/// The contract is deliberately asymmetric. `load` is total: a missing
/// key, an unreadable file, or a malformed payload falls back to
/// [`CurveConfig::default`] with a logged diagnostic, never an error.
/// `save` reports failure so the caller decides how loudly to care; the
/// session layer treats it as fire-and-forget.
pub trait ConfigStore {
    /// Fetch the configuration stored under `key`, or the default.
    fn load(&self, key: &str) -> CurveConfig;

    /// Persist `config` under `key`.
    fn save(&mut self, key: &str, config: &CurveConfig) -> Result<()>;
}

/// In-memory store backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, CurveConfig>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self, key: &str) -> CurveConfig {
        self.entries.get(key).copied().unwrap_or_else(|| {
            tracing::info!("No stored configuration for {key:?}, using defaults");
            CurveConfig::default()
        })
    }

    fn save(&mut self, key: &str, config: &CurveConfig) -> Result<()> {
        self.entries.insert(key.to_string(), *config);
        Ok(())
    }
}

/// File-backed store: one JSON envelope per key under a base directory.
///
/// Keys are plain file stems, not paths; the embedding application passes
/// identifiers like [`DEFAULT_CONFIG_KEY`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Store files under `base_dir`. The directory is created on first
    /// save.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store under the platform configuration directory.
    ///
    /// - macOS: `~/Library/Application Support/com.ucm-lab.Banked Curve Lab/`
    /// - Windows: `%APPDATA%/ucm-lab/config/`
    /// - Linux: `~/.config/bankedcurvelab/`
    pub fn at_default_location() -> Result<Self> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
            .map(|dirs| Self::new(dirs.config_dir()))
            .ok_or(StoreError::NoStorePath)
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl ConfigStore for JsonFileStore {
    fn load(&self, key: &str) -> CurveConfig {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => match envelope::decode(&content) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(reason) => {
                    tracing::warn!(
                        "Ignoring stored configuration at {}: {reason}, using defaults",
                        path.display()
                    );
                    CurveConfig::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "No stored configuration at {}, using defaults",
                    path.display()
                );
                CurveConfig::default()
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read {}: {e}, using defaults",
                    path.display()
                );
                CurveConfig::default()
            }
        }
    }

    fn save(&mut self, key: &str, config: &CurveConfig) -> Result<()> {
        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(&Envelope::wrap(*config))
            .map_err(|e| StoreError::Serialize { source: e })?;

        fs::create_dir_all(&self.base_dir).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: self.base_dir.clone(),
            source: e,
        })?;

        // Write to a temp file in the target directory, then rename into
        // place; a crash mid-write never leaves a truncated payload
        // behind.
        let temp_path = path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &path).map_err(|e| StoreError::Io {
            operation: "rename",
            path: path.clone(),
            source: e,
        })?;

        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }
}
