//! Persisted default ignore patterns

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "CANOPY_CONFIG";

/// Patterns used when no settings file exists or it cannot be read.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["node_modules", "target", "__pycache__"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Settings store backed by a JSON file.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `CANOPY_CONFIG` or falls back to the platform config directory.
    pub fn default_location() -> Self {
        let path = std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("canopy")
                    .join("config.json")
            });
        Self::new(path)
    }

    /// Load settings from disk, returning defaults if the file does not exist.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Like [`load`](Self::load), but a broken file only costs a warning.
    pub fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_else(|e| {
            warn!("{}; using default ignore patterns", e);
            Settings::default()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let write_err = |source| SettingsError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let data = serde_json::to_string_pretty(settings)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        fs::write(&self.path, data).map_err(write_err)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
