use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CaliberError;

/// Top-level Caliber configuration, stored at `~/.caliber/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaliberConfig {
    /// Origin the persistent review store is scoped to.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Key of the single entry holding the review collection.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Database file override. Defaults to `~/.caliber/storage.db`.
    #[serde(default)]
    pub database: Option<PathBuf>,
}

fn default_origin() -> String {
    "http://localhost".to_string()
}

fn default_storage_key() -> String {
    "caliber_reviews".to_string()
}

impl Default for CaliberConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            storage_key: default_storage_key(),
            database: None,
        }
    }
}

impl CaliberConfig {
    /// Returns the Caliber home directory (`~/.caliber/`).
    pub fn home_dir() -> Result<PathBuf, CaliberError> {
        let base = dirs::home_dir().ok_or_else(|| CaliberError::Config {
            message: "could not determine home directory".into(),
        })?;
        Ok(base.join(".caliber"))
    }

    pub fn config_path() -> Result<PathBuf, CaliberError> {
        Ok(Self::home_dir()?.join("config.toml"))
    }

    /// Returns the default path to the storage database.
    pub fn db_path() -> Result<PathBuf, CaliberError> {
        Ok(Self::home_dir()?.join("storage.db"))
    }

    /// The database this config points at, honoring the `database` override.
    pub fn resolved_db_path(&self) -> Result<PathBuf, CaliberError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Self::db_path(),
        }
    }

    /// Load config from the default location, or return defaults if not found.
    pub fn load() -> Result<Self, CaliberError> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, CaliberError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        toml::from_str(&content).map_err(|e| CaliberError::Serialization(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CaliberError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CaliberError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Initialize the Caliber home directory with default config.
    pub fn init() -> Result<PathBuf, CaliberError> {
        let home = Self::home_dir()?;
        std::fs::create_dir_all(&home)?;

        let config_path = Self::config_path()?;
        if !config_path.exists() {
            Self::default().save_to(&config_path)?;
        }

        Ok(home)
    }
}
