use crate::errors::AppResult;
use crate::storage::DEFAULT_SLOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage")]
    pub storage: String,
    #[serde(default = "default_slot")]
    pub slot: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_show_dates")]
    pub show_dates: bool,
}

fn default_storage() -> String {
    Config::storage_file().to_string_lossy().to_string()
}
fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_show_dates() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            slot: default_slot(),
            log_level: default_log_level(),
            show_dates: default_show_dates(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rminutes")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rminutes.conf")
    }

    /// Return the default path of the ledger storage file
    pub fn storage_file() -> PathBuf {
        Self::config_dir().join("rminutes.json")
    }

    /// Storage file with a leading `~/` resolved against the home directory.
    pub fn storage_path(&self) -> PathBuf {
        match (self.storage.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.storage),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    /// Parse a YAML document; keys left out take their defaults.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
