//! File-backed key-value store: one JSON object mapping keys to strings.

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::warn;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Missing file → empty map.
    fn read_map(&self) -> AppResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write through a sibling temp file and rename it into place.
    fn write_map(&self, map: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(map)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        if fs::rename(&tmp, &self.path).is_err() {
            fs::copy(&tmp, &self.path)?;
            let _ = fs::remove_file(&tmp);
        }
        Ok(())
    }

    /// Contents that are not JSON at all are dropped so that writes can still
    /// succeed. Valid JSON of another shape is left alone and the write fails.
    fn read_map_for_write(&self) -> AppResult<BTreeMap<String, String>> {
        match self.read_map() {
            Ok(map) => Ok(map),
            Err(AppError::Json(e)) => {
                let content = fs::read_to_string(&self.path)?;
                if serde_json::from_str::<serde_json::Value>(&content).is_ok() {
                    return Err(AppError::Storage(format!(
                        "{} is not a map of string slots: {}",
                        self.path.display(),
                        e
                    )));
                }
                warn!(path = %self.path.display(), error = %e, "storage file unreadable, starting fresh");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}
