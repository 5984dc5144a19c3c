use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::SettingsError;
use crate::store::SettingsStore;

/// File-backed settings: one JSON document of key-value pairs, rewritten
/// atomically on every change.
///
/// A corrupt document is logged and treated as empty rather than failing
/// reads; the next write replaces it.
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform config directory for the given application
    /// identity, creating the directory if needed.
    pub fn open_default(qualifier: &str, org: &str, app: &str) -> anyhow::Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, org, app)
            .ok_or(SettingsError::NoConfigDir)
            .context("resolving settings location")?;

        let config_dir = proj_dirs.config_dir();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .with_context(|| format!("creating {}", config_dir.display()))?;
        }
        Ok(Self::new(config_dir.join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_values(&self) -> HashMap<String, Value> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(
                    "settings document corrupt at {}, resetting: {e}",
                    self.path.display()
                );
                HashMap::new()
            }
        }
    }

    fn save_values(&self, values: &HashMap<String, Value>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(values)?;
        atomic_write(&self.path, json.as_bytes())
    }
}

impl SettingsStore for FileSettings {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.load_values().remove(key)?;
        serde_json::from_value(value).ok()
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let mut values = self.load_values();
        values.insert(key.to_string(), serde_json::to_value(value)?);
        self.save_values(&values)
    }

    fn contains(&self, key: &str) -> bool {
        self.load_values().contains_key(key)
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        let mut values = self.load_values();
        if values.remove(key).is_some() {
            self.save_values(&values)?;
        }
        Ok(())
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), SettingsError> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path)?;
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(parent) = path.parent() {
        if let Ok(dir) = fs::File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
