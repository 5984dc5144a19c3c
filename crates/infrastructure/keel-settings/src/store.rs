use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::SettingsError;

/// Key-value settings persistence.
///
/// Reads are tolerant: a missing key or a value that no longer deserializes
/// as `T` yields `None`, and callers fall back to their defaults. Writes
/// fail loudly.
pub trait SettingsStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T>;

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError>;

    fn contains(&self, key: &str) -> bool;

    fn remove(&self, key: &str) -> Result<(), SettingsError>;
}

/// In-memory store for tests and hosts without a filesystem.
#[derive(Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, Value>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let values = self.values.lock().unwrap();
        let value = values.get(key)?.clone();
        serde_json::from_value(value).ok()
    }

    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let value = serde_json::to_value(value)?;
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.values.lock().unwrap().contains_key(key)
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
