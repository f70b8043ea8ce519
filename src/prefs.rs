//! Flat key/value preference storage.
//!
//! Values are whole string sets. There is no partial update and no
//! compare-and-swap: `put_set` replaces whatever was stored under the key.
//!
//! CHANGELOG:
//! - 10/11/2026 - JSON file backend
//! - 10/10/2026 - Initial trait

use crate::error::PreferencesError;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait KeyValueStore {
    /// Set stored under `key`, or an empty set if nothing is stored.
    fn get_set(&self, key: &str) -> Result<BTreeSet<String>, PreferencesError>;

    /// Replace the set stored under `key`.
    fn put_set(&self, key: &str, value: &BTreeSet<String>) -> Result<(), PreferencesError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_set(&self, key: &str) -> Result<BTreeSet<String>, PreferencesError> {
        (**self).get_set(key)
    }

    fn put_set(&self, key: &str, value: &BTreeSet<String>) -> Result<(), PreferencesError> {
        (**self).put_set(key, value)
    }
}

/// Raw file contents. Values other than the requested key are never decoded.
type PreferenceMap = Map<String, Value>;

/// Preferences kept in one JSON object on disk, e.g.
/// `{"trustedList": ["5551234567"]}`.
///
/// The file is created on first write. A missing file reads as empty.
/// Keys written by something else, with any JSON value, are left alone.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> Result<PreferenceMap, PreferencesError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(PreferenceMap::new()),
            Err(source) => {
                return Err(PreferencesError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(PreferenceMap::new());
        }

        serde_json::from_str(&content).map_err(|source| PreferencesError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, prefs: &PreferenceMap) -> Result<(), PreferencesError> {
        let io_err = |source: std::io::Error| PreferencesError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let json = serde_json::to_string_pretty(prefs)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFilePreferences {
    fn get_set(&self, key: &str) -> Result<BTreeSet<String>, PreferencesError> {
        let mut prefs = self.read_all()?;
        match prefs.remove(key) {
            None | Some(Value::Null) => Ok(BTreeSet::new()),
            Some(value) => serde_json::from_value(value).map_err(|source| PreferencesError::Parse {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn put_set(&self, key: &str, value: &BTreeSet<String>) -> Result<(), PreferencesError> {
        let mut prefs = self.read_all()?;
        prefs.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_all(&prefs)?;
        debug!(key, entries = value.len(), path = ?self.path, "wrote preference set");
        Ok(())
    }
}
