use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use core_types::{KeyValueStorage, StorageError};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageFile {
    schema_version: u32,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Key-value storage persisted as a single JSON file, surviving restarts
/// of the process that owns it.
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    cache: Mutex<Option<BTreeMap<String, String>>>,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    pub fn from_default_location() -> Result<Self, StorageError> {
        let mut dir = dirs::data_local_dir()
            .ok_or_else(|| StorageError::Unavailable("no local data dir".to_string()))?;
        dir.push("forkit");
        Ok(Self::from_dir(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_values(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let file: StorageFile = serde_json::from_str(&raw)?;
        if file.schema_version > SCHEMA_VERSION {
            warn!(
                found = file.schema_version,
                supported = SCHEMA_VERSION,
                "storage file written by a newer version"
            );
        }
        Ok(file.values)
    }

    fn save_values(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = StorageFile {
            schema_version: SCHEMA_VERSION,
            values: values.clone(),
        };
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), "storage file persisted");
        Ok(())
    }
}

impl KeyValueStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut cache = self.cache.lock();
        if cache.is_none() {
            *cache = Some(self.load_values()?);
        }
        Ok(cache.as_ref().and_then(|values| values.get(key).cloned()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.lock();
        let mut values = match cache.as_ref() {
            Some(values) => values.clone(),
            None => match self.load_values() {
                Ok(values) => values,
                Err(StorageError::Json(err)) => {
                    warn!(
                        path = %self.path.display(),
                        error = %err,
                        "storage file is corrupt, starting over"
                    );
                    BTreeMap::new()
                }
                Err(err) => return Err(err),
            },
        };
        values.insert(key.to_string(), value.to_string());
        self.save_values(&values).map_err(|err| quota_exceeded_or(err, key))?;
        *cache = Some(values);
        Ok(())
    }
}

fn quota_exceeded_or(err: StorageError, key: &str) -> StorageError {
    match err {
        StorageError::Io(io) if io.kind() == ErrorKind::StorageFull => {
            StorageError::QuotaExceeded {
                key: key.to_string(),
            }
        }
        other => other,
    }
}

/// Volatile storage, for hosts without a durable profile and for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.values.lock().insert(key.into(), value.into());
        storage
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.lock().clone()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
