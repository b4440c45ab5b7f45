//! Best-effort local key-value persistence used by the presentation cache.
//!
//! Failures are logged and swallowed: a read failure looks like a missing
//! key, a write failure leaves the previous value (if any) in place.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use site_logging::{site_error, site_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::filename::cache_filename;

pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => {
                site_warn!("Memory cache lock poisoned; treating {} as missing", key);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(key.to_string(), value.to_string());
            }
            Err(_) => site_warn!("Memory cache lock poisoned; dropping write for {}", key),
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cache directory missing or not writable: {0}")]
    Directory(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// One JSON file per key inside a directory, replaced atomically on write.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(cache_filename(key))
    }

    fn write_atomically(&self, key: &str, value: &str) -> Result<PathBuf, PersistError> {
        ensure_dir(&self.dir)?;
        let target = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&target).map_err(|err| PersistError::Io(err.error))?;
        Ok(target)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                site_warn!("Failed to read cache entry {:?}: {}", path, err);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.write_atomically(key, value) {
            site_error!("Failed to write cache entry {} in {:?}: {}", key, self.dir, err);
        }
    }
}

/// Creates `dir` when missing; fails when it exists but is not a directory.
pub fn ensure_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PersistError::Directory(format!(
            "{} is not a directory",
            dir.display()
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir)
            .map_err(|err| PersistError::Directory(err.to_string())),
        Err(err) => Err(PersistError::Directory(err.to_string())),
    }
}
