use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Error, Result, anyhow};
use tracing::debug;

/// Durable string key-value storage, one file per key under a directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| anyhow!("Failed to create storage directory {}: {}", dir.display(), e))?;

        debug!(dir = %dir.display(), "Local storage opened");

        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, Error> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && key != "."
            && key != "..";

        if !valid {
            return Err(anyhow!("Invalid storage key '{}'", key));
        }
        Ok(self.dir.join(key))
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow!("Failed to read storage key '{}': {}", key, e)),
        }
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|e| anyhow!("Failed to write storage key '{}': {}", key, e))
    }

    /// Removing a missing key is not an error.
    pub fn remove_item(&self, key: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow!("Failed to remove storage key '{}': {}", key, e)),
        }
    }
}
