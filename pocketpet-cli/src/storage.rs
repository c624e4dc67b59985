//! File-backed pet storage for the terminal shell.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pocketpet_game::PetStorage;

#[derive(Debug, thiserror::Error)]
pub enum FileStorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Stores each record as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key would escape the storage directory.
    pub fn record_path(&self, key: &str) -> Result<PathBuf, FileStorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if valid {
            Ok(self.dir.join(format!("{key}.json")))
        } else {
            Err(FileStorageError::InvalidKey(key.to_string()))
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> FileStorageError {
    FileStorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl PetStorage for FileStorage {
    type Error = FileStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&path, err)),
        }
    }

    fn write(&self, key: &str, record: &str) -> Result<(), Self::Error> {
        let path = self.record_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| io_error(&self.dir, e))?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, record).map_err(|e| io_error(&staging, e))?;
        fs::rename(&staging, &path).map_err(|e| io_error(&path, e))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let path = self.record_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(io_error(&path, err)),
        }
    }
}
