//! Persistence of the single pet record.
//!
//! Platforms provide a [`PetStorage`] (browser `localStorage`, a file on
//! disk, memory in tests). The engine only ever goes through [`load_pet`]
//! and [`save_pet`], which never fail: a missing or unreadable record means
//! "no saved pet" and a failed write is logged and dropped.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::state::PetState;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Text key-value store holding persisted records.
pub trait PetStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn write(&self, key: &str, record: &str) -> Result<(), Self::Error>;

    /// Delete the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the deletion.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Serialize a pet into its flat JSON record.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_record(state: &PetState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

/// Parse a flat JSON record, forcing the result back into range.
///
/// # Errors
///
/// Returns an error if the record is not a valid pet.
pub fn decode_record(record: &str) -> Result<PetState, StorageError> {
    let mut state: PetState = serde_json::from_str(record)?;
    state.clamp();
    Ok(state)
}

/// Load the saved pet, treating any failure as absence.
pub fn load_pet<S: PetStorage>(storage: &S, key: &str) -> Option<PetState> {
    let record = match storage.read(key) {
        Ok(Some(record)) => record,
        Ok(None) => return None,
        Err(err) => {
            log::warn!("could not read saved pet '{key}': {err}");
            return None;
        }
    };
    match decode_record(&record) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("discarding unreadable saved pet '{key}': {err}");
            None
        }
    }
}

/// Persist the pet, logging instead of failing. Returns whether the record was written.
pub fn save_pet<S: PetStorage>(storage: &S, key: &str, state: &PetState) -> bool {
    let result = encode_record(state).and_then(|record| {
        storage
            .write(key, &record)
            .map_err(|e| StorageError::Storage(e.to_string()))
    });
    if let Err(err) = &result {
        log::warn!("could not save pet '{key}': {err}");
    }
    result.is_ok()
}

/// In-process storage, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw record.
    #[must_use]
    pub fn with_record(key: &str, record: &str) -> Self {
        let storage = Self::default();
        if let Ok(mut records) = storage.records.lock() {
            records.insert(key.to_string(), record.to_string());
        }
        storage
    }
}

impl PetStorage for MemoryStorage {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let records = self
            .records
            .lock()
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        Ok(records.get(key).cloned())
    }

    fn write(&self, key: &str, record: &str) -> Result<(), Self::Error> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        records.insert(key.to_string(), record.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| StorageError::Storage(e.to_string()))?;
        records.remove(key);
        Ok(())
    }
}
