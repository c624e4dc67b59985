//! Web-specific engine implementation
//!
//! This module provides browser implementations of the pocketpet-game
//! traits and re-exports the core engine types.

// Re-export all types from pocketpet-game
pub use pocketpet_game::*;

use crate::dom;

/// Pet storage backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPetStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WebStorageError {
    fn from_js(err: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(dom::js_error_message(err))
    }
}

impl PetStorage for WebPetStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        storage.get_item(key).map_err(|e| WebStorageError::from_js(&e))
    }

    fn write(&self, key: &str, record: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        storage
            .set_item(key, record)
            .map_err(|e| WebStorageError::from_js(&e))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage().map_err(|e| WebStorageError::from_js(&e))?;
        storage
            .remove_item(key)
            .map_err(|e| WebStorageError::from_js(&e))
    }
}

/// Browser clock reading `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        numbers::round_f64_to_i64(js_sys::Date::now())
    }
}

pub type WebEngine = PetEngine<WebPetStorage, BrowserClock>;

/// Create a browser engine with `WebPetStorage` and `BrowserClock`.
#[must_use]
pub fn create_web_engine() -> WebEngine {
    PetEngine::new(WebPetStorage, BrowserClock, EngineConfig::default_config())
}
