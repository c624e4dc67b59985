//! Engine configuration
use serde::{Deserialize, Serialize};

use crate::constants::{CATCH_UP_UNIT_MS, DEFAULT_PET_NAME, STORAGE_KEY, TICK_PERIOD_MS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Timing and identity knobs for a [`PetEngine`](crate::PetEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name given to a newly hatched pet.
    pub pet_name: String,
    /// Period of the live decay loop.
    pub tick_period_ms: u64,
    /// Length of one catch-up unit applied on load.
    pub catch_up_unit_ms: u64,
    /// Key of the persisted record.
    pub storage_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pet_name: DEFAULT_PET_NAME.to_string(),
            tick_period_ms: TICK_PERIOD_MS,
            catch_up_unit_ms: CATCH_UP_UNIT_MS,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Get default configuration
    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a period is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the timing values are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if either period is zero or the storage key is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick_period_ms must be positive"));
        }
        if self.catch_up_unit_ms == 0 {
            return Err(ConfigError::Invalid("catch_up_unit_ms must be positive"));
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty"));
        }
        Ok(())
    }
}
