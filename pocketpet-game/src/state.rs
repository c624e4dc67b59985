//! The persisted pet record and its invariants.
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEBUG_ENV_VAR, DEFAULT_ENERGY, DEFAULT_HAPPINESS, DEFAULT_HEALTH, DEFAULT_HUNGER,
    DEFAULT_LEVEL, DEFAULT_PET_NAME, EXP_PER_LEVEL, NEGLECT_THRESHOLD,
};
use crate::numbers::{clamp_stat, floor_f64_to_u32};

#[cfg(debug_assertions)]
pub(crate) fn debug_log_enabled() -> bool {
    matches!(std::env::var(DEBUG_ENV_VAR), Ok(val) if val != "0")
}

#[cfg(not(debug_assertions))]
pub(crate) const fn debug_log_enabled() -> bool {
    false
}

fn default_name() -> String {
    DEFAULT_PET_NAME.to_string()
}

const fn default_level() -> u32 {
    DEFAULT_LEVEL
}

/// Complete simulation state of the single pet.
///
/// Field names follow the flat record layout stored under
/// [`STORAGE_KEY`](crate::constants::STORAGE_KEY), so `last_update` is
/// serialized as `lastUpdate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetState {
    #[serde(default = "default_name")]
    pub name: String,
    pub hunger: f64,
    pub happiness: f64,
    pub health: f64,
    pub energy: f64,
    #[serde(default)]
    pub age: u64,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub exp: f64,
    pub last_update: i64,
}

impl Default for PetState {
    fn default() -> Self {
        Self::fresh(DEFAULT_PET_NAME, 0)
    }
}

impl PetState {
    /// A newly hatched pet with default stats, stamped at `now_ms`.
    #[must_use]
    pub fn fresh(name: &str, now_ms: i64) -> Self {
        let name = if name.trim().is_empty() {
            default_name()
        } else {
            name.to_string()
        };
        Self {
            name,
            hunger: DEFAULT_HUNGER,
            happiness: DEFAULT_HAPPINESS,
            health: DEFAULT_HEALTH,
            energy: DEFAULT_ENERGY,
            age: 0,
            level: DEFAULT_LEVEL,
            exp: 0.0,
            last_update: now_ms,
        }
    }

    /// Force every bounded field back into range.
    pub fn clamp(&mut self) {
        self.hunger = clamp_stat(self.hunger);
        self.happiness = clamp_stat(self.happiness);
        self.health = clamp_stat(self.health);
        self.energy = clamp_stat(self.energy);
        self.level = self.level.max(DEFAULT_LEVEL);
        if !self.exp.is_finite() || self.exp < 0.0 {
            self.exp = 0.0;
        }
        if self.exp >= EXP_PER_LEVEL {
            self.roll_exp();
        }
        if self.name.trim().is_empty() {
            self.name = default_name();
        }
    }

    /// Add experience, converting every full 100 into a level.
    ///
    /// Works from the current `exp` rather than re-deriving it from `level`.
    pub fn gain_exp(&mut self, gained: f64) {
        self.exp += gained.max(0.0);
        self.roll_exp();
    }

    fn roll_exp(&mut self) {
        let levels = floor_f64_to_u32(self.exp / EXP_PER_LEVEL);
        self.level = self.level.saturating_add(levels);
        self.exp %= EXP_PER_LEVEL;
    }

    /// Whether either hunger or happiness is low enough to hurt health.
    #[must_use]
    pub fn is_neglected(&self) -> bool {
        self.hunger < NEGLECT_THRESHOLD || self.happiness < NEGLECT_THRESHOLD
    }

    /// True once every bounded field is in range.
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        let stat_ok = |v: f64| (0.0..=100.0).contains(&v);
        stat_ok(self.hunger)
            && stat_ok(self.happiness)
            && stat_ok(self.health)
            && stat_ok(self.energy)
            && (0.0..EXP_PER_LEVEL).contains(&self.exp)
            && self.level >= DEFAULT_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pet_uses_defaults() {
        let pet = PetState::fresh("Mochi", 1_000);
        assert_eq!(pet.name, "Mochi");
        assert!((pet.hunger - 80.0).abs() < f64::EPSILON);
        assert!((pet.happiness - 80.0).abs() < f64::EPSILON);
        assert!((pet.health - 100.0).abs() < f64::EPSILON);
        assert!((pet.energy - 90.0).abs() < f64::EPSILON);
        assert_eq!(pet.age, 0);
        assert_eq!(pet.level, 1);
        assert!(pet.exp.abs() < f64::EPSILON);
        assert_eq!(pet.last_update, 1_000);
    }

    #[test]
    fn blank_name_falls_back() {
        assert_eq!(PetState::fresh("  ", 0).name, DEFAULT_PET_NAME);
    }

    #[test]
    fn exp_rolls_into_levels() {
        let mut pet = PetState {
            exp: 95.0,
            ..PetState::default()
        };
        pet.gain_exp(10.0);
        assert_eq!(pet.level, 2);
        assert!((pet.exp - 5.0).abs() < 1e-9);

        pet.gain_exp(250.0);
        assert_eq!(pet.level, 4);
        assert!((pet.exp - 55.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_small_gains_do_not_double_count() {
        let mut pet = PetState::default();
        for _ in 0..20 {
            pet.gain_exp(10.0);
        }
        assert_eq!(pet.level, 3);
        assert!(pet.exp.abs() < 1e-9);
    }

    #[test]
    fn clamp_repairs_out_of_range_values() {
        let mut pet = PetState {
            hunger: 140.0,
            happiness: -5.0,
            health: f64::NAN,
            energy: 100.0,
            exp: 230.0,
            level: 0,
            ..PetState::default()
        };
        pet.clamp();
        assert!(pet.is_within_bounds());
        assert_eq!(pet.level, 3);
        assert!((pet.exp - 30.0).abs() < 1e-9);
        assert!(pet.health.abs() < f64::EPSILON);
    }

    #[test]
    fn record_uses_flat_camel_case_layout() {
        let pet = PetState::fresh("Pet", 42);
        let value = serde_json::to_value(&pet).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            [
                "age",
                "energy",
                "exp",
                "happiness",
                "health",
                "hunger",
                "lastUpdate",
                "level",
                "name"
            ]
        );
        assert_eq!(obj["lastUpdate"], 42);
    }
}
