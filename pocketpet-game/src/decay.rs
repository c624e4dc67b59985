//! Time-driven stat decay.
//!
//! Two rules live here. [`decay_tick`] is the live rule applied once per
//! tick while a session is open. [`catch_up`] approximates the neglect that
//! happened while no session was running, using coarser per-minute rates and
//! a health trigger evaluated on the stats the pet was left with.
use crate::constants::{
    CATCH_UP_ENERGY_PER_UNIT, CATCH_UP_HAPPINESS_PER_UNIT, CATCH_UP_HEALTH_PER_UNIT,
    CATCH_UP_HUNGER_PER_UNIT, TICK_ENERGY_DECAY, TICK_HAPPINESS_DECAY, TICK_HEALTH_DECAY,
    TICK_HUNGER_DECAY,
};
use crate::numbers::{clamp_stat, elapsed_units, u64_to_f64};
use crate::state::PetState;

/// Apply one live decay tick.
///
/// The health check runs against the already decayed hunger and happiness.
#[must_use]
pub fn decay_tick(state: &PetState, now_ms: i64) -> PetState {
    let mut next = state.clone();
    next.hunger = clamp_stat(next.hunger - TICK_HUNGER_DECAY);
    next.happiness = clamp_stat(next.happiness - TICK_HAPPINESS_DECAY);
    next.energy = clamp_stat(next.energy - TICK_ENERGY_DECAY);
    next.age = next.age.saturating_add(1);
    if next.is_neglected() {
        next.health = clamp_stat(next.health - TICK_HEALTH_DECAY);
    }
    next.last_update = now_ms;
    next.clamp();
    next
}

/// Summary of a catch-up pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchUp {
    pub state: PetState,
    /// Whole units charged against the pet.
    pub elapsed_units: u64,
    /// Whether health was drained because the pet was left neglected.
    pub health_drained: bool,
}

/// Back-fill decay for the time between `state.last_update` and `now_ms`.
///
/// Age, level and experience are left untouched.
#[must_use]
pub fn catch_up(state: &PetState, now_ms: i64, unit_ms: u64) -> CatchUp {
    let units = elapsed_units(state.last_update, now_ms, unit_ms);
    let span = u64_to_f64(units);
    let neglected = state.is_neglected();

    let mut next = state.clone();
    next.hunger = clamp_stat(next.hunger - span * CATCH_UP_HUNGER_PER_UNIT);
    next.happiness = clamp_stat(next.happiness - span * CATCH_UP_HAPPINESS_PER_UNIT);
    next.energy = clamp_stat(next.energy - span * CATCH_UP_ENERGY_PER_UNIT);
    if neglected {
        next.health = clamp_stat(next.health - span * CATCH_UP_HEALTH_PER_UNIT);
    }
    next.last_update = now_ms;
    next.clamp();

    CatchUp {
        state: next,
        elapsed_units: units,
        health_drained: neglected && units > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CATCH_UP_UNIT_MS;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tick_decays_and_ages() {
        let pet = PetState::fresh("Pet", 0);
        let next = decay_tick(&pet, 10_000);
        assert!(approx(next.hunger, 79.5));
        assert!(approx(next.happiness, 79.7));
        assert!(approx(next.energy, 89.6));
        assert!(approx(next.health, 100.0));
        assert_eq!(next.age, 1);
        assert_eq!(next.last_update, 10_000);
    }

    #[test]
    fn tick_drains_health_when_decayed_hunger_crosses_threshold() {
        let pet = PetState {
            hunger: 20.2,
            ..PetState::fresh("Pet", 0)
        };
        let next = decay_tick(&pet, 1);
        assert!(approx(next.hunger, 19.7));
        assert!(approx(next.health, 99.5));
    }

    #[test]
    fn tick_floors_at_zero() {
        let pet = PetState {
            hunger: 0.2,
            happiness: 0.1,
            energy: 0.0,
            health: 0.3,
            ..PetState::default()
        };
        let next = decay_tick(&pet, 5);
        assert!(next.hunger.abs() < f64::EPSILON);
        assert!(next.happiness.abs() < f64::EPSILON);
        assert!(next.energy.abs() < f64::EPSILON);
        assert!(next.health.abs() < f64::EPSILON);
    }

    #[test]
    fn catch_up_after_five_minutes() {
        let pet = PetState::fresh("Pet", 1_000);
        let outcome = catch_up(&pet, 1_000 + 5 * 60_000, CATCH_UP_UNIT_MS);
        assert_eq!(outcome.elapsed_units, 5);
        assert!(!outcome.health_drained);
        let next = outcome.state;
        assert!(approx(next.hunger, 70.0));
        assert!(approx(next.happiness, 75.0));
        assert!(approx(next.energy, 82.5));
        assert!(approx(next.health, 100.0));
        assert_eq!(next.age, pet.age);
        assert_eq!(next.level, pet.level);
        assert!(approx(next.exp, pet.exp));
        assert_eq!(next.last_update, 1_000 + 5 * 60_000);
    }

    #[test]
    fn catch_up_uses_pre_gap_threshold_for_health() {
        // Hunger falls below 20 during the gap but started above it.
        let pet = PetState {
            hunger: 25.0,
            ..PetState::fresh("Pet", 0)
        };
        let outcome = catch_up(&pet, 10 * 60_000, CATCH_UP_UNIT_MS);
        assert!(approx(outcome.state.hunger, 5.0));
        assert!(approx(outcome.state.health, 100.0));

        let starving = PetState {
            hunger: 10.0,
            ..PetState::fresh("Pet", 0)
        };
        let outcome = catch_up(&starving, 10 * 60_000, CATCH_UP_UNIT_MS);
        assert!(outcome.health_drained);
        assert!(approx(outcome.state.health, 90.0));
        assert!(outcome.state.hunger.abs() < f64::EPSILON);
    }

    #[test]
    fn catch_up_ignores_partial_units_and_backwards_clocks() {
        let pet = PetState::fresh("Pet", 100_000);
        let partial = catch_up(&pet, 100_000 + 59_999, CATCH_UP_UNIT_MS);
        assert_eq!(partial.elapsed_units, 0);
        assert!(approx(partial.state.hunger, pet.hunger));
        assert_eq!(partial.state.last_update, 159_999);

        let skewed = catch_up(&pet, 0, CATCH_UP_UNIT_MS);
        assert_eq!(skewed.elapsed_units, 0);
        assert!(approx(skewed.state.energy, pet.energy));
    }
}
