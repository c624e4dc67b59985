//! The single-owner pet engine.
use crate::actions::{Action, ActionOutcome, apply_action};
use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::constants::{
    LOG_ENGINE_ACTION, LOG_ENGINE_CATCH_UP, LOG_ENGINE_FRESH, LOG_ENGINE_RESET, LOG_ENGINE_START,
    LOG_ENGINE_TICK,
};
use crate::decay::{catch_up, decay_tick};
use crate::display::PetView;
use crate::presentation::Presentation;
use crate::state::{PetState, debug_log_enabled};
use crate::storage::{PetStorage, load_pet, save_pet};

/// What happened when the engine started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartReport {
    /// No usable saved pet; a fresh one was hatched.
    Fresh,
    /// A saved pet was restored after `elapsed_units` of absence.
    Restored { elapsed_units: u64 },
}

/// Owns the pet, its presentation state and the storage it is saved to.
///
/// Every mutation goes through `&mut self`; shells that need sharing wrap the
/// engine in a single `RefCell` or mutex.
#[derive(Debug)]
pub struct PetEngine<S, C>
where
    S: PetStorage,
    C: Clock,
{
    storage: S,
    clock: C,
    config: EngineConfig,
    state: PetState,
    presentation: Presentation,
    started: bool,
    dirty: bool,
}

impl<S, C> PetEngine<S, C>
where
    S: PetStorage,
    C: Clock,
{
    /// Create an engine holding a fresh pet. Storage is untouched until [`start`](Self::start).
    pub fn new(storage: S, clock: C, config: EngineConfig) -> Self {
        let state = PetState::fresh(&config.pet_name, clock.now_ms());
        Self {
            storage,
            clock,
            config,
            state,
            presentation: Presentation::default(),
            started: false,
            dirty: false,
        }
    }

    /// Load the saved pet (applying catch-up) or hatch a new one.
    ///
    /// A restored pet with no whole unit of absence is not written back, so
    /// the partial unit keeps counting toward the next catch-up.
    pub fn start(&mut self) -> StartReport {
        let now = self.clock.now_ms();
        let report = if let Some(saved) = load_pet(&self.storage, &self.config.storage_key) {
            let outcome = catch_up(&saved, now, self.config.catch_up_unit_ms);
            log::info!(
                "{LOG_ENGINE_CATCH_UP}: restored '{}' after {} unit(s), health drained: {}",
                outcome.state.name,
                outcome.elapsed_units,
                outcome.health_drained
            );
            self.state = outcome.state;
            StartReport::Restored {
                elapsed_units: outcome.elapsed_units,
            }
        } else {
            log::info!("{LOG_ENGINE_FRESH}: hatching '{}'", self.config.pet_name);
            self.state = PetState::fresh(&self.config.pet_name, now);
            StartReport::Fresh
        };
        self.presentation = Presentation::default();
        self.started = true;
        if report == (StartReport::Restored { elapsed_units: 0 }) {
            self.dirty = false;
        } else {
            self.persist();
        }
        log::debug!("{LOG_ENGINE_START}: {report:?}");
        report
    }

    /// Retry any save that failed, then mark the engine stopped.
    pub fn stop(&mut self) {
        if self.started {
            if self.dirty {
                self.persist();
            }
            self.started = false;
        }
    }

    /// Whether the in-memory pet differs from the last successful save.
    #[must_use]
    pub const fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Apply one live decay tick and persist it.
    pub fn tick(&mut self) -> &PetState {
        self.state = decay_tick(&self.state, self.clock.now_ms());
        if debug_log_enabled() {
            println!(
                "{LOG_ENGINE_TICK}: age {} hunger {:.1} happiness {:.1} health {:.1} energy {:.1}",
                self.state.age,
                self.state.hunger,
                self.state.happiness,
                self.state.health,
                self.state.energy
            );
        }
        self.persist();
        &self.state
    }

    /// Run an action, persist the result and show its effect.
    pub fn perform(&mut self, action: Action) -> ActionOutcome {
        let now = self.clock.now_ms();
        self.presentation.advance(now);
        let outcome = apply_action(action, &self.state, now);
        if outcome.accepted {
            self.state = outcome.state.clone();
            self.persist();
        }
        self.presentation.apply(&outcome.effect, now);
        log::debug!(
            "{LOG_ENGINE_ACTION}: {action} accepted={} level={} exp={}",
            outcome.accepted,
            self.state.level,
            self.state.exp
        );
        outcome
    }

    pub fn feed(&mut self) -> ActionOutcome {
        self.perform(Action::Feed)
    }

    pub fn play(&mut self) -> ActionOutcome {
        self.perform(Action::Play)
    }

    pub fn drink(&mut self) -> ActionOutcome {
        self.perform(Action::Drink)
    }

    pub fn sleep(&mut self) -> ActionOutcome {
        self.perform(Action::Sleep)
    }

    /// Clear expired effects; returns the next pending deadline, if any.
    pub fn refresh_presentation(&mut self) -> Option<i64> {
        self.presentation.advance(self.clock.now_ms());
        self.presentation.next_deadline()
    }

    /// Forget the saved pet and hatch a new one.
    pub fn reset(&mut self) {
        if let Err(err) = self.storage.remove(&self.config.storage_key) {
            log::warn!("{LOG_ENGINE_RESET}: could not delete saved pet: {err}");
        }
        self.state = PetState::fresh(&self.config.pet_name, self.clock.now_ms());
        self.presentation = Presentation::default();
        self.persist();
        log::info!("{LOG_ENGINE_RESET}: hatched '{}'", self.state.name);
    }

    /// Read-only view of the current pet.
    #[must_use]
    pub const fn current_state(&self) -> &PetState {
        &self.state
    }

    #[must_use]
    pub const fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    #[must_use]
    pub fn view(&self) -> PetView {
        PetView::compose(&self.state, &self.presentation)
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        self.dirty = !save_pet(&self.storage, &self.config.storage_key, &self.state);
    }
}
