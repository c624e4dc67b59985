//! Centralized balance and tuning constants for Pocketpet.
//!
//! These values define the deterministic math for the pet simulation.
//! Keeping them together ensures that behaviour can only be adjusted via
//! code changes reviewed in version control.

// Logging keys -------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "POCKETPET_DEBUG_LOGS";
pub(crate) const LOG_ENGINE_START: &str = "engine.start";
pub(crate) const LOG_ENGINE_FRESH: &str = "engine.fresh";
pub(crate) const LOG_ENGINE_CATCH_UP: &str = "engine.catch-up";
pub(crate) const LOG_ENGINE_TICK: &str = "engine.tick";
pub(crate) const LOG_ENGINE_ACTION: &str = "engine.action";
pub(crate) const LOG_ENGINE_RESET: &str = "engine.reset";

// Storage ------------------------------------------------------------------
/// Key under which the single pet record is persisted.
pub const STORAGE_KEY: &str = "virtual-pet";

// Stat bounds --------------------------------------------------------------
pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;
/// Experience needed for one level.
pub const EXP_PER_LEVEL: f64 = 100.0;

// Fresh pet ----------------------------------------------------------------
pub const DEFAULT_PET_NAME: &str = "Pet";
pub const DEFAULT_HUNGER: f64 = 80.0;
pub const DEFAULT_HAPPINESS: f64 = 80.0;
pub const DEFAULT_HEALTH: f64 = 100.0;
pub const DEFAULT_ENERGY: f64 = 90.0;
pub const DEFAULT_LEVEL: u32 = 1;

// Live decay ---------------------------------------------------------------
pub const TICK_PERIOD_MS: u64 = 10_000;
pub const TICK_HUNGER_DECAY: f64 = 0.5;
pub const TICK_HAPPINESS_DECAY: f64 = 0.3;
pub const TICK_ENERGY_DECAY: f64 = 0.4;
pub const TICK_HEALTH_DECAY: f64 = 0.5;
/// Hunger or happiness below this value starts draining health.
pub const NEGLECT_THRESHOLD: f64 = 20.0;

// Catch-up -----------------------------------------------------------------
pub const CATCH_UP_UNIT_MS: u64 = 60_000;
pub const CATCH_UP_HUNGER_PER_UNIT: f64 = 2.0;
pub const CATCH_UP_HAPPINESS_PER_UNIT: f64 = 1.0;
pub const CATCH_UP_ENERGY_PER_UNIT: f64 = 1.5;
pub const CATCH_UP_HEALTH_PER_UNIT: f64 = 1.0;

// Actions ------------------------------------------------------------------
pub const FEED_HUNGER_GAIN: f64 = 30.0;
pub const FEED_EXP_GAIN: f64 = 10.0;
pub const PLAY_HAPPINESS_GAIN: f64 = 25.0;
pub const PLAY_ENERGY_COST: f64 = 15.0;
pub const PLAY_EXP_GAIN: f64 = 15.0;
pub const DRINK_HEALTH_GAIN: f64 = 15.0;
pub const DRINK_HUNGER_GAIN: f64 = 10.0;
pub const SLEEP_ENERGY_GAIN: f64 = 40.0;
pub const SLEEP_HEALTH_GAIN: f64 = 10.0;
/// Energy at or above this value makes the pet refuse to sleep.
pub const SLEEP_ENERGY_CEILING: f64 = 90.0;

// Effect timing ------------------------------------------------------------
pub const EFFECT_DURATION_MS: u64 = 2_000;
pub const SLEEP_DURATION_MS: u64 = 3_000;
pub const WAKE_MESSAGE_MS: u64 = 1_500;

// Messages -----------------------------------------------------------------
pub const MSG_FEED: &str = "Munch munch... delicious!";
pub const MSG_PLAY: &str = "Yay! So much fun!";
pub const MSG_DRINK: &str = "Gulp gulp... refreshing!";
pub const MSG_SLEEP: &str = "Zzz...";
pub const MSG_WAKE: &str = "What a good sleep!";
pub const MSG_NOT_SLEEPY: &str = "Not sleepy yet...";

// Display ------------------------------------------------------------------
pub const TIER_GOOD_ABOVE: f64 = 60.0;
pub const TIER_WARNING_ABOVE: f64 = 30.0;
pub const LOW_STAT_THRESHOLD: f64 = 30.0;
pub const JOYFUL_THRESHOLD: f64 = 80.0;
/// Decay ticks per displayed day.
pub const TICKS_PER_DAY: u64 = 6;
