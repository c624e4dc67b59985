//! Pocketpet State Engine
//!
//! Platform-agnostic core logic for the Pocketpet virtual pet.
//! This crate provides the pet's stats, decay rules, care actions and
//! persistence contract without UI or platform-specific dependencies.

pub mod actions;
pub mod clock;
pub mod config;
pub mod constants;
pub mod decay;
pub mod display;
pub mod engine;
pub mod numbers;
pub mod presentation;
#[cfg(feature = "async")]
pub mod scheduler;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use actions::{
    Action, ActionOutcome, Animation, Effect, FollowUp, apply_action, drink, feed, play, sleep,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, EngineConfig};
pub use decay::{CatchUp, catch_up, decay_tick};
pub use display::{Expression, PetView, StatLine, StatusTier, day_count};
pub use engine::{PetEngine, StartReport};
pub use presentation::Presentation;
#[cfg(feature = "async")]
pub use scheduler::{DecayLoop, SharedEngine, share};
pub use state::PetState;
pub use storage::{
    MemoryStorage, PetStorage, StorageError, decode_record, encode_record, load_pet, save_pet,
};
