//! Care actions and the transient effects they trigger.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DRINK_HEALTH_GAIN, DRINK_HUNGER_GAIN, EFFECT_DURATION_MS, FEED_EXP_GAIN, FEED_HUNGER_GAIN,
    MSG_DRINK, MSG_FEED, MSG_NOT_SLEEPY, MSG_PLAY, MSG_SLEEP, MSG_WAKE, PLAY_ENERGY_COST,
    PLAY_EXP_GAIN, PLAY_HAPPINESS_GAIN, SLEEP_DURATION_MS, SLEEP_ENERGY_CEILING,
    SLEEP_ENERGY_GAIN, SLEEP_HEALTH_GAIN, WAKE_MESSAGE_MS,
};
use crate::numbers::clamp_stat;
use crate::state::PetState;

/// Animation shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    Idle,
    Eat,
    Play,
    Drink,
    Sleep,
}

impl Animation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Eat => "eat",
            Self::Play => "play",
            Self::Drink => "drink",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four care commands a player can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Feed,
    Play,
    Drink,
    Sleep,
}

impl Action {
    pub const ALL: [Self; 4] = [Self::Feed, Self::Play, Self::Drink, Self::Sleep];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Drink => "drink",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message shown after the main effect has been cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub message: &'static str,
    pub duration_ms: u64,
}

/// Transient feedback for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    /// Animation to play; `None` leaves the current animation alone.
    pub tag: Option<Animation>,
    pub message: &'static str,
    pub duration_ms: u64,
    /// Switches the scene to night until the effect clears.
    pub night: bool,
    pub follow_up: Option<FollowUp>,
}

impl Effect {
    const fn animated(tag: Animation, message: &'static str, duration_ms: u64) -> Self {
        Self {
            tag: Some(tag),
            message,
            duration_ms,
            night: false,
            follow_up: None,
        }
    }
}

/// Result of an action: the new snapshot and what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub state: PetState,
    pub effect: Effect,
    /// False when the pet refused and the state was left untouched.
    pub accepted: bool,
}

impl ActionOutcome {
    fn accepted(state: PetState, effect: Effect) -> Self {
        Self {
            state,
            effect,
            accepted: true,
        }
    }
}

/// Hunger +30, exp +10.
#[must_use]
pub fn feed(state: &PetState, now_ms: i64) -> ActionOutcome {
    let mut next = state.clone();
    next.hunger = clamp_stat(next.hunger + FEED_HUNGER_GAIN);
    next.gain_exp(FEED_EXP_GAIN);
    next.last_update = now_ms;
    next.clamp();
    ActionOutcome::accepted(
        next,
        Effect::animated(Animation::Eat, MSG_FEED, EFFECT_DURATION_MS),
    )
}

/// Happiness +25, energy -15, exp +15.
#[must_use]
pub fn play(state: &PetState, now_ms: i64) -> ActionOutcome {
    let mut next = state.clone();
    next.happiness = clamp_stat(next.happiness + PLAY_HAPPINESS_GAIN);
    next.energy = clamp_stat(next.energy - PLAY_ENERGY_COST);
    next.gain_exp(PLAY_EXP_GAIN);
    next.last_update = now_ms;
    next.clamp();
    ActionOutcome::accepted(
        next,
        Effect::animated(Animation::Play, MSG_PLAY, EFFECT_DURATION_MS),
    )
}

/// Health +15, hunger +10.
#[must_use]
pub fn drink(state: &PetState, now_ms: i64) -> ActionOutcome {
    let mut next = state.clone();
    next.health = clamp_stat(next.health + DRINK_HEALTH_GAIN);
    next.hunger = clamp_stat(next.hunger + DRINK_HUNGER_GAIN);
    next.last_update = now_ms;
    next.clamp();
    ActionOutcome::accepted(
        next,
        Effect::animated(Animation::Drink, MSG_DRINK, EFFECT_DURATION_MS),
    )
}

/// Energy +40, health +10, unless the pet is already rested.
#[must_use]
pub fn sleep(state: &PetState, now_ms: i64) -> ActionOutcome {
    if state.energy >= SLEEP_ENERGY_CEILING {
        return ActionOutcome {
            state: state.clone(),
            effect: Effect {
                tag: None,
                message: MSG_NOT_SLEEPY,
                duration_ms: EFFECT_DURATION_MS,
                night: false,
                follow_up: None,
            },
            accepted: false,
        };
    }

    let mut next = state.clone();
    next.energy = clamp_stat(next.energy + SLEEP_ENERGY_GAIN);
    next.health = clamp_stat(next.health + SLEEP_HEALTH_GAIN);
    next.last_update = now_ms;
    next.clamp();
    ActionOutcome::accepted(
        next,
        Effect {
            tag: Some(Animation::Sleep),
            message: MSG_SLEEP,
            duration_ms: SLEEP_DURATION_MS,
            night: true,
            follow_up: Some(FollowUp {
                message: MSG_WAKE,
                duration_ms: WAKE_MESSAGE_MS,
            }),
        },
    )
}

/// Dispatch an [`Action`] to its handler.
#[must_use]
pub fn apply_action(action: Action, state: &PetState, now_ms: i64) -> ActionOutcome {
    match action {
        Action::Feed => feed(state, now_ms),
        Action::Play => play(state, now_ms),
        Action::Drink => drink(state, now_ms),
        Action::Sleep => sleep(state, now_ms),
    }
}
