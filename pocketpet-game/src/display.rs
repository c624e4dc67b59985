//! Display values derived from a [`PetState`] and the current [`Presentation`].
use serde::{Deserialize, Serialize};

use crate::actions::Animation;
use crate::constants::{
    JOYFUL_THRESHOLD, LOW_STAT_THRESHOLD, TICKS_PER_DAY, TIER_GOOD_ABOVE, TIER_WARNING_ABOVE,
};
use crate::numbers::round_f64_to_i64;
use crate::presentation::Presentation;
use crate::state::PetState;

/// Colour band of a stat meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    Good,
    Warning,
    Critical,
}

impl StatusTier {
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value > TIER_GOOD_ABOVE {
            Self::Good
        } else if value > TIER_WARNING_ABOVE {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// Facial expression of the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Sleeping,
    Eating,
    Playing,
    Drinking,
    Unwell,
    Hungry,
    Sad,
    Sleepy,
    Joyful,
    Content,
}

impl Expression {
    /// Pick the expression; the first matching rule wins.
    #[must_use]
    pub fn select(state: &PetState, animation: Animation) -> Self {
        match animation {
            Animation::Sleep => return Self::Sleeping,
            Animation::Eat => return Self::Eating,
            Animation::Play => return Self::Playing,
            Animation::Drink => return Self::Drinking,
            Animation::Idle => {}
        }
        if state.health < LOW_STAT_THRESHOLD {
            Self::Unwell
        } else if state.hunger < LOW_STAT_THRESHOLD {
            Self::Hungry
        } else if state.happiness < LOW_STAT_THRESHOLD {
            Self::Sad
        } else if state.energy < LOW_STAT_THRESHOLD {
            Self::Sleepy
        } else if state.happiness > JOYFUL_THRESHOLD {
            Self::Joyful
        } else {
            Self::Content
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Sleeping => "😴",
            Self::Eating => "😋",
            Self::Playing => "🤩",
            Self::Drinking | Self::Content => "😊",
            Self::Unwell => "😵",
            Self::Hungry => "😢",
            Self::Sad => "😔",
            Self::Sleepy => "😪",
            Self::Joyful => "😄",
        }
    }
}

/// One labelled meter.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: f64,
    pub percent: i64,
    pub tier: StatusTier,
}

impl StatLine {
    fn new(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value,
            percent: round_f64_to_i64(value),
            tier: StatusTier::from_value(value),
        }
    }
}

/// Everything a renderer needs, joined from simulation and presentation state.
#[derive(Debug, Clone, PartialEq)]
pub struct PetView {
    pub name: String,
    pub level: u32,
    pub day: u64,
    pub exp: i64,
    pub expression: Expression,
    pub daytime: bool,
    pub message: Option<&'static str>,
    pub animation: Animation,
    pub stats: [StatLine; 4],
}

impl PetView {
    #[must_use]
    pub fn compose(state: &PetState, presentation: &Presentation) -> Self {
        let animation = presentation.animation();
        Self {
            name: state.name.clone(),
            level: state.level,
            day: day_count(state.age),
            exp: round_f64_to_i64(state.exp),
            expression: Expression::select(state, animation),
            daytime: presentation.is_daytime(),
            message: presentation.message(),
            animation,
            stats: [
                StatLine::new("hunger", state.hunger),
                StatLine::new("happiness", state.happiness),
                StatLine::new("health", state.health),
                StatLine::new("energy", state.energy),
            ],
        }
    }
}

/// Displayed day number for an age counted in decay ticks.
#[must_use]
pub const fn day_count(age: u64) -> u64 {
    age / TICKS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_use_strict_thresholds() {
        assert_eq!(StatusTier::from_value(100.0), StatusTier::Good);
        assert_eq!(StatusTier::from_value(60.1), StatusTier::Good);
        assert_eq!(StatusTier::from_value(60.0), StatusTier::Warning);
        assert_eq!(StatusTier::from_value(30.1), StatusTier::Warning);
        assert_eq!(StatusTier::from_value(30.0), StatusTier::Critical);
        assert_eq!(StatusTier::from_value(0.0), StatusTier::Critical);
    }

    #[test]
    fn animation_outranks_stats() {
        let pet = PetState {
            health: 5.0,
            ..PetState::default()
        };
        assert_eq!(
            Expression::select(&pet, Animation::Sleep),
            Expression::Sleeping
        );
        assert_eq!(
            Expression::select(&pet, Animation::Drink),
            Expression::Drinking
        );
        assert_eq!(Expression::select(&pet, Animation::Idle), Expression::Unwell);
    }

    #[test]
    fn stat_rules_follow_priority() {
        let base = PetState::default();
        let hungry_and_sad = PetState {
            hunger: 10.0,
            happiness: 10.0,
            ..base.clone()
        };
        assert_eq!(
            Expression::select(&hungry_and_sad, Animation::Idle),
            Expression::Hungry
        );
        let sad = PetState {
            happiness: 10.0,
            energy: 10.0,
            ..base.clone()
        };
        assert_eq!(Expression::select(&sad, Animation::Idle), Expression::Sad);
        let sleepy = PetState {
            energy: 10.0,
            ..base.clone()
        };
        assert_eq!(
            Expression::select(&sleepy, Animation::Idle),
            Expression::Sleepy
        );
        let joyful = PetState {
            happiness: 81.0,
            ..base.clone()
        };
        assert_eq!(
            Expression::select(&joyful, Animation::Idle),
            Expression::Joyful
        );
        assert_eq!(Expression::select(&base, Animation::Idle), Expression::Content);
    }

    #[test]
    fn view_joins_state_and_presentation() {
        let pet = PetState {
            age: 13,
            hunger: 82.5,
            exp: 40.0,
            ..PetState::default()
        };
        let view = PetView::compose(&pet, &Presentation::default());
        assert_eq!(view.day, 2);
        assert_eq!(view.exp, 40);
        assert!(view.daytime);
        assert_eq!(view.stats[0].percent, 83);
        assert_eq!(view.stats[0].tier, StatusTier::Good);
        assert_eq!(view.expression, Expression::Content);
    }
}
