//! Ephemeral presentation state: animation, speech bubble and day/night.
//!
//! None of this is persisted. Shells feed it the [`Effect`] returned by an
//! action and call [`Presentation::advance`] whenever a deadline reported by
//! [`Presentation::next_deadline`] passes.
use crate::actions::{Animation, Effect, FollowUp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    animation: Animation,
    message: Option<&'static str>,
    daytime: bool,
    animation_until: Option<i64>,
    message_until: Option<i64>,
    night_until: Option<i64>,
    follow_up: Option<(FollowUp, i64)>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            animation: Animation::Idle,
            message: None,
            daytime: true,
            animation_until: None,
            message_until: None,
            night_until: None,
            follow_up: None,
        }
    }
}

impl Presentation {
    #[must_use]
    pub const fn animation(&self) -> Animation {
        self.animation
    }

    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }

    #[must_use]
    pub const fn is_daytime(&self) -> bool {
        self.daytime
    }

    /// Show an effect starting at `now_ms`. The newest effect wins: its
    /// message replaces the current one and any pending follow-up is dropped.
    pub fn apply(&mut self, effect: &Effect, now_ms: i64) {
        let until = now_ms.saturating_add_unsigned(effect.duration_ms);
        if let Some(tag) = effect.tag {
            self.animation = tag;
            self.animation_until = Some(until);
        }
        if effect.night {
            self.daytime = false;
            self.night_until = Some(until);
        }
        self.message = Some(effect.message);
        self.message_until = Some(until);
        self.follow_up = effect.follow_up.map(|f| (f, until));
    }

    /// Clear everything whose display time has passed.
    pub fn advance(&mut self, now_ms: i64) {
        if self.animation_until.is_some_and(|t| t <= now_ms) {
            self.animation = Animation::Idle;
            self.animation_until = None;
        }
        if self.night_until.is_some_and(|t| t <= now_ms) {
            self.daytime = true;
            self.night_until = None;
        }
        if self.message_until.is_some_and(|t| t <= now_ms) {
            self.message = None;
            self.message_until = None;
        }
        if let Some((follow, at)) = self.follow_up
            && at <= now_ms
        {
            self.follow_up = None;
            let until = at.saturating_add_unsigned(follow.duration_ms);
            if until > now_ms {
                self.message = Some(follow.message);
                self.message_until = Some(until);
            }
        }
    }

    /// Earliest instant at which [`advance`](Self::advance) will change something.
    #[must_use]
    pub fn next_deadline(&self) -> Option<i64> {
        [
            self.animation_until,
            self.message_until,
            self.night_until,
            self.follow_up.map(|(_, at)| at),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// True while no effect is on screen or pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.next_deadline().is_none()
    }
}
