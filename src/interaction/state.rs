use std::time::Duration;

use bevy::prelude::*;

/// How an interacted holder becomes usable again.
#[derive(Debug, Clone)]
pub enum Rearm {
    /// When the container it opened is closed.
    OnClose,
    /// After the timer runs out.
    After(Timer),
}

/// Interaction gate shared by every loot holder.
///
/// `interacted` is set after a successful interaction and cleared by the
/// re-arm rule. `held` blocks interaction independently, e.g. while an enemy
/// is still alive.
#[derive(Debug, Clone)]
pub struct InteractState {
    interacted: bool,
    held: bool,
    rearm: Rearm,
}

impl InteractState {
    pub fn on_close() -> Self {
        Self {
            interacted: false,
            held: false,
            rearm: Rearm::OnClose,
        }
    }

    pub fn after_secs(secs: f32) -> Self {
        Self {
            interacted: false,
            held: false,
            rearm: Rearm::After(Timer::from_seconds(secs, TimerMode::Once)),
        }
    }

    pub fn held(mut self) -> Self {
        self.held = true;
        self
    }

    pub fn is_available(&self) -> bool {
        !self.interacted && !self.held
    }

    pub fn is_interacted(&self) -> bool {
        self.interacted
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn set_held(&mut self, held: bool) {
        self.held = held;
    }

    pub fn mark_interacted(&mut self) {
        self.interacted = true;
        if let Rearm::After(timer) = &mut self.rearm {
            timer.reset();
        }
    }

    pub fn rearms_on_close(&self) -> bool {
        matches!(self.rearm, Rearm::OnClose)
    }

    /// Clear `interacted` if it was waiting for its container to close.
    pub fn container_closed(&mut self) -> bool {
        if self.interacted && self.rearms_on_close() {
            self.interacted = false;
            return true;
        }
        false
    }

    /// Advance a timed re-arm. Returns true on the tick that re-arms.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Rearm::After(timer) = &mut self.rearm else {
            return false;
        };
        if !self.interacted {
            return false;
        }
        if timer.tick(delta).just_finished() {
            self.interacted = false;
            return true;
        }
        false
    }
}
