use bevy::prelude::*;

use super::chest::LOOT_REARM_SECS;
use super::holder::{hand_over_loot, open_loot_container, InteractCtx, InteractOutcome, Interactable};
use super::state::InteractState;

/// Bullets it takes to bring an enemy down.
pub const ENEMY_HITS: u32 = 8;

/// Remaining hits of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    hits: u32,
    max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { hits: max, max }
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn is_dead(&self) -> bool {
        self.hits == 0
    }

    /// Fraction of health left, `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.hits as f32 / self.max as f32
    }

    /// Returns true on the hit that kills.
    fn hit(&mut self) -> bool {
        if self.hits == 0 {
            return false;
        }
        self.hits -= 1;
        self.hits == 0
    }
}

/// A loot holder that has to be shot down first.
pub trait Damageable: Interactable {
    fn health(&self) -> Health;
    fn health_mut(&mut self) -> &mut Health;

    /// Apply one bullet. Releases the interaction hold on death.
    fn take_hit(&mut self) -> bool {
        let died = self.health_mut().hit();
        if died {
            self.state_mut().set_held(false);
        }
        died
    }
}

/// Drops its loot into the player's inventory once dead.
#[derive(Component, Debug)]
pub struct Enemy {
    state: InteractState,
    health: Health,
}

impl Enemy {
    pub fn new(hits: u32) -> Self {
        Self {
            state: InteractState::after_secs(LOOT_REARM_SECS).held(),
            health: Health::new(hits),
        }
    }
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new(ENEMY_HITS)
    }
}

impl Interactable for Enemy {
    fn state(&self) -> &InteractState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractState {
        &mut self.state
    }

    fn on_interact(&mut self, ctx: &mut InteractCtx) -> InteractOutcome {
        hand_over_loot(ctx)
    }
}

impl Damageable for Enemy {
    fn health(&self) -> Health {
        self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
}

/// Opens a chest container with its loot once dead. Shows a health bar.
#[derive(Component, Debug)]
pub struct EnemyComplex {
    state: InteractState,
    health: Health,
}

impl EnemyComplex {
    pub fn new(hits: u32) -> Self {
        Self {
            state: InteractState::on_close().held(),
            health: Health::new(hits),
        }
    }

    pub fn health_fraction(&self) -> f32 {
        self.health.fraction()
    }
}

impl Default for EnemyComplex {
    fn default() -> Self {
        Self::new(ENEMY_HITS)
    }
}

impl Interactable for EnemyComplex {
    fn state(&self) -> &InteractState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut InteractState {
        &mut self.state
    }

    fn on_interact(&mut self, ctx: &mut InteractCtx) -> InteractOutcome {
        open_loot_container(ctx)
    }
}

impl Damageable for EnemyComplex {
    fn health(&self) -> Health {
        self.health
    }

    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
}
