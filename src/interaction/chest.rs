use bevy::prelude::*;

use super::holder::{hand_over_loot, open_loot_container, InteractCtx, InteractOutcome, Interactable};
use super::state::InteractState;

/// Seconds before a looted `LootChest` or `Enemy` can be used again.
pub const LOOT_REARM_SECS: f32 = 1.8;

/// Opens a chest container showing its loot.
#[derive(Component, Debug)]
pub struct Chest {
    state: InteractState,
}

impl Default for Chest {
    fn default() -> Self {
        Self {
            state: InteractState::on_close(),
        }
    }
}

impl Interactable for Chest {
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

/// Hands its loot straight to the player.
#[derive(Component, Debug)]
pub struct LootChest {
    state: InteractState,
}

impl Default for LootChest {
    fn default() -> Self {
        Self {
            state: InteractState::after_secs(LOOT_REARM_SECS),
        }
    }
}

impl Interactable for LootChest {
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
