//! The `Interactable` capability and the context it runs with.

use bevy::ecs::component::Mutable;
use bevy::prelude::*;

use super::state::InteractState;
use crate::inventory::{ContainerDims, ContainerLayout, ContainerManager, Inventory, LootReport};

/// Everything an interaction may touch.
pub struct InteractCtx<'a> {
    pub target: Entity,
    pub player: Entity,
    pub loot: &'a mut Inventory,
    pub player_inventory: &'a mut Inventory,
    pub containers: &'a mut ContainerManager,
    pub dims: ContainerDims,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractOutcome {
    /// A chest container showing the holder's loot was opened.
    Opened,
    /// Loot was handed straight to the player.
    Looted(LootReport),
    /// Another container is already open.
    Refused,
}

/// A loot holder the player can interact with.
pub trait Interactable: Component<Mutability = Mutable> {
    fn state(&self) -> &InteractState;
    fn state_mut(&mut self) -> &mut InteractState;

    fn on_interact(&mut self, ctx: &mut InteractCtx) -> InteractOutcome;

    /// Run `on_interact` unless the holder is held or waiting to re-arm.
    fn try_interact(&mut self, ctx: &mut InteractCtx) -> Option<InteractOutcome> {
        if !self.state().is_available() {
            return None;
        }
        let outcome = self.on_interact(ctx);
        if outcome != InteractOutcome::Refused {
            self.state_mut().mark_interacted();
        }
        Some(outcome)
    }
}

pub(crate) fn open_loot_container(ctx: &mut InteractCtx) -> InteractOutcome {
    let layout = ContainerLayout::chest(ctx.target, ctx.loot.size(), ctx.player, ctx.dims);
    if ctx.containers.open_container(layout) {
        InteractOutcome::Opened
    } else {
        InteractOutcome::Refused
    }
}

pub(crate) fn hand_over_loot(ctx: &mut InteractCtx) -> InteractOutcome {
    InteractOutcome::Looted(ctx.loot.drain_into(ctx.player_inventory))
}
