use bevy::prelude::*;

use crate::inventory::{Inventory, SlotId};
use crate::registry::player::GunDef;

/// Gun that draws its ammo from the carrier's inventory.
///
/// The ammo stack is tracked by slot id, so moving stacks between slots
/// between two refreshes never decrements the wrong stack.
#[derive(Component, Debug, Clone)]
pub struct Gun {
    weapon_title: String,
    ammo_title: String,
    ammo_usage: u32,
    current_ammo: u32,
    ammo_slot: Option<SlotId>,
}

impl Gun {
    pub fn new(def: &GunDef) -> Self {
        Self {
            weapon_title: def.weapon.clone(),
            ammo_title: def.ammo.clone(),
            ammo_usage: def.ammo_usage,
            current_ammo: 0,
            ammo_slot: None,
        }
    }

    pub fn weapon_title(&self) -> &str {
        &self.weapon_title
    }

    pub fn ammo_title(&self) -> &str {
        &self.ammo_title
    }

    pub fn current_ammo(&self) -> u32 {
        self.current_ammo
    }

    pub fn ammo_slot(&self) -> Option<SlotId> {
        self.ammo_slot
    }

    /// Remember the first non-empty ammo stack and its count.
    pub fn check_ammo(&mut self, inventory: &Inventory) {
        match inventory.find_item(&self.ammo_title) {
            Some(stack) => {
                self.ammo_slot = stack.slot_id();
                self.current_ammo = stack.count();
            }
            None => {
                self.ammo_slot = None;
                self.current_ammo = 0;
            }
        }
    }

    /// Spend one shot of ammo. Returns false when there is not enough.
    pub fn fire(&mut self, inventory: &mut Inventory) -> bool {
        self.check_ammo(inventory);
        if self.current_ammo < self.ammo_usage {
            return false;
        }
        let Some(stack) = self.ammo_slot.and_then(|id| inventory.stack_by_id_mut(id)) else {
            return false;
        };
        stack.decrease(self.ammo_usage);
        self.current_ammo = stack.count();
        if stack.is_empty() {
            self.check_ammo(inventory);
        }
        true
    }
}
