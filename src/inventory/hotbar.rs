use bevy::prelude::*;

use super::components::Inventory;
use super::stack::ItemStack;

/// Which of the player's first `slots` inventory slots is in hand.
#[derive(Component, Debug)]
pub struct HotbarSelector {
    slots: usize,
    selected: usize,
}

impl HotbarSelector {
    pub fn new(slots: usize) -> Self {
        Self { slots, selected: 0 }
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.slots {
            self.selected = index;
        }
    }

    /// Move one slot per scroll notch. Scrolling up moves left; both ends wrap.
    pub fn scroll(&mut self, delta: f32) {
        if self.slots == 0 || delta == 0.0 {
            return;
        }
        let step: isize = if delta > 0.0 { -1 } else { 1 };
        let slots = self.slots as isize;
        self.selected = (self.selected as isize + step).rem_euclid(slots) as usize;
    }

    pub fn selected_stack<'a>(&self, inventory: &'a Inventory) -> Option<&'a ItemStack> {
        inventory.get(self.selected)
    }
}
