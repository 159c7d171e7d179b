use bevy::prelude::*;

use super::stack::{ItemStack, SlotId};

/// Result of [`Inventory::add`].
#[derive(Debug)]
pub enum AddOutcome {
    /// The whole stack found a place.
    Stored,
    /// One slot was filled to its max; the residual did not move further.
    Split(ItemStack),
    /// No slot could take a single item.
    Rejected(ItemStack),
}

/// Fixed-size list of item stacks, one per slot.
#[derive(Clone, Debug)]
pub struct Inventory {
    slots: Vec<ItemStack>,
}

impl Inventory {
    pub fn new(size: usize) -> Self {
        Self {
            slots: (0..size)
                .map(|i| ItemStack::empty(SlotId(i as u32)))
                .collect(),
        }
    }

    /// Number of slots. Never changes after construction.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Place `stack` in the first slot that accepts it.
    ///
    /// Slots are scanned in order. An empty slot takes the stack. A slot with
    /// the same item takes it if it fits; otherwise the slot is topped up to
    /// its max and the rest comes back as [`AddOutcome::Split`] without
    /// visiting further slots. Full slots of the same item are skipped.
    pub fn add(&mut self, mut stack: ItemStack) -> AddOutcome {
        let Some(item) = stack.item().cloned() else {
            return AddOutcome::Stored;
        };
        let max = item.max_stack();

        for slot in &mut self.slots {
            if slot.is_empty() {
                if stack.count() <= max {
                    slot.set_stack(stack);
                    return AddOutcome::Stored;
                }
                let residual = ItemStack::new(item, stack.count() - max);
                stack.set_count(max);
                slot.set_stack(stack);
                return AddOutcome::Split(residual);
            }

            if !slot.same_item(&stack) {
                continue;
            }
            if slot.is_item_addable(stack.count()) {
                slot.increase(stack.count());
                return AddOutcome::Stored;
            }
            if slot.count() < max {
                let overflow = stack.count() - (max - slot.count());
                slot.set_count(max);
                stack.set_count(overflow);
                return AddOutcome::Split(stack);
            }
        }

        AddOutcome::Rejected(stack)
    }

    /// Keep re-adding the residual until it is stored or rejected.
    ///
    /// Returns whatever could not be placed.
    pub fn add_all(&mut self, stack: ItemStack) -> Option<ItemStack> {
        let mut pending = stack;
        loop {
            match self.add(pending) {
                AddOutcome::Stored => return None,
                AddOutcome::Split(residual) => pending = residual,
                AddOutcome::Rejected(rest) => return Some(rest),
            }
        }
    }

    /// Panics if `index` is out of range.
    pub fn stack_at(&self, index: usize) -> &ItemStack {
        &self.slots[index]
    }

    /// Panics if `index` is out of range.
    pub fn stack_at_mut(&mut self, index: usize) -> &mut ItemStack {
        &mut self.slots[index]
    }

    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index)
    }

    /// First slot carrying `id`, in slot order.
    pub fn stack_by_id(&self, id: SlotId) -> Option<&ItemStack> {
        self.slots.iter().find(|s| s.slot_id() == Some(id))
    }

    pub fn stack_by_id_mut(&mut self, id: SlotId) -> Option<&mut ItemStack> {
        self.slots.iter_mut().find(|s| s.slot_id() == Some(id))
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.slots
    }

    /// First non-empty stack holding `title`.
    pub fn find_item(&self, title: &str) -> Option<&ItemStack> {
        self.slots
            .iter()
            .find(|s| !s.is_empty() && s.title() == Some(title))
    }

    /// Total count of `title` over all slots.
    pub fn count_item(&self, title: &str) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.title() == Some(title))
            .map(ItemStack::count)
            .sum()
    }

    pub fn has_items(&self) -> bool {
        self.slots.iter().any(|s| !s.is_empty())
    }

    /// Move every non-empty stack into `target`.
    ///
    /// Items `target` cannot hold stay in their slot here.
    pub fn drain_into(&mut self, target: &mut Inventory) -> LootReport {
        let mut report = LootReport::default();
        for slot in &mut self.slots {
            if slot.is_empty() {
                continue;
            }
            report.found_any = true;
            let taken = slot.take();
            let title = taken.title().unwrap_or_default().to_string();
            let offered = taken.count();
            let leftover = target.add_all(taken);
            let left = leftover.as_ref().map_or(0, ItemStack::count);
            if offered > left {
                report.moved.push((title, offered - left));
            }
            if let Some(rest) = leftover {
                slot.set_stack(rest);
            }
        }
        report
    }
}

/// What a loot transfer moved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LootReport {
    /// The source held at least one item.
    pub found_any: bool,
    /// `(title, count)` per transferred stack, in source slot order.
    pub moved: Vec<(String, u32)>,
}

impl LootReport {
    pub fn summary(&self) -> String {
        if !self.found_any {
            return "The chest is empty.".into();
        }
        if self.moved.is_empty() {
            return "Your inventory is full.".into();
        }
        self.moved
            .iter()
            .map(|(title, count)| format!("{title} x{count}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Player-carried inventories.
#[derive(Component, Debug)]
pub struct Backpack {
    pub main: Inventory,
    pub armor: Inventory,
}

impl Backpack {
    pub fn new(size: usize, armor_slots: usize) -> Self {
        Self {
            main: Inventory::new(size),
            armor: Inventory::new(armor_slots),
        }
    }
}

/// Loot held by a chest or enemy.
#[derive(Component, Debug)]
pub struct Loot(pub Inventory);
