use crate::item::Item;

/// Stable identifier of an inventory slot, assigned when the inventory is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

/// Contents of one slot: an item and how many of it.
///
/// A stack built with [`ItemStack::new`] is loose (no slot id); stacks living in
/// an inventory keep their slot id for their whole life. Count 0 and a missing
/// item always go together.
#[derive(Clone, Debug, Default)]
pub struct ItemStack {
    slot_id: Option<SlotId>,
    item: Option<Item>,
    count: u32,
}

impl ItemStack {
    /// Empty stack bound to a slot.
    pub fn empty(slot_id: SlotId) -> Self {
        Self {
            slot_id: Some(slot_id),
            item: None,
            count: 0,
        }
    }

    /// Loose stack of `count` items.
    pub fn new(item: Item, count: u32) -> Self {
        let mut stack = Self {
            slot_id: None,
            item: Some(item),
            count: 0,
        };
        stack.set_count(count);
        stack
    }

    pub fn slot_id(&self) -> Option<SlotId> {
        self.slot_id
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.item.as_ref().map(Item::title)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none() || self.count == 0
    }

    /// Both stacks hold an item with the same title. Counts are ignored.
    pub fn same_item(&self, other: &ItemStack) -> bool {
        match (&self.item, &other.item) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Whether `amount` more items fit under the max stack size.
    pub fn is_item_addable(&self, amount: u32) -> bool {
        self.item
            .as_ref()
            .is_some_and(|item| self.count.saturating_add(amount) <= item.max_stack())
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
        if count == 0 {
            self.item = None;
        }
    }

    /// Adds without capping; check [`Self::is_item_addable`] first.
    pub fn increase(&mut self, amount: u32) {
        if self.item.is_some() {
            self.count = self.count.saturating_add(amount);
        }
    }

    pub fn decrease(&mut self, amount: u32) {
        self.set_count(self.count.saturating_sub(amount));
    }

    /// Replace the contents with `other`'s. The slot id stays.
    pub fn set_stack(&mut self, other: ItemStack) {
        self.item = other.item;
        self.count = other.count;
        if self.count == 0 {
            self.item = None;
        }
    }

    /// Move the contents out as a loose stack, leaving this slot empty.
    pub fn take(&mut self) -> ItemStack {
        ItemStack {
            slot_id: None,
            item: self.item.take(),
            count: std::mem::take(&mut self.count),
        }
    }
}
