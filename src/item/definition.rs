use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum ItemType {
    Weapon,
    Ammo,
    Armor,
    Consumable,
    #[default]
    Material,
}

fn default_max_stack() -> u32 {
    64
}

/// Static item definition, deserialized from RON.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    #[serde(default)]
    pub item_type: ItemType,
}

/// Shared handle to an immutable item definition.
///
/// Stacks hold clones of the same `Item`; two items are equal when their
/// titles are.
#[derive(Clone)]
pub struct Item(Arc<ItemDef>);

impl Item {
    pub fn new(def: ItemDef) -> Self {
        Self(Arc::new(def))
    }

    pub fn title(&self) -> &str {
        &self.0.title
    }

    pub fn max_stack(&self) -> u32 {
        self.0.max_stack
    }
}

impl Deref for Item {
    type Target = ItemDef;

    fn deref(&self) -> &ItemDef {
        &self.0
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.0.title == other.0.title
    }
}

impl Eq for Item {}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({:?}, max {})", self.0.title, self.0.max_stack)
    }
}

fn default_drop_min() -> u32 {
    1
}
fn default_drop_max() -> u32 {
    1
}
fn default_drop_chance() -> f32 {
    1.0
}

/// One loot table entry: `item` appears with a count in `min..=max`
/// with probability `chance`.
#[derive(Debug, Clone, Deserialize)]
pub struct DropDef {
    pub item: String,
    #[serde(default = "default_drop_min")]
    pub min: u32,
    #[serde(default = "default_drop_max")]
    pub max: u32,
    #[serde(default = "default_drop_chance")]
    pub chance: f32,
}
