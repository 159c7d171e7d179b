use bevy::prelude::*;
use bevy::reflect::TypePath;
use rand::Rng;
use serde::Deserialize;

use super::error::ConfigError;
use super::loader::DataFile;
use crate::inventory::{Inventory, ItemStack};
use crate::item::{DropDef, ItemRegistry};

fn default_table_size() -> usize {
    6
}

/// Loot rolled into a chest or enemy when it is spawned.
#[derive(Debug, Clone, Deserialize)]
pub struct LootTable {
    pub id: String,
    #[serde(default = "default_table_size")]
    pub size: usize,
    #[serde(default)]
    pub drops: Vec<DropDef>,
}

impl LootTable {
    /// Build a fresh loot inventory of `size` slots from this table.
    pub fn roll(&self, items: &ItemRegistry, rng: &mut impl Rng) -> Inventory {
        let mut inventory = Inventory::new(self.size);
        for drop in &self.drops {
            if drop.chance < 1.0 && rng.r#gen::<f32>() >= drop.chance {
                continue;
            }
            let Some(item) = items.get(&drop.item) else {
                warn!("Loot table {} skips unknown item {}", self.id, drop.item);
                continue;
            };
            let count = if drop.max > drop.min {
                rng.gen_range(drop.min..=drop.max)
            } else {
                drop.min
            };
            if count == 0 {
                continue;
            }
            if let Some(rest) = inventory.add_all(ItemStack::new(item, count)) {
                warn!(
                    "Loot table {} overflowed, dropping {} x{}",
                    self.id,
                    drop.item,
                    rest.count()
                );
            }
        }
        inventory
    }
}

/// All loot tables, loaded from loot.tables.ron.
#[derive(Asset, TypePath, Resource, Debug, Clone, Default, Deserialize)]
pub struct LootTables {
    pub tables: Vec<LootTable>,
}

impl DataFile for LootTables {
    const EXTENSION: &'static str = "tables.ron";
    const LABEL: &'static str = "loot.tables.ron";
}

impl LootTables {
    pub fn get(&self, id: &str) -> Option<&LootTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn validate(&self, items: &ItemRegistry) -> Result<(), ConfigError> {
        for table in &self.tables {
            for drop in &table.drops {
                if !items.contains(&drop.item) {
                    return Err(ConfigError::UnknownItem {
                        context: format!("loot table {}", table.id),
                        title: drop.item.clone(),
                    });
                }
                if drop.min > drop.max {
                    return Err(ConfigError::InvalidDropRange {
                        table: table.id.clone(),
                        item: drop.item.clone(),
                        min: drop.min,
                        max: drop.max,
                    });
                }
            }
        }
        Ok(())
    }
}
