use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use super::error::ConfigError;
use super::loader::DataFile;
use super::loot::LootTables;

/// Behaviour of a loot holder placed in the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HolderKind {
    /// Opens a chest container.
    Chest,
    /// Hands its loot straight to the player.
    LootChest,
    /// Must be shot down, then hands its loot over.
    Enemy,
    /// Must be shot down, then opens a chest container.
    EnemyComplex,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpawnDef {
    pub kind: HolderKind,
    pub loot: String,
}

/// Loot holders of the level, loaded from dungeon.level.ron.
#[derive(Asset, TypePath, Resource, Debug, Clone, Default, Deserialize)]
pub struct LevelDef {
    pub spawns: Vec<SpawnDef>,
}

impl DataFile for LevelDef {
    const EXTENSION: &'static str = "level.ron";
    const LABEL: &'static str = "dungeon.level.ron";
}

impl LevelDef {
    pub fn validate(&self, loot: &LootTables) -> Result<(), ConfigError> {
        match self.spawns.iter().find(|s| loot.get(&s.loot).is_none()) {
            Some(missing) => Err(ConfigError::UnknownLootTable(missing.loot.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::loot::LootTable;

    #[test]
    fn level_parses_and_validates() {
        let level: LevelDef = ron::de::from_str(
            r#"(spawns: [(kind: Chest, loot: "chest"), (kind: Enemy, loot: "grunt")])"#,
        )
        .unwrap();
        assert_eq!(level.spawns[1].kind, HolderKind::Enemy);

        let mut tables = LootTables {
            tables: vec![LootTable {
                id: "chest".into(),
                size: 6,
                drops: vec![],
            }],
        };
        assert_eq!(
            level.validate(&tables),
            Err(ConfigError::UnknownLootTable("grunt".into()))
        );

        tables.tables.push(LootTable {
            id: "grunt".into(),
            size: 6,
            drops: vec![],
        });
        assert_eq!(level.validate(&tables), Ok(()));
    }
}
