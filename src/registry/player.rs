use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use super::error::ConfigError;
use super::loader::DataFile;
use crate::inventory::ContainerDims;
use crate::item::ItemRegistry;

fn default_count() -> u32 {
    1
}

fn default_armor_slots() -> usize {
    2
}

fn default_has_hotbar() -> bool {
    true
}

fn default_ammo_usage() -> u32 {
    1
}

/// A stack given to the player at spawn.
#[derive(Debug, Clone, Deserialize)]
pub struct StackDef {
    pub item: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

/// Gun carried by the player.
#[derive(Debug, Clone, Deserialize)]
pub struct GunDef {
    /// Item that must be selected in the hotbar to aim and fire.
    pub weapon: String,
    pub ammo: String,
    #[serde(default = "default_ammo_usage")]
    pub ammo_usage: u32,
}

/// Player parameters loaded from player.def.ron.
#[derive(Asset, TypePath, Resource, Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub inventory_size: usize,
    pub hotbar_size: usize,
    #[serde(default = "default_armor_slots")]
    pub armor_slots: usize,
    #[serde(default = "default_has_hotbar")]
    pub has_hotbar: bool,
    pub gun: GunDef,
    #[serde(default)]
    pub starting_items: Vec<StackDef>,
}

impl DataFile for PlayerConfig {
    const EXTENSION: &'static str = "def.ron";
    const LABEL: &'static str = "player.def.ron";
}

impl PlayerConfig {
    pub fn container_dims(&self) -> ContainerDims {
        ContainerDims {
            inventory_size: self.inventory_size,
            hotbar_size: self.hotbar_size,
            armor_slots: self.armor_slots,
            has_hotbar: self.has_hotbar,
        }
    }

    pub fn validate(&self, items: &ItemRegistry) -> Result<(), ConfigError> {
        if self.hotbar_size > self.inventory_size {
            return Err(ConfigError::HotbarTooLarge {
                hotbar: self.hotbar_size,
                inventory: self.inventory_size,
            });
        }
        let referenced = [&self.gun.weapon, &self.gun.ammo]
            .into_iter()
            .chain(self.starting_items.iter().map(|s| &s.item));
        for title in referenced {
            if !items.contains(title) {
                return Err(ConfigError::UnknownItem {
                    context: "player.def.ron".into(),
                    title: title.clone(),
                });
            }
        }
        Ok(())
    }
}
