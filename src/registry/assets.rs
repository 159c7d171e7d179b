use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use super::loader::DataFile;
use crate::item::ItemDef;

/// Asset loaded from items.registry.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct ItemRegistryAsset {
    pub items: Vec<ItemDef>,
}

impl DataFile for ItemRegistryAsset {
    const EXTENSION: &'static str = "registry.ron";
    const LABEL: &'static str = "items.registry.ron";
}
