use thiserror::Error;

use crate::item::RegistryError;

/// Problems found while turning loaded RON assets into game resources.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("hotbar has {hotbar} slots but the inventory only has {inventory}")]
    HotbarTooLarge { hotbar: usize, inventory: usize },
    #[error("{context} references unknown item {title}")]
    UnknownItem { context: String, title: String },
    #[error("level references unknown loot table {0}")]
    UnknownLootTable(String),
    #[error("drop of {item} in {table}: min {min} is greater than max {max}")]
    InvalidDropRange {
        table: String,
        item: String,
        min: u32,
        max: u32,
    },
}
