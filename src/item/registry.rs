use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

use super::definition::{Item, ItemDef};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate item title: {0}")]
    DuplicateTitle(String),
    #[error("item {0} has a max stack of zero")]
    ZeroMaxStack(String),
}

/// Registry of all item definitions. Inserted as a Resource after asset loading.
#[derive(Resource, Debug, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    by_title: HashMap<String, usize>,
}

impl ItemRegistry {
    /// Build registry from a list of ItemDefs, keeping file order.
    pub fn from_defs(defs: Vec<ItemDef>) -> Result<Self, RegistryError> {
        let mut items = Vec::with_capacity(defs.len());
        let mut by_title = HashMap::with_capacity(defs.len());
        for def in defs {
            if def.max_stack == 0 {
                return Err(RegistryError::ZeroMaxStack(def.title));
            }
            if by_title.contains_key(&def.title) {
                return Err(RegistryError::DuplicateTitle(def.title));
            }
            by_title.insert(def.title.clone(), items.len());
            items.push(Item::new(def));
        }
        Ok(Self { items, by_title })
    }

    pub fn get(&self, title: &str) -> Option<Item> {
        self.by_title.get(title).map(|&i| self.items[i].clone())
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;
    use crate::test_helpers::fixtures;

    fn def(title: &str, max_stack: u32) -> ItemDef {
        ItemDef {
            title: title.into(),
            description: String::new(),
            max_stack,
            item_type: ItemType::Material,
        }
    }

    #[test]
    fn registry_lookup_by_title() {
        let reg = fixtures::test_item_registry();

        let bullet = reg.get("Bullet").unwrap();
        assert_eq!(bullet.max_stack(), 64);
        assert_eq!(reg.get("Pistol").unwrap().max_stack(), 1);
        assert!(reg.get("Laser").is_none());
    }

    #[test]
    fn registry_keeps_file_order() {
        let reg = ItemRegistry::from_defs(vec![def("b", 5), def("a", 5)]).unwrap();

        let titles: Vec<_> = reg.iter().map(|i| i.title().to_string()).collect();
        assert_eq!(titles, ["b", "a"]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn registry_rejects_duplicate_titles() {
        let err = ItemRegistry::from_defs(vec![def("Scrap", 64), def("Scrap", 10)]).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateTitle("Scrap".into()));
    }

    #[test]
    fn registry_rejects_zero_max_stack() {
        let err = ItemRegistry::from_defs(vec![def("Dust", 0)]).unwrap_err();
        assert_eq!(err, RegistryError::ZeroMaxStack("Dust".into()));
    }
}
