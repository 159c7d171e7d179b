pub mod fixtures {
    use bevy::ecs::message::{Message, Messages};
    use bevy::prelude::*;

    use crate::interaction::{BulletHit, InteractRequest, LootCollected};
    use crate::inventory::{
        CloseContainer, ContainerClosed, ContainerManager, HotbarInput, InventoryChanged,
        ToggleInventory,
    };
    use crate::item::{ItemDef, ItemRegistry, ItemType};
    use crate::registry::player::{GunDef, PlayerConfig, StackDef};
    use crate::weapon::{FireRequest, ShotFired};

    fn def(title: &str, max_stack: u32, item_type: ItemType) -> ItemDef {
        ItemDef {
            title: title.into(),
            description: String::new(),
            max_stack,
            item_type,
        }
    }

    pub fn test_item_registry() -> ItemRegistry {
        ItemRegistry::from_defs(vec![
            def("Bullet", 64, ItemType::Ammo),
            def("Pistol", 1, ItemType::Weapon),
            def("Medkit", 5, ItemType::Consumable),
            def("Scrap", 64, ItemType::Material),
        ])
        .expect("fixture registry is valid")
    }

    pub fn test_player_config() -> PlayerConfig {
        PlayerConfig {
            inventory_size: 9,
            hotbar_size: 3,
            armor_slots: 2,
            has_hotbar: true,
            gun: GunDef {
                weapon: "Pistol".into(),
                ammo: "Bullet".into(),
                ammo_usage: 1,
            },
            starting_items: vec![
                StackDef {
                    item: "Pistol".into(),
                    count: 1,
                },
                StackDef {
                    item: "Bullet".into(),
                    count: 20,
                },
            ],
        }
    }

    /// Create a minimal Bevy App with game resources and messages for system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(test_item_registry());
        app.insert_resource(test_player_config());
        app.init_resource::<ContainerManager>();
        app.add_message::<InventoryChanged>()
            .add_message::<ToggleInventory>()
            .add_message::<CloseContainer>()
            .add_message::<ContainerClosed>()
            .add_message::<HotbarInput>()
            .add_message::<InteractRequest>()
            .add_message::<BulletHit>()
            .add_message::<LootCollected>()
            .add_message::<FireRequest>()
            .add_message::<ShotFired>();
        app
    }

    /// Take every pending message of type `M` out of the app.
    pub fn drain_messages<M: Message>(app: &mut App) -> Vec<M> {
        app.world_mut()
            .resource_mut::<Messages<M>>()
            .drain()
            .collect()
    }
}
