pub mod held_item;

use bevy::prelude::*;

pub use held_item::{CursorStyle, HeldItem};

use crate::inventory::{
    hotbar_input_system, Backpack, ContainerLayout, ContainerManager, HotbarSelector,
    InventoryChanged, ItemStack,
};
use crate::item::ItemRegistry;
use crate::registry::player::PlayerConfig;
use crate::registry::AppState;
use crate::sets::GameSet;
use crate::weapon::Gun;

#[derive(Component)]
pub struct Player;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorStyle>()
            .add_systems(OnEnter(AppState::InGame), spawn_player)
            .add_systems(
                Update,
                held_item::sync_held_item_system
                    .in_set(GameSet::Input)
                    .after(hotbar_input_system)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/// Build the player's backpack with its starting items.
pub fn starting_backpack(config: &PlayerConfig, items: &ItemRegistry) -> Backpack {
    let mut backpack = Backpack::new(config.inventory_size, config.armor_slots);
    for def in &config.starting_items {
        let Some(item) = items.get(&def.item) else {
            warn!("Unknown starting item {}", def.item);
            continue;
        };
        if let Some(rest) = backpack.main.add_all(ItemStack::new(item, def.count)) {
            warn!("No room for {} x{} at spawn", def.item, rest.count());
        }
    }
    backpack
}

fn spawn_player(
    mut commands: Commands,
    config: Res<PlayerConfig>,
    items: Res<ItemRegistry>,
    mut containers: ResMut<ContainerManager>,
    mut changed: MessageWriter<InventoryChanged>,
) {
    let player = commands
        .spawn((
            Name::new("Player"),
            Player,
            starting_backpack(&config, &items),
            HotbarSelector::new(config.hotbar_size),
            Gun::new(&config.gun),
            HeldItem::default(),
        ))
        .id();

    if config.has_hotbar {
        containers.set_hotbar(ContainerLayout::player_hotbar(
            player,
            config.container_dims(),
        ));
    }
    changed.write(InventoryChanged);
    info!(
        "Player spawned with {} slots, hotbar {}",
        config.inventory_size, config.hotbar_size
    );
}
