use bevy::prelude::*;

use super::container::ContainerManager;
use super::systems::*;
use crate::registry::AppState;
use crate::sets::GameSet;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContainerManager>()
            .add_message::<InventoryChanged>()
            .add_message::<ToggleInventory>()
            .add_message::<CloseContainer>()
            .add_message::<ContainerClosed>()
            .add_message::<HotbarInput>()
            .add_systems(
                Update,
                (
                    (toggle_inventory_system, close_container_system, hotbar_input_system)
                        .in_set(GameSet::Input),
                    refresh_container_views.in_set(GameSet::Sync),
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
