mod interaction;
mod inventory;
mod item;
mod player;
mod registry;
mod sets;
#[cfg(test)]
mod test_helpers;
mod weapon;

use bevy::prelude::*;

use sets::GameSet;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Lootbound".into(),
                resolution: (1280, 720).into(),
                ..default()
            }),
            ..default()
        }))
        .configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Interaction,
                GameSet::Combat,
                GameSet::Sync,
            )
                .chain(),
        )
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(interaction::InteractionPlugin)
        .add_plugins(weapon::WeaponPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
