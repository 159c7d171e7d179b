pub mod gun;

use bevy::prelude::*;

pub use gun::Gun;

use crate::inventory::{Backpack, ContainerManager, InventoryChanged};
use crate::player::{HeldItem, Player};
use crate::registry::AppState;
use crate::sets::GameSet;

/// The trigger was pulled.
#[derive(Message, Debug, Clone, Copy)]
pub struct FireRequest;

/// A shot left the barrel. `remaining` is the ammo left in the tracked stack.
#[derive(Message, Debug, Clone, Copy)]
pub struct ShotFired {
    pub remaining: u32,
}

pub struct WeaponPlugin;

impl Plugin for WeaponPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FireRequest>()
            .add_message::<ShotFired>()
            .add_systems(
                Update,
                (
                    fire_system.in_set(GameSet::Combat),
                    refresh_ammo_system.in_set(GameSet::Sync),
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/// Fire the player's gun. Ignored while a container is open or the weapon
/// is not in hand.
pub fn fire_system(
    mut requests: MessageReader<FireRequest>,
    containers: Res<ContainerManager>,
    mut player_query: Query<(&mut Gun, &mut Backpack, &HeldItem), With<Player>>,
    mut shots: MessageWriter<ShotFired>,
    mut changed: MessageWriter<InventoryChanged>,
) {
    let Ok((mut gun, mut backpack, held)) = player_query.single_mut() else {
        requests.clear();
        return;
    };
    if containers.is_open() || !held.is(gun.weapon_title()) {
        requests.clear();
        return;
    }
    for _ in requests.read() {
        if !gun.fire(&mut backpack.main) {
            debug!("Out of {}", gun.ammo_title());
            continue;
        }
        shots.write(ShotFired {
            remaining: gun.current_ammo(),
        });
        changed.write(InventoryChanged);
    }
}

/// Keep the ammo counter in step with inventory edits.
pub fn refresh_ammo_system(
    mut changed: MessageReader<InventoryChanged>,
    mut player_query: Query<(&mut Gun, &Backpack), With<Player>>,
) {
    if changed.read().count() == 0 {
        return;
    }
    for (mut gun, backpack) in &mut player_query {
        gun.check_ammo(&backpack.main);
    }
}
