pub mod chest;
pub mod enemy;
pub mod holder;
pub mod state;
pub mod systems;

use bevy::prelude::*;

pub use chest::{Chest, LootChest};
pub use enemy::{Damageable, Enemy, EnemyComplex, Health};
pub use holder::{InteractCtx, InteractOutcome, Interactable};
pub use state::InteractState;
pub use systems::{BulletHit, InteractRequest, LootCollected};

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<InteractRequest>()
            .add_message::<BulletHit>()
            .add_message::<LootCollected>()
            .add_systems(OnEnter(AppState::InGame), systems::spawn_level_holders)
            .add_systems(
                Update,
                (
                    systems::interact_system::<Chest>,
                    systems::interact_system::<LootChest>,
                    systems::interact_system::<Enemy>,
                    systems::interact_system::<EnemyComplex>,
                    systems::rearm_on_close_system::<Chest>,
                    systems::rearm_on_close_system::<EnemyComplex>,
                    systems::tick_rearm_system::<LootChest>,
                    systems::tick_rearm_system::<Enemy>,
                )
                    .in_set(GameSet::Interaction)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (
                    systems::bullet_hit_system::<Enemy>,
                    systems::bullet_hit_system::<EnemyComplex>,
                )
                    .in_set(GameSet::Combat)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
