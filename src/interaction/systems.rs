use bevy::prelude::*;

use super::chest::{Chest, LootChest};
use super::enemy::{Damageable, Enemy, EnemyComplex};
use super::holder::{InteractCtx, InteractOutcome, Interactable};
use crate::inventory::{Backpack, ContainerClosed, ContainerManager, InventoryChanged, Loot, LootReport};
use crate::item::ItemRegistry;
use crate::player::Player;
use crate::registry::level::{HolderKind, LevelDef};
use crate::registry::loot::LootTables;
use crate::registry::player::PlayerConfig;

/// The player tries to use a chest or enemy.
#[derive(Message, Debug, Clone, Copy)]
pub struct InteractRequest {
    pub target: Entity,
}

/// A bullet struck `target`.
#[derive(Message, Debug, Clone, Copy)]
pub struct BulletHit {
    pub target: Entity,
}

/// Loot was handed straight to the player.
#[derive(Message, Debug, Clone)]
pub struct LootCollected {
    pub holder: Entity,
    pub report: LootReport,
}

pub fn interact_system<T: Interactable>(
    mut requests: MessageReader<InteractRequest>,
    mut holders: Query<(&mut T, &mut Loot)>,
    mut player_query: Query<(Entity, &mut Backpack), With<Player>>,
    config: Res<PlayerConfig>,
    mut containers: ResMut<ContainerManager>,
    mut collected: MessageWriter<LootCollected>,
    mut changed: MessageWriter<InventoryChanged>,
) {
    let Ok((player, mut backpack)) = player_query.single_mut() else {
        requests.clear();
        return;
    };
    for request in requests.read() {
        let Ok((mut holder, mut loot)) = holders.get_mut(request.target) else {
            continue;
        };
        let mut ctx = InteractCtx {
            target: request.target,
            player,
            loot: &mut loot.0,
            player_inventory: &mut backpack.main,
            containers: &mut containers,
            dims: config.container_dims(),
        };
        let Some(outcome) = holder.try_interact(&mut ctx) else {
            debug!("{} is not interactable right now", request.target);
            continue;
        };
        match outcome {
            InteractOutcome::Opened => {
                changed.write(InventoryChanged);
            }
            InteractOutcome::Looted(report) => {
                info!("{}", report.summary());
                collected.write(LootCollected {
                    holder: request.target,
                    report,
                });
                changed.write(InventoryChanged);
            }
            InteractOutcome::Refused => {
                debug!("Another container is open, ignoring {}", request.target);
            }
        }
    }
}

/// Re-arm holders whose container was just closed.
pub fn rearm_on_close_system<T: Interactable>(
    mut closed: MessageReader<ContainerClosed>,
    mut holders: Query<&mut T>,
) {
    for owner in closed.read().filter_map(|m| m.owner) {
        let Ok(mut holder) = holders.get_mut(owner) else {
            continue;
        };
        if holder.state_mut().container_closed() {
            debug!("{owner} re-armed");
        }
    }
}

pub fn tick_rearm_system<T: Interactable>(time: Res<Time>, mut holders: Query<&mut T>) {
    for mut holder in &mut holders {
        if holder.state().is_interacted() {
            holder.state_mut().tick(time.delta());
        }
    }
}

pub fn bullet_hit_system<T: Damageable>(
    mut hits: MessageReader<BulletHit>,
    mut targets: Query<&mut T>,
) {
    for hit in hits.read() {
        let Ok(mut target) = targets.get_mut(hit.target) else {
            continue;
        };
        if target.take_hit() {
            info!("{} went down", hit.target);
        }
    }
}

/// Spawn the level's chests and enemies with freshly rolled loot.
pub fn spawn_level_holders(
    mut commands: Commands,
    level: Res<LevelDef>,
    tables: Res<LootTables>,
    items: Res<ItemRegistry>,
) {
    let mut rng = rand::thread_rng();
    for spawn in &level.spawns {
        let Some(table) = tables.get(&spawn.loot) else {
            warn!("Skipping {:?}: no loot table {}", spawn.kind, spawn.loot);
            continue;
        };
        let loot = Loot(table.roll(&items, &mut rng));
        let name = Name::new(format!("{:?} ({})", spawn.kind, spawn.loot));
        match spawn.kind {
            HolderKind::Chest => commands.spawn((name, loot, Chest::default())),
            HolderKind::LootChest => commands.spawn((name, loot, LootChest::default())),
            HolderKind::Enemy => commands.spawn((name, loot, Enemy::default())),
            HolderKind::EnemyComplex => commands.spawn((name, loot, EnemyComplex::default())),
        };
    }
    info!("Spawned {} loot holders", level.spawns.len());
}
