use bevy::prelude::*;

use super::components::{Backpack, Loot};
use super::container::{pocket_inventory, ContainerKind, ContainerLayout, ContainerManager};
use super::hotbar::HotbarSelector;
use crate::player::Player;
use crate::registry::player::PlayerConfig;

/// Some inventory changed; container views must be re-read.
#[derive(Message, Debug, Default)]
pub struct InventoryChanged;

/// Request to show or hide the player's own inventory screen.
#[derive(Message, Debug)]
pub struct ToggleInventory;

/// Request to close whatever container is open.
#[derive(Message, Debug)]
pub struct CloseContainer;

/// A container was closed. `owner` is the chest or enemy it showed, if any.
#[derive(Message, Debug)]
pub struct ContainerClosed {
    pub owner: Option<Entity>,
}

/// Hotbar selection input, produced by whatever polls the keyboard and wheel.
#[derive(Message, Debug, Clone, Copy)]
pub enum HotbarInput {
    Select(usize),
    Scroll(f32),
}

/// Open the player container when nothing else is open, close it when it is
/// the one showing. Chest containers are left alone.
pub fn toggle_inventory_system(
    mut requests: MessageReader<ToggleInventory>,
    config: Res<PlayerConfig>,
    player_query: Query<Entity, With<Player>>,
    mut manager: ResMut<ContainerManager>,
    mut closed: MessageWriter<ContainerClosed>,
    mut changed: MessageWriter<InventoryChanged>,
) {
    let Ok(player) = player_query.single() else {
        requests.clear();
        return;
    };
    for _ in requests.read() {
        match manager.current().map(|layout| layout.kind) {
            Some(ContainerKind::Player) => {
                manager.close();
                debug!("Closed player inventory");
                closed.write(ContainerClosed { owner: None });
                changed.write(InventoryChanged);
            }
            Some(_) => {}
            None => {
                manager.open_container(ContainerLayout::player(player, config.container_dims()));
                debug!("Opened player inventory");
                changed.write(InventoryChanged);
            }
        }
    }
}

pub fn close_container_system(
    mut requests: MessageReader<CloseContainer>,
    mut manager: ResMut<ContainerManager>,
    mut closed: MessageWriter<ContainerClosed>,
    mut changed: MessageWriter<InventoryChanged>,
) {
    if requests.read().count() == 0 {
        return;
    }
    if let Some(layout) = manager.close() {
        debug!("Closed {:?} container", layout.kind);
        closed.write(ContainerClosed {
            owner: layout.loot_owner(),
        });
        changed.write(InventoryChanged);
    }
}

/// Apply hotbar input unless a container screen is open.
pub fn hotbar_input_system(
    mut inputs: MessageReader<HotbarInput>,
    manager: Res<ContainerManager>,
    mut hotbar_query: Query<&mut HotbarSelector, With<Player>>,
) {
    if manager.is_open() {
        inputs.clear();
        return;
    }
    let Ok(mut hotbar) = hotbar_query.single_mut() else {
        return;
    };
    for input in inputs.read() {
        match *input {
            HotbarInput::Select(index) => hotbar.select(index),
            HotbarInput::Scroll(delta) => hotbar.scroll(delta),
        }
    }
}

/// Rebuild slot views after any inventory change.
pub fn refresh_container_views(
    mut changed: MessageReader<InventoryChanged>,
    backpacks: Query<&Backpack>,
    loots: Query<&Loot>,
    mut manager: ResMut<ContainerManager>,
) {
    if changed.read().count() == 0 {
        return;
    }
    let (backpacks, loots) = (&backpacks, &loots);
    manager.refresh(move |owner, pocket| {
        pocket_inventory(pocket, backpacks.get(owner).ok(), loots.get(owner).ok())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{ContainerKind, Inventory, ItemStack};
    use crate::test_helpers::fixtures;
    use bevy::ecs::message::Messages;

    fn spawn_player(app: &mut App) -> Entity {
        let config = fixtures::test_player_config();
        app.world_mut()
            .spawn((
                Player,
                Backpack::new(config.inventory_size, config.armor_slots),
                HotbarSelector::new(config.hotbar_size),
            ))
            .id()
    }

    #[test]
    fn toggle_opens_player_container_once() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, toggle_inventory_system);
        spawn_player(&mut app);

        app.world_mut()
            .resource_mut::<Messages<ToggleInventory>>()
            .write(ToggleInventory);
        app.update();

        let manager = app.world().resource::<ContainerManager>();
        assert!(manager.is_open());
        assert_eq!(manager.current().unwrap().kind, ContainerKind::Player);
    }

    #[test]
    fn toggle_twice_closes_player_container() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, toggle_inventory_system);
        spawn_player(&mut app);

        for _ in 0..2 {
            app.world_mut()
                .resource_mut::<Messages<ToggleInventory>>()
                .write(ToggleInventory);
            app.update();
        }

        assert!(!app.world().resource::<ContainerManager>().is_open());
        let owners: Vec<_> = fixtures::drain_messages::<ContainerClosed>(&mut app)
            .into_iter()
            .map(|m| m.owner)
            .collect();
        assert_eq!(owners, [None]);
    }

    #[test]
    fn toggle_leaves_open_chest_alone() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, toggle_inventory_system);
        let player = spawn_player(&mut app);
        let chest = app.world_mut().spawn(Loot(Inventory::new(6))).id();
        let dims = fixtures::test_player_config().container_dims();
        app.world_mut()
            .resource_mut::<ContainerManager>()
            .open_container(ContainerLayout::chest(chest, 6, player, dims));

        app.world_mut()
            .resource_mut::<Messages<ToggleInventory>>()
            .write(ToggleInventory);
        app.update();

        let manager = app.world().resource::<ContainerManager>();
        assert_eq!(
            manager.current().unwrap().kind,
            ContainerKind::Chest { owner: chest }
        );
    }

    #[test]
    fn close_reports_loot_owner() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, close_container_system);
        let player = spawn_player(&mut app);
        let chest = app.world_mut().spawn(Loot(Inventory::new(6))).id();
        let dims = fixtures::test_player_config().container_dims();
        app.world_mut()
            .resource_mut::<ContainerManager>()
            .open_container(ContainerLayout::chest(chest, 6, player, dims));

        app.world_mut()
            .resource_mut::<Messages<CloseContainer>>()
            .write(CloseContainer);
        app.update();

        assert!(!app.world().resource::<ContainerManager>().is_open());
        let owners: Vec<_> = fixtures::drain_messages::<ContainerClosed>(&mut app)
            .into_iter()
            .map(|m| m.owner)
            .collect();
        assert_eq!(owners, [Some(chest)]);
    }

    #[test]
    fn hotbar_input_ignored_while_container_open() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, hotbar_input_system);
        let player = spawn_player(&mut app);

        app.world_mut()
            .resource_mut::<Messages<HotbarInput>>()
            .write(HotbarInput::Select(2));
        app.update();
        assert_eq!(
            app.world().get::<HotbarSelector>(player).unwrap().selected(),
            2
        );

        let dims = fixtures::test_player_config().container_dims();
        app.world_mut()
            .resource_mut::<ContainerManager>()
            .open_container(ContainerLayout::player(player, dims));
        app.world_mut()
            .resource_mut::<Messages<HotbarInput>>()
            .write(HotbarInput::Scroll(-1.0));
        app.update();
        assert_eq!(
            app.world().get::<HotbarSelector>(player).unwrap().selected(),
            2
        );
    }

    #[test]
    fn refresh_updates_views_after_change() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, refresh_container_views);
        let player = spawn_player(&mut app);
        let dims = fixtures::test_player_config().container_dims();
        app.world_mut()
            .resource_mut::<ContainerManager>()
            .set_hotbar(ContainerLayout::player_hotbar(player, dims));

        let bullet = fixtures::test_item_registry().get("Bullet").unwrap();
        app.world_mut()
            .get_mut::<Backpack>(player)
            .unwrap()
            .main
            .add(ItemStack::new(bullet, 30));
        app.world_mut()
            .resource_mut::<Messages<InventoryChanged>>()
            .write(InventoryChanged);
        app.update();

        let views = app.world().resource::<ContainerManager>().hotbar_views();
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].title.as_deref(), Some("Bullet"));
        assert_eq!(views[0].count, 30);
        assert_eq!(views[1].count, 0);
    }
}
