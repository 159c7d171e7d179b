use bevy::prelude::*;

use super::Player;
use crate::inventory::{Backpack, ContainerManager, HotbarSelector};
use crate::weapon::Gun;

/// Title of the item in the selected hotbar slot.
#[derive(Component, Debug, Default)]
pub struct HeldItem {
    title: Option<String>,
}

impl HeldItem {
    pub fn new(title: Option<String>) -> Self {
        Self { title }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is(&self, title: &str) -> bool {
        self.title() == Some(title)
    }
}

/// Mouse cursor the game should show.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
}

/// Track the selected hotbar stack. Holding the gun's weapon item switches
/// the cursor to a crosshair, except while a container screen is open.
pub fn sync_held_item_system(
    mut player_query: Query<(&HotbarSelector, &Backpack, &Gun, &mut HeldItem), With<Player>>,
    containers: Res<ContainerManager>,
    mut cursor: ResMut<CursorStyle>,
) {
    let Ok((hotbar, backpack, gun, mut held)) = player_query.single_mut() else {
        return;
    };
    let title = hotbar
        .selected_stack(&backpack.main)
        .and_then(|stack| stack.title())
        .map(str::to_string);
    if held.title != title {
        debug!("Now holding {:?}", title);
        held.title = title;
    }

    let style = if held.is(gun.weapon_title()) && !containers.is_open() {
        CursorStyle::Crosshair
    } else {
        CursorStyle::Default
    };
    if *cursor != style {
        *cursor = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{ContainerLayout, ItemStack};
    use crate::test_helpers::fixtures;

    fn spawn(app: &mut App) -> Entity {
        let config = fixtures::test_player_config();
        let reg = fixtures::test_item_registry();
        let mut backpack = Backpack::new(config.inventory_size, config.armor_slots);
        backpack.main.add(ItemStack::new(reg.get("Pistol").unwrap(), 1));
        backpack.main.add(ItemStack::new(reg.get("Medkit").unwrap(), 2));
        app.world_mut()
            .spawn((
                Player,
                backpack,
                HotbarSelector::new(config.hotbar_size),
                Gun::new(&config.gun),
                HeldItem::default(),
            ))
            .id()
    }

    #[test]
    fn holding_weapon_shows_crosshair() {
        let mut app = fixtures::test_app();
        app.init_resource::<CursorStyle>();
        app.add_systems(Update, sync_held_item_system);
        let player = spawn(&mut app);

        app.update();
        assert_eq!(
            app.world().get::<HeldItem>(player).unwrap().title(),
            Some("Pistol")
        );
        assert_eq!(*app.world().resource::<CursorStyle>(), CursorStyle::Crosshair);

        app.world_mut()
            .get_mut::<HotbarSelector>(player)
            .unwrap()
            .select(1);
        app.update();
        assert!(app.world().get::<HeldItem>(player).unwrap().is("Medkit"));
        assert_eq!(*app.world().resource::<CursorStyle>(), CursorStyle::Default);
    }

    #[test]
    fn open_container_restores_default_cursor() {
        let mut app = fixtures::test_app();
        app.init_resource::<CursorStyle>();
        app.add_systems(Update, sync_held_item_system);
        let player = spawn(&mut app);
        let dims = fixtures::test_player_config().container_dims();
        app.world_mut()
            .resource_mut::<ContainerManager>()
            .open_container(ContainerLayout::player(player, dims));

        app.update();
        assert_eq!(*app.world().resource::<CursorStyle>(), CursorStyle::Default);
    }

    #[test]
    fn empty_slot_holds_nothing() {
        let mut app = fixtures::test_app();
        app.init_resource::<CursorStyle>();
        app.add_systems(Update, sync_held_item_system);
        let player = spawn(&mut app);
        app.world_mut()
            .get_mut::<HotbarSelector>(player)
            .unwrap()
            .select(2);

        app.update();
        assert_eq!(app.world().get::<HeldItem>(player).unwrap().title(), None);
    }
}
