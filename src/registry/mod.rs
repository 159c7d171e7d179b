pub mod assets;
pub mod error;
pub mod level;
pub mod loader;
pub mod loot;
pub mod player;

use bevy::asset::LoadState;
use bevy::prelude::*;

use assets::ItemRegistryAsset;
use error::ConfigError;
use level::LevelDef;
use loader::{DataFile, RonLoader};
use loot::LootTables;
use player::PlayerConfig;

use crate::item::ItemRegistry;

/// Application state: Loading waits for assets, InGame runs gameplay.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Handles for assets being loaded.
#[derive(Resource)]
struct LoadingAssets {
    items: Handle<ItemRegistryAsset>,
    player: Handle<PlayerConfig>,
    loot: Handle<LootTables>,
    level: Handle<LevelDef>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<ItemRegistryAsset>()
            .init_asset::<PlayerConfig>()
            .init_asset::<LootTables>()
            .init_asset::<LevelDef>()
            .register_asset_loader(RonLoader::<ItemRegistryAsset>::default())
            .register_asset_loader(RonLoader::<PlayerConfig>::default())
            .register_asset_loader(RonLoader::<LootTables>::default())
            .register_asset_loader(RonLoader::<LevelDef>::default())
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)));
    }
}

fn load_data<T: DataFile>(asset_server: &AssetServer) -> Handle<T> {
    asset_server.load(format!("data/{}", T::LABEL))
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(LoadingAssets {
        items: load_data(&asset_server),
        player: load_data(&asset_server),
        loot: load_data(&asset_server),
        level: load_data(&asset_server),
    });
}

/// Game resources built from the loaded assets.
pub struct GameData {
    pub items: ItemRegistry,
    pub player: PlayerConfig,
    pub loot: LootTables,
    pub level: LevelDef,
}

impl GameData {
    /// Cross-check the assets against each other.
    pub fn build(
        items: &ItemRegistryAsset,
        player: &PlayerConfig,
        loot: &LootTables,
        level: &LevelDef,
    ) -> Result<Self, ConfigError> {
        let items = ItemRegistry::from_defs(items.items.clone())?;
        player.validate(&items)?;
        loot.validate(&items)?;
        level.validate(loot)?;
        Ok(Self {
            items,
            player: player.clone(),
            loot: loot.clone(),
            level: level.clone(),
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn check_loading(
    mut commands: Commands,
    loading: Option<Res<LoadingAssets>>,
    asset_server: Res<AssetServer>,
    item_assets: Res<Assets<ItemRegistryAsset>>,
    player_assets: Res<Assets<PlayerConfig>>,
    loot_assets: Res<Assets<LootTables>>,
    level_assets: Res<Assets<LevelDef>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(loading) = loading else {
        return;
    };

    let ids = [
        loading.items.id().untyped(),
        loading.player.id().untyped(),
        loading.loot.id().untyped(),
        loading.level.id().untyped(),
    ];
    if ids
        .iter()
        .any(|id| matches!(asset_server.load_state(*id), LoadState::Failed(_)))
    {
        error!("Failed to load game data, check the files under assets/data");
        commands.remove_resource::<LoadingAssets>();
        return;
    }

    let (Some(items), Some(player), Some(loot), Some(level)) = (
        item_assets.get(&loading.items),
        player_assets.get(&loading.player),
        loot_assets.get(&loading.loot),
        level_assets.get(&loading.level),
    ) else {
        return; // not loaded yet
    };

    let data = match GameData::build(items, player, loot, level) {
        Ok(data) => data,
        Err(err) => {
            error!("Invalid game data: {err}");
            commands.remove_resource::<LoadingAssets>();
            return;
        }
    };

    info!(
        "Loaded {} items, {} loot tables, {} spawns",
        data.items.len(),
        data.loot.tables.len(),
        data.level.spawns.len()
    );
    commands.insert_resource(data.items);
    commands.insert_resource(data.player);
    commands.insert_resource(data.loot);
    commands.insert_resource(data.level);
    commands.remove_resource::<LoadingAssets>();
    next_state.set(AppState::InGame);
}
