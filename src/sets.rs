use bevy::prelude::*;

/// Top-level system ordering sets for the game loop.
///
/// Configured as a chain: Input → Interaction → Combat → Sync.
/// Input applies requests coming from outside (keys, wheel), Interaction and
/// Combat mutate inventories, Sync re-reads them for display.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Interaction,
    Combat,
    Sync,
}
