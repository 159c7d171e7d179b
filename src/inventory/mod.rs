pub mod components;
pub mod container;
pub mod hotbar;
pub mod plugin;
pub mod stack;
pub mod systems;

pub use components::*;
pub use container::*;
pub use hotbar::*;
pub use plugin::InventoryPlugin;
pub use stack::*;
pub use systems::*;
