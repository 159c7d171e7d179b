//! Container layouts: which inventory slots a container screen shows, and where.

use bevy::prelude::*;

use super::components::{Backpack, Inventory, Loot};

/// Which inventory of an entity a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pocket {
    /// `Backpack::main`
    Main,
    /// `Backpack::armor`
    Armor,
    /// `Loot` of a chest or enemy
    Loot,
}

/// Screen region a slot is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Main,
    Player,
    Hotbar,
    Armor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotBinding {
    pub section: Section,
    pub owner: Entity,
    pub pocket: Pocket,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    PlayerHotbar,
    Player,
    Chest { owner: Entity },
}

/// Player inventory shape, taken from `PlayerConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerDims {
    pub inventory_size: usize,
    pub hotbar_size: usize,
    pub armor_slots: usize,
    pub has_hotbar: bool,
}

#[derive(Clone, Debug)]
pub struct ContainerLayout {
    pub kind: ContainerKind,
    pub bindings: Vec<SlotBinding>,
}

impl ContainerLayout {
    /// Always-visible strip of the first `hotbar_size` player slots.
    pub fn player_hotbar(player: Entity, dims: ContainerDims) -> Self {
        let mut layout = Self {
            kind: ContainerKind::PlayerHotbar,
            bindings: Vec::new(),
        };
        layout.bind(Section::Hotbar, player, Pocket::Main, 0..dims.hotbar_size);
        layout
    }

    /// Player screen: bag slots past the hotbar, then hotbar and armor.
    pub fn player(player: Entity, dims: ContainerDims) -> Self {
        let mut layout = Self {
            kind: ContainerKind::Player,
            bindings: Vec::new(),
        };
        layout.bind(
            Section::Main,
            player,
            Pocket::Main,
            dims.hotbar_size..dims.inventory_size,
        );
        if dims.has_hotbar {
            layout.bind(Section::Hotbar, player, Pocket::Main, 0..dims.hotbar_size);
            layout.bind(Section::Armor, player, Pocket::Armor, 0..dims.armor_slots);
        }
        layout
    }

    /// Chest screen: chest slots, then the player's bag and hotbar.
    pub fn chest(owner: Entity, chest_slots: usize, player: Entity, dims: ContainerDims) -> Self {
        let mut layout = Self {
            kind: ContainerKind::Chest { owner },
            bindings: Vec::new(),
        };
        layout.bind(Section::Main, owner, Pocket::Loot, 0..chest_slots);
        layout.bind(
            Section::Player,
            player,
            Pocket::Main,
            dims.hotbar_size..dims.inventory_size,
        );
        if dims.has_hotbar {
            layout.bind(Section::Hotbar, player, Pocket::Main, 0..dims.hotbar_size);
        }
        layout
    }

    fn bind(
        &mut self,
        section: Section,
        owner: Entity,
        pocket: Pocket,
        range: std::ops::Range<usize>,
    ) {
        self.bindings.extend(range.map(|index| SlotBinding {
            section,
            owner,
            pocket,
            index,
        }));
    }

    pub fn section(&self, section: Section) -> impl Iterator<Item = &SlotBinding> {
        self.bindings.iter().filter(move |b| b.section == section)
    }

    /// Chest or enemy entity whose loot this layout shows.
    pub fn loot_owner(&self) -> Option<Entity> {
        match self.kind {
            ContainerKind::Chest { owner } => Some(owner),
            _ => None,
        }
    }
}

/// Rendered state of one bound slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotView {
    pub binding: SlotBinding,
    pub title: Option<String>,
    pub count: u32,
}

impl SlotView {
    fn read(binding: SlotBinding, inventory: Option<&Inventory>) -> Self {
        let stack = inventory.and_then(|inv| inv.get(binding.index));
        Self {
            binding,
            title: stack.and_then(|s| s.title()).map(str::to_string),
            count: stack.map_or(0, |s| s.count()),
        }
    }
}

/// Open containers and their slot views.
///
/// The hotbar container stays up for the whole game and does not count as an
/// open inventory.
#[derive(Resource, Debug, Default)]
pub struct ContainerManager {
    hotbar: Option<ContainerLayout>,
    open: Option<ContainerLayout>,
    hotbar_views: Vec<SlotView>,
    open_views: Vec<SlotView>,
}

impl ContainerManager {
    pub fn set_hotbar(&mut self, layout: ContainerLayout) {
        self.hotbar = Some(layout);
        self.hotbar_views.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open `layout` unless another container is already open.
    pub fn open_container(&mut self, layout: ContainerLayout) -> bool {
        if self.open.is_some() {
            return false;
        }
        self.open = Some(layout);
        self.open_views.clear();
        true
    }

    pub fn close(&mut self) -> Option<ContainerLayout> {
        self.open_views.clear();
        self.open.take()
    }

    pub fn current(&self) -> Option<&ContainerLayout> {
        self.open.as_ref()
    }

    pub fn hotbar(&self) -> Option<&ContainerLayout> {
        self.hotbar.as_ref()
    }

    pub fn open_views(&self) -> &[SlotView] {
        &self.open_views
    }

    pub fn hotbar_views(&self) -> &[SlotView] {
        &self.hotbar_views
    }

    /// Re-read every bound slot through `lookup`.
    pub fn refresh<'a>(&mut self, lookup: impl Fn(Entity, Pocket) -> Option<&'a Inventory>) {
        self.hotbar_views = Self::read_views(self.hotbar.as_ref(), &lookup);
        self.open_views = Self::read_views(self.open.as_ref(), &lookup);
    }

    fn read_views<'a>(
        layout: Option<&ContainerLayout>,
        lookup: &impl Fn(Entity, Pocket) -> Option<&'a Inventory>,
    ) -> Vec<SlotView> {
        layout.map_or_else(Vec::new, |layout| {
            layout
                .bindings
                .iter()
                .map(|b| SlotView::read(*b, lookup(b.owner, b.pocket)))
                .collect()
        })
    }
}

/// Resolve a binding's inventory from the ECS components that own it.
pub fn pocket_inventory<'a>(
    pocket: Pocket,
    backpack: Option<&'a Backpack>,
    loot: Option<&'a Loot>,
) -> Option<&'a Inventory> {
    match pocket {
        Pocket::Main => backpack.map(|b| &b.main),
        Pocket::Armor => backpack.map(|b| &b.armor),
        Pocket::Loot => loot.map(|l| &l.0),
    }
}
