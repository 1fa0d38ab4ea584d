//! Level lifecycle resources, components, and messages.
use bevy::prelude::*;

/// Points at the active entry in the level catalog.
#[derive(Resource, Debug, Default)]
pub struct CurrentLevel {
    pub index: usize,
    /// Bumped on every accepted load. In-flight asset work carries the
    /// generation it was started under; a mismatch at spawn time means a
    /// newer load superseded it.
    pub generation: u64,
}

/// Marker for entities created by a level load and torn down by the next.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Request to load a level by catalog index.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct LoadLevelRequest {
    pub index: usize,
}

/// Assets in flight for a level load. The player and NPC are constructed
/// only once every image here has finished loading.
#[derive(Resource, Debug)]
pub struct PendingLevelSpawn {
    pub generation: u64,
    pub index: usize,
    pub background: Handle<Image>,
    pub player_sheet: Handle<Image>,
    pub npc_sheet: Handle<Image>,
}
