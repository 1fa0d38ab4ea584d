//! NPC-specific components.
use bevy::prelude::*;

/// Proximity state for an NPC. The flag rises on the frame the player
/// enters the trigger radius and clears once the player leaves, so a
/// greeting fires exactly once per continuous visit.
#[derive(Component, Debug, Default)]
pub struct Npc {
    pub player_nearby: bool,
}
