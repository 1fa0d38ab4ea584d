//! NPC plugin wiring proximity reactions.
use bevy::prelude::*;

use crate::npc::{events::NpcGreetingEvent, systems::react_to_player_proximity};
use crate::player::systems::move_player;

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<NpcGreetingEvent>()
            .add_systems(Update, react_to_player_proximity.after(move_player));
    }
}
