//! Animation plugin wiring the shared sprite-frame systems.
use bevy::prelude::*;

use crate::animation::systems::animate_characters;
use crate::npc::systems::react_to_player_proximity;
use crate::player::systems::apply_directional_input;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        // Frames advance after the player input and NPC reaction systems
        // have settled this frame's facing and walking state.
        app.add_systems(
            Update,
            animate_characters
                .after(apply_directional_input)
                .after(react_to_player_proximity),
        );
    }
}
