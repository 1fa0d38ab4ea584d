//! Player plugin wiring input and movement systems.
use bevy::prelude::*;

use crate::core::plugin::update_frame_clock;
use crate::player::systems::{apply_directional_input, move_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_directional_input,
                move_player
                    .after(apply_directional_input)
                    .after(update_frame_clock),
            ),
        );
    }
}
