//! WorldPlugin coordinates the viewport, camera, and transform sync.
use bevy::prelude::*;

use crate::player::systems::move_player;
use crate::world::{
    components::ViewportBounds,
    systems::{spawn_camera, sync_transforms},
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportBounds>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, sync_transforms.after(move_player));
    }
}
