//! Systems for the world module.
use bevy::prelude::*;

use crate::animation::components::SPRITE_SIZE;
use crate::world::components::{Position, ViewportBounds};

/// Spawns the 2D camera looking at the viewport center.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Maps a top-left anchored, y-down game position to Bevy's centered,
/// y-up world space. The z layer is supplied by the caller.
pub fn position_to_translation(position: Vec2, viewport: &ViewportBounds, z: f32) -> Vec3 {
    Vec3::new(
        position.x + SPRITE_SIZE * 0.5 - viewport.width * 0.5,
        viewport.height * 0.5 - (position.y + SPRITE_SIZE * 0.5),
        z,
    )
}

/// Writes each entity's game-space position into its render transform,
/// preserving the z layer assigned at spawn time.
pub fn sync_transforms(
    viewport: Res<ViewportBounds>,
    mut query: Query<(&Position, &mut Transform)>,
) {
    for (position, mut transform) in query.iter_mut() {
        let z = transform.translation.z;
        transform.translation = position_to_translation(position.0, &viewport, z);
    }
}
