//! Systems advancing character animations.
use bevy::prelude::*;

use crate::animation::components::CharacterAnimation;
use crate::core::plugin::FrameClock;

/// Ticks every character's animation state and writes the resulting frame
/// into its sprite atlas. Stalled frames advance nothing.
pub fn animate_characters(
    clock: Res<FrameClock>,
    mut query: Query<(&mut CharacterAnimation, &mut Sprite)>,
) {
    let delta = clock.delta();
    if delta.is_zero() {
        return;
    }

    for (mut animation, mut sprite) in query.iter_mut() {
        animation.tick(delta);
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = animation.atlas_index();
        }
    }
}
