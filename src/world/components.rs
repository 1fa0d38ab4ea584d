//! Components and resources for the 2D game space.
//!
//! Game logic runs in screen coordinates: origin at the top-left corner of
//! the viewport, y growing downward, positions anchored at the top-left of
//! a sprite's bounding box. A sync system maps these into Bevy's centered,
//! y-up render space each frame.
use bevy::prelude::*;

use crate::animation::components::SPRITE_SIZE;

pub const VIEW_WIDTH: f32 = 800.0;
pub const VIEW_HEIGHT: f32 = 600.0;

/// Fixed viewport dimensions supplied by the host at startup.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ViewportBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self {
            width: VIEW_WIDTH,
            height: VIEW_HEIGHT,
        }
    }
}

/// Game-space position of an entity's top-left corner.
#[derive(Component, Debug, Clone, Copy)]
pub struct Position(pub Vec2);

impl Position {
    /// Center of the 64x64 sprite box, used for distance checks.
    pub fn center(&self) -> Vec2 {
        self.0 + Vec2::splat(SPRITE_SIZE * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offsets_by_half_sprite() {
        let position = Position(Vec2::new(100.0, 100.0));
        assert_eq!(position.center(), Vec2::new(132.0, 132.0));
    }
}
