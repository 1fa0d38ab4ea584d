//! Components for the player entity.
use bevy::prelude::*;

/// Marker component identifying the player entity.
#[derive(Component, Debug)]
pub struct Player;

/// Current movement velocity in game units per second.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Velocity(pub Vec2);
