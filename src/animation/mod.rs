//! Sprite-sheet animation module shared by the player and NPC.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::AnimationPlugin;
