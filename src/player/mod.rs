//! Player module - translates arrow-key input into movement and animation.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
