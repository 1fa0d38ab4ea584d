//! World module owning the 2D coordinate space, viewport, and camera.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
