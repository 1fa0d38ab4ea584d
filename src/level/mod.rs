//! Level module - registry configuration, loading, and transitions.
pub mod components;
pub mod config;
pub mod plugin;
pub mod systems;

pub use plugin::LevelPlugin;
