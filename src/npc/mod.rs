//! NPC module - reacts to player proximity with facing and greetings.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::NpcPlugin;
