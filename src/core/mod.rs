//! Core module owning frame timing.
pub mod plugin;

pub use plugin::CorePlugin;
