// src/ui/notice/mod.rs
//
// Notice module providing a transient top-center banner for
// operator-visible messages (e.g. the level wrap-around notice).

pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::NoticePlugin;
