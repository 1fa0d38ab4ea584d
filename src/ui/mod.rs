// src/ui/mod.rs
//
// UI module providing screen-space elements for the demo.
//
// Current features:
// - Speech bubbles above greeting NPCs
// - Transient operator notices (level wrap-around)

pub mod notice;
pub mod speech_bubble;

use bevy::prelude::*;

use notice::NoticePlugin;
use speech_bubble::SpeechBubblePlugin;

/// Aggregates the screen-space UI plugins.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((SpeechBubblePlugin, NoticePlugin));
    }
}
