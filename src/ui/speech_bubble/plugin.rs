// src/ui/speech_bubble/plugin.rs
//
// Plugin registration for speech bubble systems.

use bevy::prelude::*;

use super::components::{SpeechBubbleSettings, SpeechBubbleTracker};
use super::systems::{spawn_speech_bubbles, update_speech_bubbles};

/// Plugin providing speech bubble display for NPC greetings.
///
/// # System Ordering
///
/// 1. `spawn_speech_bubbles` - Listens to NpcGreetingEvent
/// 2. `update_speech_bubbles` - Anchors bubbles, handles lifetime/fade
///
/// # Dependencies
///
/// - `NpcPlugin` must be registered (provides NpcGreetingEvent)
pub struct SpeechBubblePlugin;

impl Plugin for SpeechBubblePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpeechBubbleSettings>()
            .init_resource::<SpeechBubbleTracker>()
            .add_systems(
                Update,
                (
                    spawn_speech_bubbles,
                    update_speech_bubbles.after(spawn_speech_bubbles),
                ),
            );
    }
}
