// src/ui/speech_bubble/components.rs
//
// Speech bubble components for transient NPC dialogue.

use std::collections::HashMap;

use bevy::prelude::*;

/// Marker component for speech bubble UI entities.
///
/// Replacing this component on an existing bubble restarts the lifetime
/// from zero, which is how repeat greetings refresh a visible bubble.
#[derive(Component, Debug)]
pub struct SpeechBubble {
    /// The NPC entity this bubble hangs over.
    speaker: Entity,

    /// The lifetime timer. When it expires, the bubble despawns.
    lifetime: Timer,
}

impl SpeechBubble {
    /// Create a new speech bubble tracking a speaker.
    pub fn new(speaker: Entity, lifetime_secs: f32) -> Self {
        Self {
            speaker,
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
        }
    }

    /// Get the speaker entity this bubble tracks.
    pub fn speaker(&self) -> Entity {
        self.speaker
    }

    /// Tick the lifetime timer.
    pub fn tick(&mut self, delta: std::time::Duration) {
        self.lifetime.tick(delta);
    }

    /// Check if the bubble's lifetime has expired.
    pub fn is_finished(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// Calculate the alpha fade value (1.0 = fully visible, 0.0 = transparent).
    ///
    /// Fades out during the final `fade_duration` seconds of lifetime.
    pub fn fade_alpha(&self, fade_duration: f32) -> f32 {
        let remaining = self.lifetime.remaining_secs();
        if remaining < fade_duration {
            remaining / fade_duration
        } else {
            1.0
        }
    }
}

/// Resource tracking active bubbles by speaker entity.
///
/// Ensures each NPC has at most one bubble at a time.
#[derive(Resource, Debug, Default)]
pub struct SpeechBubbleTracker {
    /// Maps speaker entity to the bubble entity currently shown for it.
    pub by_speaker: HashMap<Entity, Entity>,
}

/// Resource containing settings for speech bubble behavior.
#[derive(Resource, Debug)]
pub struct SpeechBubbleSettings {
    /// How long bubbles remain visible (seconds).
    pub lifetime_seconds: f32,

    /// Duration of fade-out animation (seconds).
    pub fade_seconds: f32,

    /// Horizontal offset from the speaker's top-left corner (pixels).
    pub horizontal_offset: f32,

    /// Gap above the speaker's sprite (pixels).
    pub vertical_offset: f32,

    /// Maximum bubble width (pixels).
    pub max_width: f32,

    /// Font size for bubble text (points).
    pub font_size: f32,
}

impl Default for SpeechBubbleSettings {
    fn default() -> Self {
        Self {
            lifetime_seconds: 3.0,
            fade_seconds: 0.5,
            horizontal_offset: 20.0,
            vertical_offset: 40.0,
            max_width: 120.0,
            font_size: 14.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn bubble_expires_after_lifetime() {
        let mut bubble = SpeechBubble::new(Entity::PLACEHOLDER, 3.0);
        bubble.tick(Duration::from_secs_f32(2.9));
        assert!(!bubble.is_finished());

        bubble.tick(Duration::from_secs_f32(0.2));
        assert!(bubble.is_finished());
    }

    #[test]
    fn replacing_the_bubble_restarts_the_clock() {
        let mut bubble = SpeechBubble::new(Entity::PLACEHOLDER, 3.0);
        bubble.tick(Duration::from_secs_f32(2.9));

        // A repeat greeting swaps in a fresh component.
        bubble = SpeechBubble::new(Entity::PLACEHOLDER, 3.0);
        bubble.tick(Duration::from_secs_f32(2.9));
        assert!(!bubble.is_finished());
    }

    #[test]
    fn fade_kicks_in_near_the_end() {
        let mut bubble = SpeechBubble::new(Entity::PLACEHOLDER, 3.0);
        assert_eq!(bubble.fade_alpha(0.5), 1.0);

        bubble.tick(Duration::from_secs_f32(2.75));
        let alpha = bubble.fade_alpha(0.5);
        assert!(alpha > 0.0 && alpha < 1.0);
    }
}
