// src/ui/notice/components.rs
//
// Components and resources for the notice banner.

use bevy::prelude::*;

/// Component attached to the active notice banner entity.
#[derive(Component, Debug)]
pub struct NoticeBanner {
    /// The lifetime timer. When it expires, the banner despawns.
    lifetime: Timer,

    /// Duration of fade-out effect (stored for fade calculation).
    fade_duration: f32,
}

impl NoticeBanner {
    pub fn new(lifetime_secs: f32, fade_duration: f32) -> Self {
        Self {
            lifetime: Timer::from_seconds(lifetime_secs, TimerMode::Once),
            fade_duration,
        }
    }

    /// Tick the lifetime timer.
    pub fn tick(&mut self, delta: std::time::Duration) {
        self.lifetime.tick(delta);
    }

    /// Check if the banner's lifetime has expired.
    pub fn is_finished(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// Alpha fade value applied during the final seconds of lifetime.
    pub fn fade_alpha(&self) -> f32 {
        let remaining = self.lifetime.remaining_secs();
        if remaining < self.fade_duration {
            remaining / self.fade_duration
        } else {
            1.0
        }
    }
}

/// Resource tracking the active banner; a new notice replaces it.
#[derive(Resource, Debug, Default)]
pub struct NoticeTracker {
    pub active: Option<Entity>,
}

/// Resource containing settings for notice banner behavior.
#[derive(Resource, Debug)]
pub struct NoticeSettings {
    /// How long notices remain visible (seconds).
    pub lifetime_seconds: f32,

    /// Duration of fade-out animation (seconds).
    pub fade_seconds: f32,

    /// Offset from the top edge of the screen (pixels).
    pub top_offset: f32,

    /// Font size for notice text (points).
    pub font_size: f32,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            lifetime_seconds: 4.0,
            fade_seconds: 1.0,
            top_offset: 24.0,
            font_size: 18.0,
        }
    }
}
