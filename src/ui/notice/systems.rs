// src/ui/notice/systems.rs
//
// Systems for spawning, updating, and despawning notice banners.

use bevy::prelude::*;

use super::components::{NoticeBanner, NoticeSettings, NoticeTracker};
use super::events::NoticeEvent;

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.9);
const TEXT_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);

/// Spawn a notice banner for each NoticeEvent, replacing any banner
/// already on screen.
pub fn spawn_notice_banner(
    mut commands: Commands,
    mut tracker: ResMut<NoticeTracker>,
    settings: Res<NoticeSettings>,
    mut notices: MessageReader<NoticeEvent>,
) {
    for event in notices.read() {
        info!("Notice: {}", event.text);

        if let Some(old_banner) = tracker.active.take() {
            commands.entity(old_banner).despawn();
        }

        let banner = commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(settings.top_offset),
                    left: Val::Percent(50.0),
                    padding: UiRect::all(Val::Px(10.0)),
                    ..default()
                },
                BackgroundColor(BACKGROUND_COLOR),
                ZIndex(110),
                NoticeBanner::new(settings.lifetime_seconds, settings.fade_seconds),
                Text::new(event.text.clone()),
                TextFont {
                    font_size: settings.font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ))
            .id();

        tracker.active = Some(banner);
    }
}

/// Tick banner lifetimes, apply fade-out, despawn when finished.
pub fn update_notice_banner(
    mut commands: Commands,
    time: Res<Time>,
    mut tracker: ResMut<NoticeTracker>,
    mut banner_query: Query<(Entity, &mut NoticeBanner, &mut BackgroundColor, &mut TextColor)>,
) {
    for (entity, mut banner, mut background, mut text_color) in banner_query.iter_mut() {
        banner.tick(time.delta());

        if banner.is_finished() {
            if tracker.active == Some(entity) {
                tracker.active = None;
            }
            commands.entity(entity).despawn();
            continue;
        }

        let alpha = banner.fade_alpha();
        background.0 = BACKGROUND_COLOR.with_alpha(alpha * 0.9);
        text_color.0 = TEXT_COLOR.with_alpha(alpha);
    }
}
