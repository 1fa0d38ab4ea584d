// src/ui/speech_bubble/systems.rs
//
// Systems for spawning, updating, and despawning speech bubbles.

use bevy::prelude::*;

use crate::npc::events::NpcGreetingEvent;
use crate::world::components::Position;

use super::components::{SpeechBubble, SpeechBubbleSettings, SpeechBubbleTracker};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.95);
const TEXT_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);
const PADDING_PX: f32 = 6.0;

/// Spawn or refresh speech bubbles when NPCs greet.
///
/// A refresh replaces the bubble's lifetime component, so a repeat
/// greeting restarts the clock instead of inheriting a pending hide.
pub fn spawn_speech_bubbles(
    mut commands: Commands,
    mut tracker: ResMut<SpeechBubbleTracker>,
    settings: Res<SpeechBubbleSettings>,
    mut greetings: MessageReader<NpcGreetingEvent>,
) {
    for event in greetings.read() {
        info!("Speech bubble: \"{}\"", event.message);

        // If a bubble already hangs over this speaker, refresh it.
        if let Some(&bubble_entity) = tracker.by_speaker.get(&event.speaker) {
            commands.entity(bubble_entity).insert((
                SpeechBubble::new(event.speaker, settings.lifetime_seconds),
                Text::new(event.message.clone()),
            ));
            continue;
        }

        let bubble_entity = commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    max_width: Val::Px(settings.max_width),
                    padding: UiRect::all(Val::Px(PADDING_PX)),
                    display: Display::None, // Hidden until positioned by the update system
                    ..default()
                },
                BackgroundColor(BACKGROUND_COLOR),
                ZIndex(100),
                SpeechBubble::new(event.speaker, settings.lifetime_seconds),
                Text::new(event.message.clone()),
                TextFont {
                    font_size: settings.font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ))
            .id();

        tracker.by_speaker.insert(event.speaker, bubble_entity);
    }
}

/// Tick bubble lifetimes, anchor each bubble above its speaker, apply the
/// fade-out, and despawn expired or orphaned bubbles.
pub fn update_speech_bubbles(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<SpeechBubbleSettings>,
    mut tracker: ResMut<SpeechBubbleTracker>,
    speaker_positions: Query<&Position>,
    mut bubble_query: Query<(
        Entity,
        &mut SpeechBubble,
        &mut Node,
        &mut BackgroundColor,
        &mut TextColor,
    )>,
) {
    for (entity, mut bubble, mut node, mut background, mut text_color) in bubble_query.iter_mut() {
        bubble.tick(time.delta());

        if bubble.is_finished() {
            tracker.by_speaker.remove(&bubble.speaker());
            commands.entity(entity).despawn();
            continue;
        }

        let Ok(speaker_position) = speaker_positions.get(bubble.speaker()) else {
            // Speaker was torn down with its level.
            tracker.by_speaker.remove(&bubble.speaker());
            commands.entity(entity).despawn();
            continue;
        };

        // Game space is already screen space, so the bubble anchors
        // directly off the speaker's position.
        node.display = Display::Flex;
        node.left = Val::Px(speaker_position.0.x + settings.horizontal_offset);
        node.top = Val::Px(speaker_position.0.y - settings.vertical_offset);

        let alpha = bubble.fade_alpha(settings.fade_seconds);
        text_color.0 = TEXT_COLOR.with_alpha(alpha);
        background.0 = BACKGROUND_COLOR.with_alpha(alpha * 0.95);
    }
}
