//! Systems for NPC proximity reactions.
use bevy::prelude::*;

use crate::animation::components::{CharacterAnimation, Facing};
use crate::core::plugin::FrameClock;
use crate::npc::components::Npc;
use crate::npc::events::NpcGreetingEvent;
use crate::player::components::Player;
use crate::world::components::Position;

/// Distance (between sprite centers, in game units) below which an NPC
/// reacts to the player.
const TRIGGER_RADIUS: f32 = 80.0;

/// Fixed greeting shown when the player comes within range.
const GREETING: &str = "Hi, how are you?";

/// Checks each NPC's distance to the player. Inside the trigger radius the
/// NPC continuously turns toward the player and greets once on entry;
/// outside, the nearby flag clears so a later visit greets again.
pub fn react_to_player_proximity(
    clock: Res<FrameClock>,
    player_query: Query<&Position, With<Player>>,
    mut npc_query: Query<(Entity, &Position, &mut Npc, &mut CharacterAnimation)>,
    mut greetings: MessageWriter<NpcGreetingEvent>,
) {
    // Stalled frames mutate nothing.
    if clock.delta_secs() <= 0.0 {
        return;
    }

    let Ok(player_position) = player_query.single() else {
        return;
    };
    let player_center = player_position.center();

    for (entity, position, mut npc, mut animation) in npc_query.iter_mut() {
        let center = position.center();
        let distance = player_center.distance(center);
        let (nearby, greet) = proximity_step(npc.player_nearby, distance);

        if nearby {
            animation.set_facing(Facing::from_offset(player_center - center));
        }
        if greet {
            debug!("Player entered NPC range (distance {:.1})", distance);
            greetings.write(NpcGreetingEvent {
                speaker: entity,
                message: GREETING.to_string(),
            });
        }
        npc.player_nearby = nearby;
    }
}

/// Pure proximity step: given the previous nearby flag and the current
/// distance, returns the new flag and whether a greeting fires this frame.
fn proximity_step(was_nearby: bool, distance: f32) -> (bool, bool) {
    if distance < TRIGGER_RADIUS {
        (true, !was_nearby)
    } else {
        (false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_once_per_continuous_entry() {
        let mut nearby = false;
        let mut greetings = 0;

        // Approach, linger, leave, and come back.
        for distance in [120.0, 60.0, 20.0, 60.0, 150.0, 40.0] {
            let (next, greet) = proximity_step(nearby, distance);
            nearby = next;
            if greet {
                greetings += 1;
            }
        }

        assert_eq!(greetings, 2);
        assert!(nearby);
    }

    #[test]
    fn boundary_distance_does_not_trigger() {
        let (nearby, greet) = proximity_step(false, TRIGGER_RADIUS);
        assert!(!nearby);
        assert!(!greet);
    }

    #[test]
    fn nearby_npc_faces_and_greets_the_player() {
        // Player at (100,100), NPC at (120,100): centers 20 units apart.
        let player = Position(Vec2::new(100.0, 100.0));
        let npc = Position(Vec2::new(120.0, 100.0));

        let distance = player.center().distance(npc.center());
        assert_eq!(distance, 20.0);

        let (_, greet) = proximity_step(false, distance);
        assert!(greet);
        assert_eq!(GREETING, "Hi, how are you?");

        // The player stands to the NPC's left, so the NPC turns left.
        assert_eq!(
            Facing::from_offset(player.center() - npc.center()),
            Facing::Left
        );
    }
}
