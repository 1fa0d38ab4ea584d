//! Systems for player input and movement.
use bevy::prelude::*;

use crate::animation::components::{CharacterAnimation, Facing, SPRITE_SIZE};
use crate::core::plugin::FrameClock;
use crate::player::components::{Player, Velocity};
use crate::world::components::{Position, ViewportBounds};

/// Movement speed in game units per second.
const PLAYER_SPEED: f32 = 100.0;

/// Resolves the held arrow keys into a single direction. Priority is fixed
/// (left, right, up, down): the first held key wins, so diagonal movement
/// never occurs. Returns `None` when no directional key is held.
pub fn resolve_direction(left: bool, right: bool, up: bool, down: bool) -> Option<Facing> {
    if left {
        Some(Facing::Left)
    } else if right {
        Some(Facing::Right)
    } else if up {
        Some(Facing::Up)
    } else if down {
        Some(Facing::Down)
    } else {
        None
    }
}

/// Translates the current key snapshot into velocity, facing, and walk
/// state. Re-running with an identical snapshot changes nothing.
pub fn apply_directional_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Velocity, &mut CharacterAnimation), With<Player>>,
) {
    let direction = resolve_direction(
        keyboard.pressed(KeyCode::ArrowLeft),
        keyboard.pressed(KeyCode::ArrowRight),
        keyboard.pressed(KeyCode::ArrowUp),
        keyboard.pressed(KeyCode::ArrowDown),
    );

    for (mut velocity, mut animation) in query.iter_mut() {
        match direction {
            Some(facing) => {
                let next = facing.unit() * PLAYER_SPEED;
                if velocity.0 != next {
                    velocity.0 = next;
                }
                animation.set_facing(facing);
                animation.start_walking();
            }
            None => {
                if velocity.0 != Vec2::ZERO {
                    velocity.0 = Vec2::ZERO;
                }
                animation.stop_walking();
            }
        }
    }
}

/// Advances the player by velocity x delta, clamped so the sprite box stays
/// inside the viewport. Stationary players and stalled frames mutate nothing.
pub fn move_player(
    clock: Res<FrameClock>,
    viewport: Res<ViewportBounds>,
    mut query: Query<(&Velocity, &mut Position), With<Player>>,
) {
    let delta = clock.delta_secs();
    if delta <= 0.0 {
        return;
    }

    for (velocity, mut position) in query.iter_mut() {
        if velocity.0 == Vec2::ZERO {
            continue;
        }
        position.0 = step_position(position.0, velocity.0, delta, &viewport);
    }
}

/// One movement step: integrate, then clamp both axes so the sprite's
/// bounding box remains fully inside the viewport.
pub fn step_position(position: Vec2, velocity: Vec2, delta: f32, viewport: &ViewportBounds) -> Vec2 {
    let next = position + velocity * delta;
    Vec2::new(
        next.x.clamp(0.0, viewport.width - SPRITE_SIZE),
        next.y.clamp(0.0, viewport.height - SPRITE_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportBounds {
        ViewportBounds {
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn direction_priority_left_beats_all() {
        assert_eq!(
            resolve_direction(true, true, true, true),
            Some(Facing::Left)
        );
        assert_eq!(
            resolve_direction(false, true, true, true),
            Some(Facing::Right)
        );
        assert_eq!(
            resolve_direction(false, false, true, true),
            Some(Facing::Up)
        );
        assert_eq!(
            resolve_direction(false, false, false, true),
            Some(Facing::Down)
        );
        assert_eq!(resolve_direction(false, false, false, false), None);
    }

    #[test]
    fn resolved_velocity_has_single_axis() {
        for mask in 0u8..16 {
            let direction = resolve_direction(
                mask & 1 != 0,
                mask & 2 != 0,
                mask & 4 != 0,
                mask & 8 != 0,
            );
            if let Some(facing) = direction {
                let velocity = facing.unit() * PLAYER_SPEED;
                assert!(
                    velocity.x == 0.0 || velocity.y == 0.0,
                    "diagonal velocity for mask {mask:#06b}"
                );
                assert_ne!(velocity, Vec2::ZERO);
            }
        }
    }

    #[test]
    fn step_clamps_to_viewport() {
        let bounds = viewport();

        // A huge delta cannot push the sprite box out of bounds.
        let right = step_position(
            Vec2::new(700.0, 300.0),
            Facing::Right.unit() * PLAYER_SPEED,
            60.0,
            &bounds,
        );
        assert_eq!(right, Vec2::new(736.0, 300.0));

        let up = step_position(
            Vec2::new(100.0, 10.0),
            Facing::Up.unit() * PLAYER_SPEED,
            60.0,
            &bounds,
        );
        assert_eq!(up, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn step_moves_proportionally_to_delta() {
        let bounds = viewport();
        let next = step_position(
            Vec2::new(100.0, 100.0),
            Facing::Right.unit() * PLAYER_SPEED,
            0.5,
            &bounds,
        );
        assert_eq!(next, Vec2::new(150.0, 100.0));
    }

    #[test]
    fn zero_delta_is_a_fixed_point() {
        let bounds = viewport();
        let start = Vec2::new(250.0, 250.0);
        let next = step_position(start, Facing::Down.unit() * PLAYER_SPEED, 0.0, &bounds);
        assert_eq!(next, start);
    }

    #[test]
    fn in_bounds_start_stays_in_bounds() {
        let bounds = viewport();
        for facing in [Facing::Up, Facing::Down, Facing::Left, Facing::Right] {
            for delta in [0.0, 0.016, 1.0, 1000.0] {
                let next = step_position(
                    Vec2::new(400.0, 300.0),
                    facing.unit() * PLAYER_SPEED,
                    delta,
                    &bounds,
                );
                assert!(next.x >= 0.0 && next.x <= bounds.width - SPRITE_SIZE);
                assert!(next.y >= 0.0 && next.y <= bounds.height - SPRITE_SIZE);
            }
        }
    }
}
