//! Facing direction and sprite-sheet animation state.
//!
//! Character sheets are 9 columns x 4 rows of 64x64 frames, one row per
//! facing direction:
//!   Row 0: up, Row 1: left, Row 2: down, Row 3: right
use bevy::prelude::*;

/// Edge length of one sheet frame in pixels.
pub const FRAME_SIZE_PX: u32 = 64;

/// Sprite bounding-box size in game units (one frame, unscaled).
pub const SPRITE_SIZE: f32 = FRAME_SIZE_PX as f32;

/// Walk-cycle frames per sheet row.
pub const SHEET_COLUMNS: usize = 9;

/// Facing rows on the sheet.
pub const SHEET_ROWS: usize = 4;

/// Walk-cycle playback rate in frames per second.
pub const WALK_FRAME_RATE: f32 = 8.0;

/// Cardinal facing of a character, selecting the sheet row shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Sheet row holding this facing's frames.
    pub fn atlas_row(self) -> usize {
        match self {
            Facing::Up => 0,
            Facing::Left => 1,
            Facing::Down => 2,
            Facing::Right => 3,
        }
    }

    /// Unit movement vector in game space (y grows downward).
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Picks the cardinal direction of an offset vector. The axis with the
    /// greater absolute magnitude wins; ties (including the zero vector)
    /// resolve to the vertical branch.
    pub fn from_offset(offset: Vec2) -> Self {
        if offset.x.abs() > offset.y.abs() {
            if offset.x < 0.0 {
                Facing::Left
            } else {
                Facing::Right
            }
        } else if offset.y < 0.0 {
            Facing::Up
        } else {
            Facing::Down
        }
    }
}

/// Animation state machine for a character sprite: a facing direction
/// crossed with idle/walking. Walking cycles through the facing's row at a
/// fixed rate; idle holds frame zero.
#[derive(Component, Debug)]
pub struct CharacterAnimation {
    facing: Facing,
    walking: bool,
    frame: usize,
    timer: Timer,
}

impl CharacterAnimation {
    pub fn new(facing: Facing) -> Self {
        Self {
            facing,
            walking: false,
            frame: 0,
            timer: Timer::from_seconds(1.0 / WALK_FRAME_RATE, TimerMode::Repeating),
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_walking(&self) -> bool {
        self.walking
    }

    /// Turns the character. A facing change restarts the row at frame zero;
    /// re-applying the current facing changes nothing.
    pub fn set_facing(&mut self, facing: Facing) {
        if self.facing == facing {
            return;
        }
        self.facing = facing;
        self.frame = 0;
        self.timer.reset();
    }

    /// Starts the walk cycle. A no-op when already walking.
    pub fn start_walking(&mut self) {
        if self.walking {
            return;
        }
        self.walking = true;
        self.timer.reset();
    }

    /// Halts the walk cycle and rests on frame zero. A no-op when idle.
    pub fn stop_walking(&mut self) {
        if !self.walking {
            return;
        }
        self.walking = false;
        self.frame = 0;
    }

    /// Advances the walk cycle by a frame delta. Idle characters hold still.
    pub fn tick(&mut self, delta: std::time::Duration) {
        if !self.walking {
            return;
        }
        self.timer.tick(delta);
        for _ in 0..self.timer.times_finished_this_tick() {
            self.frame = (self.frame + 1) % SHEET_COLUMNS;
        }
    }

    /// Index into the sheet atlas for the frame currently shown.
    pub fn atlas_index(&self) -> usize {
        self.facing.atlas_row() * SHEET_COLUMNS + self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn horizontal_axis_dominates_facing() {
        assert_eq!(Facing::from_offset(Vec2::new(5.0, 3.0)), Facing::Right);
        assert_eq!(Facing::from_offset(Vec2::new(-5.0, 3.0)), Facing::Left);
        assert_eq!(Facing::from_offset(Vec2::new(-5.0, -3.0)), Facing::Left);
    }

    #[test]
    fn vertical_axis_wins_ties() {
        assert_eq!(Facing::from_offset(Vec2::new(3.0, -3.0)), Facing::Up);
        assert_eq!(Facing::from_offset(Vec2::new(3.0, 3.0)), Facing::Down);
        assert_eq!(Facing::from_offset(Vec2::ZERO), Facing::Down);
    }

    #[test]
    fn facing_rows_match_sheet_layout() {
        assert_eq!(Facing::Up.atlas_row(), 0);
        assert_eq!(Facing::Left.atlas_row(), 1);
        assert_eq!(Facing::Down.atlas_row(), 2);
        assert_eq!(Facing::Right.atlas_row(), 3);
    }

    #[test]
    fn walking_cycles_and_wraps_frames() {
        let mut animation = CharacterAnimation::new(Facing::Down);
        animation.start_walking();

        // One full row plus one frame at 8 fps.
        let step = Duration::from_secs_f32(1.0 / WALK_FRAME_RATE);
        for _ in 0..(SHEET_COLUMNS + 1) {
            animation.tick(step);
        }

        assert_eq!(animation.atlas_index() % SHEET_COLUMNS, 1);
    }

    #[test]
    fn idle_holds_frame_zero() {
        let mut animation = CharacterAnimation::new(Facing::Right);
        animation.tick(Duration::from_secs(5));
        assert_eq!(animation.atlas_index(), Facing::Right.atlas_row() * SHEET_COLUMNS);
    }

    #[test]
    fn facing_change_resets_frame() {
        let mut animation = CharacterAnimation::new(Facing::Down);
        animation.start_walking();
        animation.tick(Duration::from_secs_f32(3.0 / WALK_FRAME_RATE));
        assert_ne!(animation.atlas_index() % SHEET_COLUMNS, 0);

        animation.set_facing(Facing::Left);
        assert_eq!(animation.facing(), Facing::Left);
        assert!(animation.is_walking());
        assert_eq!(animation.atlas_index(), Facing::Left.atlas_row() * SHEET_COLUMNS);
    }

    #[test]
    fn stopping_resets_frame_and_is_idempotent() {
        let mut animation = CharacterAnimation::new(Facing::Up);
        animation.start_walking();
        animation.tick(Duration::from_secs_f32(2.0 / WALK_FRAME_RATE));

        animation.stop_walking();
        let index = animation.atlas_index();
        animation.stop_walking();

        assert!(!animation.is_walking());
        assert_eq!(index, Facing::Up.atlas_row() * SHEET_COLUMNS);
        assert_eq!(animation.atlas_index(), index);
    }
}
