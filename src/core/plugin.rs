//! CorePlugin wires frame timing for the demo loop.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Tracks the wall-clock delta feeding each frame of the demo.
///
/// Frames that report a zero delta are recorded but advance nothing;
/// downstream systems read `delta_secs()` and mutate no state for them.
#[derive(Resource, Debug, Default)]
pub struct FrameClock {
    last_delta: Duration,
    elapsed: Duration,
    frame_count: u64,
}

impl FrameClock {
    /// Delta of the most recent frame. Zero on stalled frames.
    pub fn delta(&self) -> Duration {
        self.last_delta
    }

    /// Delta of the most recent frame in seconds. Zero on stalled frames.
    pub fn delta_secs(&self) -> f32 {
        self.last_delta.as_secs_f32()
    }

    /// Total time accumulated over non-stalled frames.
    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of frames that carried a non-zero delta.
    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Records a frame delta. Zero-delta frames leave elapsed time and the
    /// frame counter untouched.
    pub fn tick(&mut self, delta: Duration) {
        self.last_delta = delta;
        if delta.is_zero() {
            return;
        }
        self.elapsed += delta;
        self.frame_count += 1;
    }
}

/// Registers the frame clock and its per-frame update.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameClock>()
            .add_systems(Update, update_frame_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_frame_stats.after(update_frame_clock));
        }
    }
}

pub fn update_frame_clock(mut clock: ResMut<FrameClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

#[cfg(feature = "core_debug")]
fn log_frame_stats(mut timer: ResMut<DebugTickTimer>, clock: Res<FrameClock>) {
    if timer.timer.tick(clock.last_delta).just_finished() {
        info!(
            target: "core_debug",
            "Elapsed: {:.2}s | frames: {} | dt: {:.4}s",
            clock.elapsed().as_secs_f32(),
            clock.frame_count(),
            clock.delta_secs(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_non_zero_deltas() {
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_secs_f32(0.016));
        clock.tick(Duration::from_secs_f32(0.020));

        assert_eq!(clock.frame_count(), 2);
        assert!((clock.elapsed().as_secs_f32() - 0.036).abs() < 1e-6);
        assert!((clock.delta_secs() - 0.020).abs() < 1e-6);
    }

    #[test]
    fn zero_delta_frames_are_skipped() {
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_secs_f32(0.016));
        clock.tick(Duration::ZERO);

        assert_eq!(clock.delta_secs(), 0.0);
        assert_eq!(clock.frame_count(), 1);
        assert_eq!(clock.elapsed(), Duration::from_secs_f32(0.016));
    }
}
