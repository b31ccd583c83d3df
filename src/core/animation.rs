//! Sprite animation state shared by the hero and the enemies.
//!
//! The frame clock never restarts when the clip changes. Switching between
//! idle and running only changes which frame table the index points into.

/// Which frame table is playing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    #[default]
    Idle,
    Running,
}

/// Frame rate and frame counts for the two clips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    pub frames_per_second: f32,
    pub idle_frames: usize,
    pub run_frames: usize,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            frames_per_second: 10.0,
            idle_frames: 12,
            run_frames: 8,
        }
    }
}

impl FrameTiming {
    pub fn frame_count(&self, clip: Clip) -> usize {
        match clip {
            Clip::Idle => self.idle_frames,
            Clip::Running => self.run_frames,
        }
    }
}

/// Current clip, frame and elapsed time of an animated actor.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub clip: Clip,
    pub frame: usize,
    pub elapsed: f32,
}

impl AnimationState {
    /// Advance the clock and pick the clip for this tick.
    pub fn advance(&mut self, dt: f32, moving: bool, timing: &FrameTiming) {
        self.elapsed += dt;
        self.clip = if moving { Clip::Running } else { Clip::Idle };

        let count = timing.frame_count(self.clip).max(1);
        let ticks = (self.elapsed * timing.frames_per_second).floor().max(0.0) as usize;
        self.frame = ticks % count;
    }
}
