//! Wandering enemies.

use bevy::math::IVec2;
use rand::Rng;

use super::ai::{roll_wander_delay, roll_wander_delta, wander_destination};
use crate::core::{AnimationState, FrameTiming, GameConfig};
use crate::world::{GridBody, GridPos};

/// Enemy state: a grid body that picks a new neighbouring cell on a timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: GridBody,
    pub animation: AnimationState,
    /// Seconds until the next wander step
    pub wander_timer: f32,
    /// Range the timer is resampled from
    pub wander_interval: (f32, f32),
}

impl Enemy {
    pub fn new<R: Rng + ?Sized>(body: GridBody, wander_interval: (f32, f32), rng: &mut R) -> Self {
        Self {
            body,
            animation: AnimationState::default(),
            wander_timer: roll_wander_delay(rng, wander_interval),
            wander_interval,
        }
    }

    pub fn from_config<R: Rng + ?Sized>(cell: GridPos, config: &GameConfig, rng: &mut R) -> Self {
        Self::new(GridBody::from_config(cell, config), config.wander_interval, rng)
    }

    /// Move, count down the wander timer, then update the animation.
    ///
    /// The clip is picked after wandering, so a fresh destination shows up
    /// as running in the same tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, dt: f32, timing: &FrameTiming, rng: &mut R) {
        self.body.tick(dt);

        self.wander_timer -= dt;
        if self.wander_timer <= 0.0 {
            self.wander_timer = roll_wander_delay(rng, self.wander_interval);
            let delta = roll_wander_delta(rng);
            self.wander(delta);
        }

        self.animation.advance(dt, self.body.is_moving(), timing);
    }

    /// Head for the neighbouring cell at `delta`, clamped to the grid.
    pub fn wander(&mut self, delta: IVec2) {
        let next = wander_destination(self.body.cell, delta, self.body.grid());
        self.body.set_destination(next);
    }
}
