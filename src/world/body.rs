//! Positional and motion model shared by every actor on the grid.

use bevy::prelude::*;

use super::grid::{GridBounds, GridPos};
use crate::core::{Animator, GameConfig};

/// Anything closer than this to its target counts as arrived.
const ARRIVAL_DISTANCE: f32 = 1.0;

/// A body that glides between grid cells.
///
/// `cell` is the source of truth. `target` is always its cell center and
/// `position` chases `target` at `speed` units per second.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBody {
    pub position: Vec2,
    pub target: Vec2,
    pub cell: GridPos,
    pub speed: f32,
    pub size: f32,
    pub animator: Animator,
    grid: GridBounds,
}

impl GridBody {
    /// Place a body at rest in the center of `cell`.
    pub fn new(cell: GridPos, grid: GridBounds, speed: f32, size: f32, animator: Animator) -> Self {
        let center = grid.cell_center(cell);
        Self {
            position: center,
            target: center,
            cell,
            speed,
            size,
            animator,
            grid,
        }
    }

    /// Body using the speed, size and pulse settings from `config`.
    pub fn from_config(cell: GridPos, config: &GameConfig) -> Self {
        Self::new(
            cell,
            GridBounds::from_config(config),
            config.move_speed,
            config.entity_size(),
            Animator::new(config.pulse_rate, config.pulse_amplitude),
        )
    }

    pub fn grid(&self) -> &GridBounds {
        &self.grid
    }

    /// Retarget to `cell` without teleporting.
    pub fn set_destination(&mut self, cell: GridPos) {
        self.cell = cell;
        self.target = self.grid.cell_center(cell);
    }

    /// Advance the pulse and move towards the target, never past it.
    pub fn tick(&mut self, dt: f32) {
        self.animator.advance(dt);

        let offset = self.target - self.position;
        let distance = offset.length();
        if distance > ARRIVAL_DISTANCE {
            let step = (self.speed * dt).min(distance);
            self.position += offset / distance * step;
        }
    }

    /// Exact comparison on purpose: a sub-unit residual still counts as moving.
    pub fn is_moving(&self) -> bool {
        self.position != self.target
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Collision box centered on the current position.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, Vec2::splat(self.size))
    }

    /// Bounding box scaled by the pulse, for drawing only.
    pub fn pulsed_bounds(&self) -> Rect {
        Rect::from_center_size(
            self.position,
            Vec2::splat(self.size * self.animator.pulse_scale()),
        )
    }
}
