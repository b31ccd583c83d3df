//! Grid coordinates and the conversion between cells and world units.
//!
//! World space has its origin in the top-left corner with y pointing down,
//! matching window cursor coordinates.

use bevy::prelude::*;

use crate::core::GameConfig;

/// A logical cell on the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step by `delta` cells without any bounds checking.
    pub fn offset(self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Directional move requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Cell delta in world space (y grows downwards).
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

/// Grid dimensions plus the size of a cell in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub columns: i32,
    pub rows: i32,
    pub cell_size: f32,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl GridBounds {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            columns: config.columns(),
            rows: config.rows(),
            cell_size: config.cell_size,
        }
    }

    pub fn contains(&self, cell: GridPos) -> bool {
        (0..self.columns).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }

    /// Pull a cell back onto the grid.
    pub fn clamp(&self, cell: GridPos) -> GridPos {
        GridPos::new(
            cell.x.clamp(0, self.columns - 1),
            cell.y.clamp(0, self.rows - 1),
        )
    }

    /// World-space center of a cell.
    ///
    /// The half-cell offset is floored so odd cell sizes land on whole units.
    pub fn cell_center(&self, cell: GridPos) -> Vec2 {
        let half = (self.cell_size / 2.0).floor();
        Vec2::new(
            cell.x as f32 * self.cell_size + half,
            cell.y as f32 * self.cell_size + half,
        )
    }
}
