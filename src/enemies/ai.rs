//! Enemy wandering behavior.
//!
//! Enemies have no goal. Every so often they step to a random neighbouring
//! cell (diagonals and staying put included).

use bevy::prelude::*;
use rand::Rng;

use crate::world::{GridBounds, GridPos};

/// Time until the next wander step, uniform in `[min, max)`.
pub fn roll_wander_delay<R: Rng + ?Sized>(rng: &mut R, (min, max): (f32, f32)) -> f32 {
    rng.gen_range(min..max)
}

/// Independent step of -1, 0 or +1 cells on each axis.
pub fn roll_wander_delta<R: Rng + ?Sized>(rng: &mut R) -> IVec2 {
    IVec2::new(rng.gen_range(-1..=1), rng.gen_range(-1..=1))
}

/// Cell reached from `from` by `delta`, clamped onto the grid.
///
/// May be `from` itself; that is a valid idle wander.
pub fn wander_destination(from: GridPos, delta: IVec2, grid: &GridBounds) -> GridPos {
    grid.clamp(from.offset(delta))
}

/// Uniformly random cell anywhere on the grid.
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: &GridBounds) -> GridPos {
    GridPos::new(rng.gen_range(0..grid.columns), rng.gen_range(0..grid.rows))
}
