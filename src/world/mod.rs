//! World module - the grid, bodies moving on it and the simulation root.

mod body;
mod collision;
mod game_world;
mod grid;
mod plugin;

pub use body::GridBody;
pub use collision::{overlaps, resolve_contacts};
pub use game_world::{GameWorld, MenuResponse, TickOutcome};
pub use grid::{Direction, GridBounds, GridPos};
pub use plugin::{setup_world, WorldPlugin, WorldSet};
