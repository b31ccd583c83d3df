//! Enemies module - wandering enemies and their behavior.

mod ai;
mod enemy;
mod plugin;

pub use ai::{random_cell, roll_wander_delay, roll_wander_delta, wander_destination};
pub use enemy::Enemy;
pub use plugin::{EnemyPlugin, EnemyRoster, WanderStep};
