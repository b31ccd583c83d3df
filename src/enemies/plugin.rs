//! Enemy plugin - keeps a roster of enemy cells and logs their wandering.

use bevy::prelude::*;

use crate::core::{GameState, MenuAction, MenuCommand};
use crate::world::{GameWorld, GridPos, WorldSet};

/// One enemy stepping to a new cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WanderStep {
    pub enemy: usize,
    pub from: GridPos,
    pub to: GridPos,
}

/// Last known cell of every enemy, plus a running count of steps taken.
#[derive(Resource, Debug, Default)]
pub struct EnemyRoster {
    cells: Vec<GridPos>,
    steps: u64,
}

impl EnemyRoster {
    pub fn cells(&self) -> &[GridPos] {
        &self.cells
    }

    /// Wander steps seen since the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Start tracking a fresh set of enemies.
    pub fn reset(&mut self, cells: impl IntoIterator<Item = GridPos>) {
        self.cells = cells.into_iter().collect();
        self.steps = 0;
    }

    /// Compare against the current cells and return every enemy that moved.
    pub fn record(&mut self, cells: impl IntoIterator<Item = GridPos>) -> Vec<WanderStep> {
        let mut moved = Vec::new();
        for (enemy, to) in cells.into_iter().enumerate() {
            match self.cells.get_mut(enemy) {
                Some(from) if *from != to => {
                    moved.push(WanderStep {
                        enemy,
                        from: *from,
                        to,
                    });
                    *from = to;
                }
                Some(_) => {}
                None => self.cells.push(to),
            }
        }
        self.steps += moved.len() as u64;
        moved
    }
}

/// Enemy plugin - enemy bookkeeping around the simulation tick.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRoster>()
            .add_systems(Update, track_enemy_steps.in_set(WorldSet::Sync));
    }
}

/// Reset the roster on a new game and log each wander step.
fn track_enemy_steps(
    mut menu_commands: EventReader<MenuCommand>,
    world: Res<GameWorld>,
    mut roster: ResMut<EnemyRoster>,
) {
    let cells = world.enemies().iter().map(|enemy| enemy.body.cell);

    let started = menu_commands
        .read()
        .filter(|MenuCommand(action)| *action == MenuAction::StartGame)
        .count()
        > 0;
    if started {
        roster.reset(cells);
        info!("Tracking {} enemies", roster.cells().len());
        return;
    }

    if world.state() != GameState::Playing {
        return;
    }

    for step in roster.record(cells) {
        debug!(
            "Enemy {} wanders ({}, {}) -> ({}, {})",
            step.enemy, step.from.x, step.from.y, step.to.x, step.to.y
        );
    }
}
