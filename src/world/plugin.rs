//! World plugin - owns the simulation resource and drives it every frame.

use bevy::prelude::*;

use super::game_world::{GameWorld, MenuResponse};
use crate::audio::AudioRequest;
use crate::core::{
    config::load_game_config, GameConfig, GameOverEvent, GameState, HeroHitEvent, MenuCommand,
    SimRng,
};

/// Ordering for the per-frame simulation work.
///
/// Input is applied before the tick, and everything that reads the world
/// (drawing, HUD) runs after `Sync`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorldSet {
    Input,
    Tick,
    Sync,
}

/// World plugin - creates the [`GameWorld`] and runs the tick.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (WorldSet::Input, WorldSet::Tick, WorldSet::Sync).chain(),
        )
        .add_systems(Startup, setup_world.after(load_game_config))
        .add_systems(Update, apply_menu_commands.in_set(WorldSet::Input))
        .add_systems(Update, tick_world.in_set(WorldSet::Tick))
        .add_systems(Update, sync_game_state.in_set(WorldSet::Sync));
    }
}

/// Build the world once the config is available.
pub fn setup_world(mut commands: Commands, config: Res<GameConfig>) {
    let world = GameWorld::try_new(config.clone()).unwrap_or_else(|e| {
        error!("Rejected game config: {}. Using defaults.", e);
        GameWorld::new(GameConfig::default())
    });
    commands.insert_resource(world);
}

/// Run menu actions requested by the UI.
fn apply_menu_commands(
    mut menu_commands: EventReader<MenuCommand>,
    mut world: ResMut<GameWorld>,
    mut rng: ResMut<SimRng>,
    mut audio: EventWriter<AudioRequest>,
    mut exit: EventWriter<AppExit>,
) {
    for MenuCommand(action) in menu_commands.read() {
        debug!("Menu action: {:?}", action);
        if world.apply_menu_action(*action, &mut rng.0, &mut audio) == MenuResponse::Exit {
            info!("Exit requested from the menu");
            exit.send(AppExit::Success);
        }
    }
}

/// Advance the simulation by the frame delta.
fn tick_world(
    time: Res<Time>,
    mut world: ResMut<GameWorld>,
    mut rng: ResMut<SimRng>,
    mut audio: EventWriter<AudioRequest>,
    mut hits: EventWriter<HeroHitEvent>,
    mut game_over: EventWriter<GameOverEvent>,
) {
    let outcome = world.tick(time.delta_secs(), &mut rng.0, &mut audio);

    if outcome.hits > 0 {
        hits.send(HeroHitEvent {
            lives_left: outcome.lives_left,
        });
    }
    if outcome.game_over {
        game_over.send(GameOverEvent);
    }
}

/// Mirror the world's state into Bevy's state machine.
fn sync_game_state(
    world: Res<GameWorld>,
    current: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if *current.get() != world.state() {
        next_state.set(world.state());
    }
}
