//! Core plugin that sets up game states, events, configuration and the RNG.

use bevy::prelude::*;

use super::config::{load_game_config, GameConfig};
use super::events::*;
use super::rng::SimRng;
use super::states::*;
use crate::audio::AudioRequest;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Menu, Playing, GameOver)
/// - Global events (MenuCommand, HeroHitEvent, ...)
/// - The gameplay config and the simulation RNG
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<MenuCommand>()
            .add_event::<HeroHitEvent>()
            .add_event::<GameOverEvent>()
            .add_event::<AudioRequest>()

            // Config first, the RNG seed comes from it
            .add_systems(Startup, (load_game_config, seed_rng).chain());
    }
}

/// Create the simulation RNG from the loaded config.
fn seed_rng(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(SimRng::new(config.seed));
}
