//! Mini Roguelike - a small grid-based action game in Bevy.
//!
//! The hero hops between cells of a 16x12 grid while enemies wander at
//! random. Touching an enemy costs a life; losing all three ends the game.
//!
//! # Architecture
//!
//! The simulation itself is plain Rust owned by [`world::GameWorld`]. The
//! plugins around it feed it time and input and draw what it holds:
//!
//! - **Core**: Game states, global events, config, RNG, animation primitives
//! - **World**: Grid, motion, collisions, the game state machine
//! - **Player**: The hero and keyboard control
//! - **Enemies**: Wandering enemies and their roster
//! - **Audio**: Playback seam and the Kira backend
//! - **Rendering**: Camera, background, sprites, pulse outlines
//! - **UI**: Menu, HUD, game over screen

pub mod audio;
pub mod core;
pub mod enemies;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Expects `DefaultPlugins` and `bevy_kira_audio::AudioPlugin` to be present.
pub struct MiniRoguelikePlugin;

impl Plugin for MiniRoguelikePlugin {
    fn build(&self, app: &mut App) {
        app
            // Simulation (works without a window)
            .add_plugins(SimulationPlugin)

            // Audio playback
            .add_plugins(audio::AudioBridgePlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}

/// Gameplay plugins that run headless: no window, renderer or audio device.
///
/// Integration tests use this on top of `MinimalPlugins` and `StatesPlugin`.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy bookkeeping
            .add_plugins(enemies::EnemyPlugin);
    }
}
