//! Game state definitions that control the overall flow of the game.
//!
//! The authoritative state lives inside [`GameWorld`](crate::world::GameWorld).
//! Bevy's `State<GameState>` mirrors it so screen setup and teardown can hook
//! into `OnEnter` / `OnExit`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Menu`
/// - Enter `Playing` when the player picks "Start Game"
/// - `GameOver` once the hero has no lives left
///
/// There is no way back out of `GameOver`.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title screen with the menu buttons
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Hero ran out of lives
    GameOver,
}
