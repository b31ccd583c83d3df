//! Global events used for cross-system communication.
//!
//! The simulation never talks to Bevy directly. The world systems translate
//! its results into these events, and the UI/audio plugins react to them.

use bevy::prelude::*;

/// Actions a menu button can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Reset the hero and enemies and begin playing
    StartGame,
    /// Flip the music preference (stops the current track when turned off)
    ToggleMusic,
    /// Flip the sound effect preference
    ToggleSound,
    /// Quit the application
    Exit,
}

/// Sent by the UI when a menu button was clicked.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCommand(pub MenuAction);

/// Sent when an enemy landed a hit on the hero.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroHitEvent {
    /// Lives remaining after the hit
    pub lives_left: u32,
}

/// Sent once when the last life is lost.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent;
