//! Mini Roguelike - Entry Point
//!
//! Controls:
//! - Mouse: Menu buttons
//! - Arrow keys: Move one cell

use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    App::new()
        // Bevy default plugins, audio is handled by Kira instead
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Mini Roguelike".to_string(),
                        resolution: WindowResolution::new(800.0, 600.0),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Audio
        .add_plugins(bevy_kira_audio::AudioPlugin)

        // Our game plugin
        .add_plugins(mini_roguelike::MiniRoguelikePlugin)

        .run();
}
