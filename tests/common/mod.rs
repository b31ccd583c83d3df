//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the ECS runtime and `Time`.
//! - `StatesPlugin` drives `GameState` transitions.
//! - `SimulationPlugin` installs the gameplay plugins that need no window.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(mini_roguelike::SimulationPlugin);
    app
}

/// Send a menu command and run one frame.
pub fn click(app: &mut App, action: mini_roguelike::core::MenuAction) {
    app.world_mut()
        .send_event(mini_roguelike::core::MenuCommand(action));
    app.update();
}
