//! Player plugin - keyboard control of the hero.

use bevy::prelude::*;

use super::input;
use crate::world::WorldSet;

/// Player plugin - routes directional input into the simulation.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            input::handle_move_input
                .in_set(WorldSet::Input)
                .run_if(resource_exists::<ButtonInput<KeyCode>>),
        );
    }
}
