//! In-game HUD - lives counter.

use bevy::prelude::*;

use crate::core::{GameState, HeroHitEvent};
use crate::world::GameWorld;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the lives text.
#[derive(Component)]
pub struct LivesText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_hud)
        .add_systems(OnExit(GameState::Playing), cleanup_hud)
        .add_systems(
            Update,
            update_lives_text.run_if(in_state(GameState::Playing)),
        );
}

pub fn lives_label(lives: u32) -> String {
    format!("Lives: {lives}")
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, world: Res<GameWorld>) {
    // Top-left corner, same spot the lives were always drawn
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(lives_label(world.hero().lives)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                LivesText,
            ));
        });
}

/// Refresh the counter when the hero gets hit.
fn update_lives_text(
    mut hits: EventReader<HeroHitEvent>,
    mut text_query: Query<&mut Text, With<LivesText>>,
) {
    let Some(hit) = hits.read().last() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    text.0 = lives_label(hit.lives_left);
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_reads_like_the_hud() {
        assert_eq!(lives_label(3), "Lives: 3");
        assert_eq!(lives_label(0), "Lives: 0");
    }
}
