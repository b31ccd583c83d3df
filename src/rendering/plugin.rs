//! Rendering plugin - camera, background, actor sprites and pulse outlines.

use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use super::scene::{actor_views, to_screen};
use super::sprites::{load_sprite_sheets, SpriteSheets};
use crate::core::{config::load_game_config, GameConfig, GameState};
use crate::world::{GameWorld, WorldSet};

/// Depth of the background image.
const BACKGROUND_Z: f32 = -10.0;

/// Rendering plugin - draws the committed world state after each tick.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Startup,
                (spawn_background, load_sprite_sheets).after(load_game_config),
            )
            .add_systems(
                Update,
                (sync_actor_sprites, draw_pulse_outlines)
                    .after(WorldSet::Sync)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_actor_sprites);
    }
}

/// Sprite entity drawing the actor at this index of [`actor_views`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorSprite(pub usize);

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// The background covers the whole world in every state.
fn spawn_background(mut commands: Commands, config: Res<GameConfig>, asset_server: Res<AssetServer>) {
    let top_left = to_screen(Vec2::ZERO, config.world_size());
    commands.spawn((
        Sprite {
            image: asset_server.load("images/background.png"),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_translation(top_left.extend(BACKGROUND_Z)),
    ));
}

/// Keep one sprite per actor, positioned and animated from the world.
fn sync_actor_sprites(
    mut commands: Commands,
    world: Res<GameWorld>,
    sheets: Res<SpriteSheets>,
    mut sprites: Query<(Entity, &ActorSprite, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let views = actor_views(&world);
    let world_size = world.config().world_size();
    let mut drawn = vec![false; views.len()];

    for (entity, slot, mut transform, mut sprite, mut visibility) in sprites.iter_mut() {
        let Some(view) = views.get(slot.0) else {
            commands.entity(entity).despawn_recursive();
            continue;
        };
        drawn[slot.0] = true;

        transform.translation = to_screen(view.position, world_size).extend(view.kind.z());
        sheets.apply(view.sheet, view.frame, &mut sprite);
        *visibility = if view.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    for (index, view) in views.iter().enumerate() {
        if drawn[index] {
            continue;
        }
        let Some(sprite) = sheets.sprite(view.sheet, view.frame) else {
            warn!("No sprite sheet for {:?}", view.sheet);
            continue;
        };
        commands.spawn((
            ActorSprite(index),
            sprite,
            Transform::from_translation(to_screen(view.position, world_size).extend(view.kind.z())),
        ));
    }
}

/// Outline each actor's pulsing bounding box.
fn draw_pulse_outlines(mut gizmos: Gizmos, world: Res<GameWorld>) {
    let world_size = world.config().world_size();
    for view in actor_views(&world) {
        let center = to_screen(view.outline.center(), world_size);
        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            view.outline.size(),
            view.kind.color(),
        );
    }
}

/// Remove actor sprites when play ends.
fn cleanup_actor_sprites(mut commands: Commands, query: Query<Entity, With<ActorSprite>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
