mod common;

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;
use mini_roguelike::audio::AudioRequest;
use mini_roguelike::core::{GameConfig, GameOverEvent, GameState, HeroHitEvent, MenuAction};
use mini_roguelike::enemies::EnemyRoster;
use mini_roguelike::world::{GameWorld, GridPos};
use std::time::Duration;

fn bevy_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn world(app: &App) -> &GameWorld {
    app.world().resource::<GameWorld>()
}

#[test]
fn boots_into_the_menu() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(bevy_state(&app), GameState::Menu);
    assert_eq!(world(&app).state(), GameState::Menu);
    assert!(world(&app).enemies().is_empty());
}

#[test]
fn start_command_begins_play() {
    let mut app = common::app_headless();
    app.update();

    common::click(&mut app, MenuAction::StartGame);
    assert_eq!(world(&app).state(), GameState::Playing);
    assert_eq!(world(&app).enemies().len(), 5);
    assert_eq!(world(&app).hero().lives, 3);

    // Bevy's state catches up on the next frame.
    app.update();
    assert_eq!(bevy_state(&app), GameState::Playing);
}

#[test]
fn start_requests_the_music_track() {
    let mut app = common::app_headless();
    app.update();

    common::click(&mut app, MenuAction::StartGame);

    let events = app.world().resource::<Events<AudioRequest>>();
    let requests: Vec<_> = events.iter_current_update_events().cloned().collect();
    assert!(requests.contains(&AudioRequest::PlayTrack("time_for_adventure".to_string())));
}

#[test]
fn arrow_keys_move_the_hero_during_play() {
    let mut app = common::app_headless();
    app.update();

    // Ignored in the menu.
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    app.update();
    assert_eq!(world(&app).hero().body.cell, GridPos::new(4, 4));
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().reset_all();

    common::click(&mut app, MenuAction::StartGame);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().reset_all();

    assert_eq!(world(&app).hero().body.cell, GridPos::new(5, 4));
}

#[test]
fn toggles_work_from_the_menu() {
    let mut app = common::app_headless();
    app.update();

    common::click(&mut app, MenuAction::ToggleMusic);
    common::click(&mut app, MenuAction::ToggleSound);

    let preferences = world(&app).preferences();
    assert!(!preferences.music_on);
    assert!(!preferences.sound_on);
    assert_eq!(world(&app).state(), GameState::Menu);
}

#[test]
fn exit_command_requests_app_exit() {
    let mut app = common::app_headless();
    app.update();

    common::click(&mut app, MenuAction::Exit);

    assert_eq!(app.should_exit(), Some(AppExit::Success));
}

#[test]
fn play_keeps_everything_on_the_grid() {
    let mut app = common::app_headless();
    app.update();
    common::click(&mut app, MenuAction::StartGame);

    for _ in 0..50 {
        app.update();
    }

    let world = world(&app);
    let columns = world.config().columns();
    let rows = world.config().rows();
    let on_grid = |cell: GridPos| (0..columns).contains(&cell.x) && (0..rows).contains(&cell.y);

    assert!(on_grid(world.hero().body.cell));
    assert!(world.enemies().iter().all(|e| on_grid(e.body.cell)));
    assert!(world.hero().lives <= 3);
}

/// Events of type `E` sent since `cursor` last read.
fn drain<E: Event>(app: &App, cursor: &mut EventCursor<E>) -> usize {
    cursor.read(app.world().resource::<Events<E>>()).count()
}

#[test]
fn last_life_lost_ends_the_game_once() {
    let mut app = common::app_headless();
    app.update();

    // A single cell: the only enemy spawns on top of the hero.
    let cramped = GameConfig {
        world_width: 50.0,
        world_height: 50.0,
        hero_start: (0, 0),
        enemy_count: 1,
        initial_lives: 1,
        ..default()
    };
    app.insert_resource(GameWorld::try_new(cramped).unwrap());
    let mut hit_cursor = EventCursor::<HeroHitEvent>::default();
    let mut game_over_cursor = EventCursor::<GameOverEvent>::default();

    common::click(&mut app, MenuAction::StartGame);
    let mut hits = drain(&app, &mut hit_cursor);
    let mut game_overs = drain(&app, &mut game_over_cursor);

    assert_eq!(world(&app).hero().lives, 0);
    assert_eq!(world(&app).state(), GameState::GameOver);

    for _ in 0..5 {
        app.update();
        hits += drain(&app, &mut hit_cursor);
        game_overs += drain(&app, &mut game_over_cursor);
    }

    assert_eq!(hits, 1);
    assert_eq!(game_overs, 1);
    assert_eq!(bevy_state(&app), GameState::GameOver);
    assert_eq!(world(&app).hero().lives, 0);
}

#[test]
fn enemy_roster_follows_the_wandering() {
    let mut app = common::app_headless();
    app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
        Duration::from_millis(100),
    ));
    app.update();
    common::click(&mut app, MenuAction::StartGame);

    for _ in 0..40 {
        app.update();
    }

    let roster = app.world().resource::<EnemyRoster>();
    let cells: Vec<GridPos> = world(&app).enemies().iter().map(|e| e.body.cell).collect();
    assert_eq!(roster.cells(), cells.as_slice());
    assert!(roster.steps() > 0);
}
