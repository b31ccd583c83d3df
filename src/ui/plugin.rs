//! UI plugin - menus, HUD, and interface elements.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::buttons::ButtonRegistry;
use super::hud;
use crate::core::{
    config::load_game_config, GameConfig, GameOverEvent, GameState, MenuAction, MenuCommand,
};
use crate::world::{GameWorld, WorldSet};

const BUTTON_COLOR: Color = Color::srgb(50.0 / 255.0, 50.0 / 255.0, 90.0 / 255.0);
const BUTTON_HOVER_COLOR: Color = Color::srgb(80.0 / 255.0, 80.0 / 255.0, 130.0 / 255.0);

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        // The menu is only shown at boot. The initial OnEnter(Menu) runs
        // before Startup, when the config is not loaded yet.
        app.add_systems(Startup, setup_main_menu.after(load_game_config))
            .add_systems(
                Update,
                (highlight_hovered_button, main_menu_click)
                    .chain()
                    .before(WorldSet::Input)
                    .run_if(in_state(GameState::Menu)),
            )
            .add_systems(OnExit(GameState::Menu), cleanup_main_menu)

            // Game over
            .add_systems(Update, setup_game_over.run_if(on_event::<GameOverEvent>));
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// Links a button node to its action.
#[derive(Component)]
struct MenuButtonUi(MenuAction);

/// Set up the main menu and the registry its clicks are tested against.
fn setup_main_menu(mut commands: Commands, config: Res<GameConfig>) {
    let registry = ButtonRegistry::main_menu(config.world_width);

    // Title, centered on y = 140
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                top: Val::Px(105.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            MainMenuUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Mini Roguelike"),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });

    // Buttons sit exactly on their hit-test rectangles
    for button in registry.buttons() {
        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(button.rect.min.x),
                    top: Val::Px(button.rect.min.y),
                    width: Val::Px(button.rect.width()),
                    height: Val::Px(button.rect.height()),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(BUTTON_COLOR),
                MenuButtonUi(button.action),
                MainMenuUi,
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(button.label),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });
    }

    commands.insert_resource(registry);
}

/// Cursor position in world space, if it is inside the window.
fn cursor_position(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Vec2> {
    windows.get_single().ok()?.cursor_position()
}

/// Tint the button under the cursor.
fn highlight_hovered_button(
    windows: Query<&Window, With<PrimaryWindow>>,
    registry: Res<ButtonRegistry>,
    mut buttons: Query<(&MenuButtonUi, &mut BackgroundColor)>,
) {
    let hovered = cursor_position(&windows)
        .and_then(|point| registry.hit(point))
        .map(|button| button.action);

    for (button, mut color) in buttons.iter_mut() {
        let wanted = if hovered == Some(button.0) {
            BUTTON_HOVER_COLOR
        } else {
            BUTTON_COLOR
        };
        if color.0 != wanted {
            color.0 = wanted;
        }
    }
}

/// Hit-test left clicks against the registry and forward the action.
fn main_menu_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    registry: Res<ButtonRegistry>,
    world: Res<GameWorld>,
    mut menu_commands: EventWriter<MenuCommand>,
) {
    if !mouse.just_pressed(MouseButton::Left) || world.state() != GameState::Menu {
        return;
    }
    let Some(point) = cursor_position(&windows) else {
        return;
    };
    if let Some(button) = registry.hit(point) {
        info!("Clicked '{}'", button.label);
        menu_commands.send(MenuCommand(button.action));
    }
}

/// Clean up main menu entities.
fn cleanup_main_menu(mut commands: Commands, ui_query: Query<Entity, With<MainMenuUi>>) {
    for entity in ui_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Show the game over banner when the last life is lost.
fn setup_game_over(mut commands: Commands) {
    info!("Showing game over screen");
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            GameOverUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 70.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_nodes_sit_on_their_click_rects() {
        let mut app = App::new();
        app.insert_resource(GameConfig {
            world_width: 1000.0,
            ..default()
        })
        .add_systems(Update, setup_main_menu);
        app.update();

        let expected = ButtonRegistry::main_menu(1000.0);
        assert_eq!(
            app.world().resource::<ButtonRegistry>().buttons(),
            expected.buttons()
        );

        let mut nodes = app.world_mut().query::<(&MenuButtonUi, &Node)>();
        let mut seen = 0;
        for (button, node) in nodes.iter(app.world()) {
            let rect = expected
                .buttons()
                .iter()
                .find(|b| b.action == button.0)
                .map(|b| b.rect)
                .unwrap();
            assert_eq!(node.left, Val::Px(rect.min.x));
            assert_eq!(node.top, Val::Px(rect.min.y));
            seen += 1;
        }
        assert_eq!(seen, 4);
        assert_eq!(expected.buttons()[0].rect.min.x, 380.0);
    }

    #[test]
    fn game_over_banner_follows_the_event() {
        let mut app = App::new();
        app.add_event::<GameOverEvent>()
            .add_systems(Update, setup_game_over.run_if(on_event::<GameOverEvent>));

        app.update();
        let mut banners = app.world_mut().query_filtered::<Entity, With<GameOverUi>>();
        assert_eq!(banners.iter(app.world()).count(), 0);

        app.world_mut().send_event(GameOverEvent);
        app.update();
        app.update();
        assert_eq!(banners.iter(app.world()).count(), 1);
    }
}
