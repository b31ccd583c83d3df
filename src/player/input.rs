//! Keyboard control of the hero.

use bevy::prelude::*;

use crate::world::{Direction, GameWorld};

/// Arrow keys and the grid direction they request.
const MOVE_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::ArrowUp, Direction::Up),
    (KeyCode::ArrowDown, Direction::Down),
    (KeyCode::ArrowLeft, Direction::Left),
    (KeyCode::ArrowRight, Direction::Right),
];

/// Directions whose key went down this frame.
pub fn pressed_directions(keyboard: &ButtonInput<KeyCode>) -> impl Iterator<Item = Direction> + '_ {
    MOVE_KEYS
        .into_iter()
        .filter(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, direction)| direction)
}

/// Turn key presses into hero moves. The world ignores them outside of play.
pub fn handle_move_input(keyboard: Res<ButtonInput<KeyCode>>, mut world: ResMut<GameWorld>) {
    for direction in pressed_directions(&keyboard) {
        if world.request_hero_move(direction) {
            debug!("Hero heading {:?} to {:?}", direction, world.hero().body.cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fresh_presses_count() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowLeft);
        keyboard.press(KeyCode::KeyW);

        let pressed: Vec<_> = pressed_directions(&keyboard).collect();
        assert_eq!(pressed, vec![Direction::Left]);

        keyboard.clear();
        assert_eq!(pressed_directions(&keyboard).count(), 0);
    }
}
