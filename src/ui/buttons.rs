//! Menu button registry and hit testing.
//!
//! Rectangles are in world space, which matches window cursor coordinates.

use bevy::prelude::*;

use crate::core::MenuAction;

const BUTTON_WIDTH: f32 = 240.0;
const BUTTON_HEIGHT: f32 = 50.0;
/// Top edge of the first button.
const FIRST_ROW: f32 = 250.0;
/// Distance between the top edges of consecutive buttons.
const ROW_STRIDE: f32 = 70.0;

/// A clickable rectangle with a label.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    pub rect: Rect,
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuButton {
    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.rect.min.x
            && point.x < self.rect.max.x
            && point.y >= self.rect.min.y
            && point.y < self.rect.max.y
    }
}

/// The main menu buttons, built once and read-only afterwards.
#[derive(Resource, Debug, Clone)]
pub struct ButtonRegistry {
    buttons: Vec<MenuButton>,
}

impl Default for ButtonRegistry {
    fn default() -> Self {
        Self::main_menu(crate::core::GameConfig::default().world_width)
    }
}

impl ButtonRegistry {
    /// Start, music, sound and exit, stacked in the horizontal center.
    pub fn main_menu(world_width: f32) -> Self {
        let left = (world_width / 2.0).floor() - BUTTON_WIDTH / 2.0;
        let entries = [
            ("Start Game", MenuAction::StartGame),
            ("Music On/Off", MenuAction::ToggleMusic),
            ("Sound On/Off", MenuAction::ToggleSound),
            ("Exit", MenuAction::Exit),
        ];

        let buttons = entries
            .into_iter()
            .enumerate()
            .map(|(row, (label, action))| {
                let top = FIRST_ROW + row as f32 * ROW_STRIDE;
                MenuButton {
                    rect: Rect::new(left, top, left + BUTTON_WIDTH, top + BUTTON_HEIGHT),
                    label,
                    action,
                }
            })
            .collect();

        Self { buttons }
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    /// The button under `point`, if any.
    pub fn hit(&self, point: Vec2) -> Option<&MenuButton> {
        self.buttons.iter().find(|button| button.contains(point))
    }
}
