//! UI module - menu, HUD and game over screen.

pub mod buttons;
mod hud;
mod plugin;

pub use buttons::{ButtonRegistry, MenuButton};
pub use plugin::UiPlugin;
