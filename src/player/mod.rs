//! Player module - the hero and its controls.

mod hero;
mod input;
mod plugin;

pub use hero::Hero;
pub use input::pressed_directions;
pub use plugin::PlayerPlugin;
