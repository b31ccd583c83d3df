//! Rendering module - turns the simulation into sprites and gizmos.

mod plugin;
pub mod scene;
mod sprites;

pub use plugin::{ActorSprite, RenderingPlugin};
pub use scene::{actor_views, to_screen, ActorKind, ActorView, SheetId};
pub use sprites::SpriteSheets;
