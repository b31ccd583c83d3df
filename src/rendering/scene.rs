//! Read-only view of the world for drawing.
//!
//! Nothing here touches Bevy entities; the plugin turns these views into
//! sprites and gizmos.

use bevy::prelude::*;

use crate::core::{AnimationState, Clip};
use crate::world::{GameWorld, GridBody};

/// Blink rate of the hero while invulnerable, in toggles per second.
const BLINK_RATE: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Hero,
    Enemy,
}

impl ActorKind {
    /// Base color of the pulsing outline.
    pub fn color(self) -> Color {
        match self {
            ActorKind::Hero => Color::srgb_u8(80, 200, 150),
            ActorKind::Enemy => Color::srgb_u8(200, 80, 80),
        }
    }

    /// Draw depth. Enemies go under the hero.
    pub fn z(self) -> f32 {
        match self {
            ActorKind::Hero => 2.0,
            ActorKind::Enemy => 1.0,
        }
    }
}

/// One sprite sheet per actor kind and clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    HeroIdle,
    HeroRun,
    EnemyIdle,
    EnemyRun,
}

impl SheetId {
    pub const ALL: [SheetId; 4] = [
        SheetId::HeroIdle,
        SheetId::HeroRun,
        SheetId::EnemyIdle,
        SheetId::EnemyRun,
    ];

    pub fn for_actor(kind: ActorKind, clip: Clip) -> Self {
        match (kind, clip) {
            (ActorKind::Hero, Clip::Idle) => SheetId::HeroIdle,
            (ActorKind::Hero, Clip::Running) => SheetId::HeroRun,
            (ActorKind::Enemy, Clip::Idle) => SheetId::EnemyIdle,
            (ActorKind::Enemy, Clip::Running) => SheetId::EnemyRun,
        }
    }

    /// Image name under `assets/images/`, without extension.
    pub fn image_name(self) -> &'static str {
        match self {
            SheetId::HeroIdle => "stopped",
            SheetId::HeroRun => "rabbit_run",
            SheetId::EnemyIdle => "enemystopped",
            SheetId::EnemyRun => "enemyrun",
        }
    }

    pub fn clip(self) -> Clip {
        match self {
            SheetId::HeroIdle | SheetId::EnemyIdle => Clip::Idle,
            SheetId::HeroRun | SheetId::EnemyRun => Clip::Running,
        }
    }
}

/// Everything needed to draw one actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorView {
    pub kind: ActorKind,
    pub position: Vec2,
    pub sheet: SheetId,
    pub frame: usize,
    /// Pulsed bounding box, world space
    pub outline: Rect,
    pub visible: bool,
}

impl ActorView {
    fn new(kind: ActorKind, body: &GridBody, animation: &AnimationState, visible: bool) -> Self {
        Self {
            kind,
            position: body.position,
            sheet: SheetId::for_actor(kind, animation.clip),
            frame: animation.frame,
            outline: body.pulsed_bounds(),
            visible,
        }
    }
}

/// Actors in draw order: enemies first, the hero last.
pub fn actor_views(world: &GameWorld) -> Vec<ActorView> {
    let hero = world.hero();
    let blink_off = hero.is_invulnerable() && (hero.invulnerability * BLINK_RATE) as u32 % 2 == 1;

    world
        .enemies()
        .iter()
        .map(|enemy| ActorView::new(ActorKind::Enemy, &enemy.body, &enemy.animation, true))
        .chain(std::iter::once(ActorView::new(
            ActorKind::Hero,
            &hero.body,
            &hero.animation,
            !blink_off,
        )))
        .collect()
}

/// World space (top-left origin, y down) to Bevy 2D space (centered, y up).
pub fn to_screen(point: Vec2, world_size: Vec2) -> Vec2 {
    Vec2::new(point.x - world_size.x / 2.0, world_size.y / 2.0 - point.y)
}
