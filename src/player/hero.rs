//! The player-controlled hero.

use crate::core::{AnimationState, FrameTiming, GameConfig};
use crate::world::{Direction, GridBody, GridPos};

/// Hero state: a grid body plus lives and the post-hit invulnerability window.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub body: GridBody,
    pub animation: AnimationState,
    pub lives: u32,
    /// Seconds of invulnerability left
    pub invulnerability: f32,
}

impl Hero {
    pub fn new(body: GridBody, lives: u32) -> Self {
        Self {
            body,
            animation: AnimationState::default(),
            lives,
            invulnerability: 0.0,
        }
    }

    /// Fresh hero at the configured start cell.
    pub fn from_config(config: &GameConfig) -> Self {
        let body = GridBody::from_config(GridPos::from(config.hero_start), config);
        Self::new(body, config.initial_lives)
    }

    pub fn tick(&mut self, dt: f32, timing: &FrameTiming) {
        self.body.tick(dt);
        self.animation.advance(dt, self.body.is_moving(), timing);

        if self.invulnerability > 0.0 {
            self.invulnerability = (self.invulnerability - dt).max(0.0);
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability > 0.0
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Lose a life and become invulnerable for `invulnerability_secs`.
    pub fn take_hit(&mut self, invulnerability_secs: f32) {
        self.lives = self.lives.saturating_sub(1);
        self.invulnerability = invulnerability_secs;
    }

    /// Step one cell in `direction`. Walking into the edge does nothing.
    ///
    /// Returns whether a new destination was set.
    pub fn request_move(&mut self, direction: Direction) -> bool {
        let grid = *self.body.grid();
        let next = grid.clamp(self.body.cell.offset(direction.delta()));
        if next == self.body.cell {
            return false;
        }
        self.body.set_destination(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Clip;
    use bevy::math::Vec2;

    fn hero() -> Hero {
        Hero::from_config(&GameConfig::default())
    }

    #[test]
    fn starts_with_three_lives_at_four_four() {
        let hero = hero();
        assert_eq!(hero.lives, 3);
        assert_eq!(hero.body.cell, GridPos::new(4, 4));
        assert!(!hero.is_invulnerable());
    }

    #[test]
    fn move_right_then_one_second_tick() {
        let mut hero = hero();

        assert!(hero.request_move(Direction::Right));
        assert_eq!(hero.body.cell, GridPos::new(5, 4));
        assert_eq!(hero.body.target, Vec2::new(275.0, 225.0));

        hero.tick(1.0, &FrameTiming::default());

        assert!(hero.body.distance_to_target() < 1e-3);
    }

    #[test]
    fn walls_are_a_no_op() {
        let config = GameConfig {
            hero_start: (0, 11),
            ..Default::default()
        };
        let mut hero = Hero::from_config(&config);

        assert!(!hero.request_move(Direction::Left));
        assert!(!hero.request_move(Direction::Down));
        assert_eq!(hero.body.cell, GridPos::new(0, 11));
        assert!(!hero.body.is_moving());

        assert!(hero.request_move(Direction::Up));
        assert_eq!(hero.body.cell, GridPos::new(0, 10));
    }

    #[test]
    fn repeated_moves_never_leave_the_grid() {
        let mut hero = hero();
        let grid = *hero.body.grid();
        for direction in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
            for _ in 0..30 {
                hero.request_move(direction);
                assert!(grid.contains(hero.body.cell));
            }
        }
    }

    #[test]
    fn invulnerability_lasts_one_point_two_seconds() {
        let mut hero = hero();
        let timing = FrameTiming::default();
        hero.take_hit(1.2);
        assert_eq!(hero.lives, 2);

        for _ in 0..11 {
            hero.tick(0.1, &timing);
            assert!(hero.is_invulnerable());
        }
        hero.tick(0.15, &timing);
        assert!(!hero.is_invulnerable());
        assert_eq!(hero.invulnerability, 0.0);
    }

    #[test]
    fn lives_saturate_at_zero() {
        let mut hero = hero();
        for _ in 0..5 {
            hero.take_hit(1.2);
        }
        assert_eq!(hero.lives, 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn runs_while_travelling_and_idles_on_arrival() {
        let mut hero = hero();
        let timing = FrameTiming::default();

        hero.request_move(Direction::Down);
        hero.tick(0.1, &timing);
        assert_eq!(hero.animation.clip, Clip::Running);

        hero.body.position = hero.body.target;
        hero.tick(0.1, &timing);
        assert_eq!(hero.animation.clip, Clip::Idle);
    }
}
