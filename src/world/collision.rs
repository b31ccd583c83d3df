//! Hero-versus-enemy contact detection and damage.

use bevy::prelude::*;

use crate::enemies::Enemy;
use crate::player::Hero;

/// Strict axis-aligned overlap: boxes that only share an edge do not touch.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Apply contact damage from every enemy touching the hero.
///
/// Invulnerability is re-checked per enemy, so the first hit shields the
/// hero from the rest of the pass. Returns the number of hits landed.
pub fn resolve_contacts(hero: &mut Hero, enemies: &[Enemy], invulnerability_secs: f32) -> u32 {
    let mut hits = 0;
    for enemy in enemies {
        if !overlaps(hero.body.bounds(), enemy.body.bounds()) {
            continue;
        }
        if hero.is_invulnerable() || !hero.is_alive() {
            continue;
        }
        hero.take_hit(invulnerability_secs);
        hits += 1;
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::world::GridPos;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup(enemy_cells: &[(i32, i32)]) -> (Hero, Vec<Enemy>) {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let hero = Hero::from_config(&config);
        let enemies = enemy_cells
            .iter()
            .map(|&cell| Enemy::from_config(GridPos::from(cell), &config, &mut rng))
            .collect();
        (hero, enemies)
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        let b = Rect::new(30.0, 0.0, 60.0, 30.0);
        assert!(!overlaps(a, b));
        assert!(overlaps(a, Rect::new(29.0, 29.0, 59.0, 59.0)));
    }

    #[test]
    fn separated_on_one_axis_is_enough() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        assert!(!overlaps(a, Rect::new(10.0, 40.0, 20.0, 50.0)));
        assert!(!overlaps(a, Rect::new(-50.0, 10.0, -20.0, 20.0)));
    }

    #[test]
    fn adjacent_cells_never_collide() {
        let (mut hero, enemies) = setup(&[(5, 4), (3, 4), (4, 5), (4, 3)]);
        assert_eq!(resolve_contacts(&mut hero, &enemies, 1.2), 0);
        assert_eq!(hero.lives, 3);
    }

    #[test]
    fn several_overlapping_enemies_cost_one_life() {
        let (mut hero, enemies) = setup(&[(4, 4), (4, 4), (4, 4)]);

        assert_eq!(resolve_contacts(&mut hero, &enemies, 1.2), 1);
        assert_eq!(hero.lives, 2);
        assert_eq!(hero.invulnerability, 1.2);
    }

    #[test]
    fn invulnerable_hero_takes_no_damage() {
        let (mut hero, enemies) = setup(&[(4, 4)]);
        hero.invulnerability = 0.3;

        assert_eq!(resolve_contacts(&mut hero, &enemies, 1.2), 0);
        assert_eq!(hero.lives, 3);
    }

    #[test]
    fn lives_do_not_go_negative() {
        let (mut hero, enemies) = setup(&[(4, 4)]);
        hero.lives = 0;

        assert_eq!(resolve_contacts(&mut hero, &enemies, 1.2), 0);
        assert_eq!(hero.lives, 0);
    }
}
