//! The simulation root: owns the hero, the enemies and the game state.
//!
//! Everything that changes during play goes through [`GameWorld`]. Bevy
//! systems feed it input and elapsed time and read it back for drawing.

use bevy::prelude::*;
use rand::Rng;

use super::collision::resolve_contacts;
use super::grid::{Direction, GridBounds};
use crate::audio::{log_failure, AudioPreferences, AudioService};
use crate::core::{ConfigError, FrameTiming, GameConfig, GameState, MenuAction};
use crate::enemies::{random_cell, Enemy};
use crate::player::Hero;

/// What happened during one simulation tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Hits the hero took this tick (0 or 1 in practice)
    pub hits: u32,
    pub lives_left: u32,
    /// The tick that ended the game
    pub game_over: bool,
}

/// What the shell should do after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResponse {
    Continue,
    Exit,
}

/// Owned simulation state.
#[derive(Resource, Debug, Clone)]
pub struct GameWorld {
    config: GameConfig,
    timing: FrameTiming,
    state: GameState,
    hero: Hero,
    enemies: Vec<Enemy>,
    preferences: AudioPreferences,
}

impl GameWorld {
    /// A world sitting in the menu, with no enemies yet.
    ///
    /// `config` must pass [`GameConfig::validate`]; a grid with no cells
    /// makes [`GameWorld::start`] panic. Use [`GameWorld::try_new`] for
    /// configs that have not been checked.
    pub fn new(config: GameConfig) -> Self {
        Self {
            timing: config.frame_timing(),
            hero: Hero::from_config(&config),
            enemies: Vec::new(),
            state: GameState::Menu,
            preferences: AudioPreferences::default(),
            config,
        }
    }

    /// Validate `config`, then build the world.
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn preferences(&self) -> AudioPreferences {
        self.preferences
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame_timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Fresh hero and enemies, then straight into play.
    pub fn start<R, A>(&mut self, rng: &mut R, audio: &mut A)
    where
        R: Rng + ?Sized,
        A: AudioService + ?Sized,
    {
        let grid = GridBounds::from_config(&self.config);

        self.hero = Hero::from_config(&self.config);
        self.enemies = (0..self.config.enemy_count)
            .map(|_| {
                let cell = random_cell(rng, &grid);
                Enemy::from_config(cell, &self.config, rng)
            })
            .collect();
        self.state = GameState::Playing;

        info!(
            "Game started: {} lives, {} enemies",
            self.hero.lives,
            self.enemies.len()
        );

        if self.preferences.music_on {
            log_failure(audio.play_track(&self.config.music_track), "play music");
        }
    }

    /// Advance the simulation by `dt` seconds. Does nothing outside of play.
    pub fn tick<R, A>(&mut self, dt: f32, rng: &mut R, audio: &mut A) -> TickOutcome
    where
        R: Rng + ?Sized,
        A: AudioService + ?Sized,
    {
        if self.state != GameState::Playing {
            return TickOutcome {
                lives_left: self.hero.lives,
                ..default()
            };
        }

        self.hero.tick(dt, &self.timing);
        for enemy in &mut self.enemies {
            enemy.tick(dt, &self.timing, rng);
        }

        let hits = resolve_contacts(&mut self.hero, &self.enemies, self.config.invulnerability_secs);
        if hits > 0 {
            info!("Hero hit! {} lives left", self.hero.lives);
            if self.preferences.sound_on {
                for _ in 0..hits {
                    log_failure(audio.play_sound(&self.config.hit_sound), "play hit sound");
                }
            }
        }

        let game_over = hits > 0 && !self.hero.is_alive();
        if game_over {
            info!("Hero is out of lives. Game over.");
            self.state = GameState::GameOver;
        }

        TickOutcome {
            hits,
            lives_left: self.hero.lives,
            game_over,
        }
    }

    /// Directional input. Only honoured while playing.
    pub fn request_hero_move(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.hero.request_move(direction)
    }

    /// Flip the music switch. Turning it off stops the current track.
    pub fn toggle_music<A: AudioService + ?Sized>(&mut self, audio: &mut A) {
        self.preferences.music_on = !self.preferences.music_on;
        info!("Music {}", if self.preferences.music_on { "on" } else { "off" });
        if !self.preferences.music_on {
            log_failure(audio.stop_music(), "stop music");
        }
    }

    /// Flip the sound effect switch.
    pub fn toggle_sound(&mut self) {
        self.preferences.sound_on = !self.preferences.sound_on;
        info!("Sound {}", if self.preferences.sound_on { "on" } else { "off" });
    }

    /// Run a menu action.
    pub fn apply_menu_action<R, A>(&mut self, action: MenuAction, rng: &mut R, audio: &mut A) -> MenuResponse
    where
        R: Rng + ?Sized,
        A: AudioService + ?Sized,
    {
        match action {
            MenuAction::StartGame => self.start(rng, audio),
            MenuAction::ToggleMusic => self.toggle_music(audio),
            MenuAction::ToggleSound => self.toggle_sound(),
            MenuAction::Exit => return MenuResponse::Exit,
        }
        MenuResponse::Continue
    }
}
