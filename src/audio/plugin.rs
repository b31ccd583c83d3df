//! Audio plugin - plays queued requests through `bevy_kira_audio`.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioApp, AudioChannel, AudioControl, AudioSource};
use std::collections::HashMap;

use super::service::{log_failure, AudioRequest, AudioService, Playback};
use crate::core::{config::load_game_config, AudioError, GameConfig};
use crate::world::WorldSet;

/// Dedicated channel so stopping music never cuts off sound effects.
#[derive(Resource)]
pub struct MusicChannel;

/// Loaded clips, looked up by the names the simulation uses.
#[derive(Resource, Default)]
pub struct AudioLibrary {
    tracks: HashMap<String, Handle<AudioSource>>,
    sounds: HashMap<String, Handle<AudioSource>>,
}

impl AudioLibrary {
    pub fn insert_track(&mut self, name: impl Into<String>, handle: Handle<AudioSource>) {
        self.tracks.insert(name.into(), handle);
    }

    pub fn insert_sound(&mut self, name: impl Into<String>, handle: Handle<AudioSource>) {
        self.sounds.insert(name.into(), handle);
    }

    pub fn track(&self, name: &str) -> Result<Handle<AudioSource>, AudioError> {
        self.tracks
            .get(name)
            .cloned()
            .ok_or_else(|| AudioError::UnknownClip(name.to_string()))
    }

    pub fn sound(&self, name: &str) -> Result<Handle<AudioSource>, AudioError> {
        self.sounds
            .get(name)
            .cloned()
            .ok_or_else(|| AudioError::UnknownClip(name.to_string()))
    }
}

/// Audio plugin - loads clips and services [`AudioRequest`]s.
pub struct AudioBridgePlugin;

impl Plugin for AudioBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<MusicChannel>()
            .init_resource::<AudioLibrary>()
            .add_systems(Startup, load_audio_library.after(load_game_config))
            .add_systems(Update, play_audio_requests.after(WorldSet::Tick));
    }
}

/// Queue the configured music track and hit sound for loading.
fn load_audio_library(
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut library: ResMut<AudioLibrary>,
) {
    let track = &config.music_track;
    library.insert_track(
        track.clone(),
        asset_server.load::<AudioSource>(format!("music/{track}.ogg")),
    );

    let sound = &config.hit_sound;
    library.insert_sound(
        sound.clone(),
        asset_server.load::<AudioSource>(format!("sounds/{sound}.wav")),
    );

    info!("Loading audio: track '{}', sound '{}'", track, sound);
}

/// Start `handle` on `channel` in the given mode.
fn start<C: AudioControl>(channel: &C, handle: Handle<AudioSource>, playback: Playback) {
    let mut command = channel.play(handle);
    if playback == Playback::Looped {
        command.looped();
    }
}

/// Kira-backed playback for a single system run.
struct KiraPlayer<'a> {
    library: &'a AudioLibrary,
    music: &'a AudioChannel<MusicChannel>,
    effects: &'a Audio,
}

impl AudioService for KiraPlayer<'_> {
    fn play_track(&mut self, name: &str) -> Result<(), AudioError> {
        let handle = self.library.track(name)?;
        self.music.stop();
        start(self.music, handle, Playback::MUSIC);
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        self.music.stop();
        Ok(())
    }

    fn play_sound(&mut self, name: &str) -> Result<(), AudioError> {
        let handle = self.library.sound(name)?;
        start(self.effects, handle, Playback::EFFECT);
        Ok(())
    }
}

/// Drain the request queue into the audio backend.
fn play_audio_requests(
    mut requests: EventReader<AudioRequest>,
    library: Res<AudioLibrary>,
    music: Res<AudioChannel<MusicChannel>>,
    effects: Res<Audio>,
) {
    let mut player = KiraPlayer {
        library: &library,
        music: &music,
        effects: &effects,
    };

    for request in requests.read() {
        let result = match request {
            AudioRequest::PlayTrack(name) => player.play_track(name),
            AudioRequest::StopMusic => player.stop_music(),
            AudioRequest::PlaySound(name) => player.play_sound(name),
        };
        log_failure(result, &format!("{request:?}"));
    }
}
