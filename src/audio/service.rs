//! The audio seam between the simulation and the playback backend.
//!
//! The simulation only asks for tracks and sounds by name. Requests are
//! best-effort: a failure is logged by the caller and the game carries on.

use bevy::prelude::*;

use crate::core::AudioError;

/// Anything that can play music and sound effects by name.
pub trait AudioService {
    fn play_track(&mut self, name: &str) -> Result<(), AudioError>;
    fn stop_music(&mut self) -> Result<(), AudioError>;
    fn play_sound(&mut self, name: &str) -> Result<(), AudioError>;
}

/// A queued playback request, handled by the audio plugin.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum AudioRequest {
    PlayTrack(String),
    StopMusic,
    PlaySound(String),
}

/// How a clip is played once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Once,
    /// Restarts from the beginning until stopped
    Looped,
}

impl Playback {
    pub const MUSIC: Playback = Playback::Looped;
    pub const EFFECT: Playback = Playback::Once;
}

impl AudioRequest {
    /// Music loops forever, effects play once. `None` for requests that
    /// start nothing.
    pub fn playback(&self) -> Option<Playback> {
        match self {
            AudioRequest::PlayTrack(_) => Some(Playback::MUSIC),
            AudioRequest::PlaySound(_) => Some(Playback::EFFECT),
            AudioRequest::StopMusic => None,
        }
    }
}

/// Systems hand their event writer to the simulation as its audio service.
impl AudioService for EventWriter<'_, AudioRequest> {
    fn play_track(&mut self, name: &str) -> Result<(), AudioError> {
        self.send(AudioRequest::PlayTrack(name.to_string()));
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        self.send(AudioRequest::StopMusic);
        Ok(())
    }

    fn play_sound(&mut self, name: &str) -> Result<(), AudioError> {
        self.send(AudioRequest::PlaySound(name.to_string()));
        Ok(())
    }
}

/// Player-facing audio switches, flipped from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioPreferences {
    pub music_on: bool,
    pub sound_on: bool,
}

impl Default for AudioPreferences {
    fn default() -> Self {
        Self {
            music_on: true,
            sound_on: true,
        }
    }
}

/// Log a failed request instead of propagating it.
pub fn log_failure(result: Result<(), AudioError>, action: &str) {
    if let Err(e) = result {
        warn!("Audio request '{}' failed: {}", action, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_loops_and_effects_play_once() {
        let track = AudioRequest::PlayTrack("time_for_adventure".to_string());
        let sound = AudioRequest::PlaySound("kick".to_string());

        assert_eq!(track.playback(), Some(Playback::Looped));
        assert_eq!(sound.playback(), Some(Playback::Once));
        assert_eq!(AudioRequest::StopMusic.playback(), None);
    }
}
