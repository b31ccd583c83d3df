//! Audio module - the playback seam and its Kira backend.

mod plugin;
mod service;

pub use plugin::{AudioBridgePlugin, AudioLibrary, MusicChannel};
pub use service::{log_failure, AudioPreferences, AudioRequest, AudioService, Playback};
