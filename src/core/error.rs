//! Error types for configuration loading and audio playback.

use thiserror::Error;

/// Errors that can occur when loading the gameplay configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A value parsed fine but makes no sense for the game.
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors reported by an audio backend.
///
/// These never stop the game; callers log them and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No clip with this name was registered.
    #[error("Unknown audio clip '{0}'")]
    UnknownClip(String),
}
