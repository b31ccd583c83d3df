//! Core game module - states, events, configuration and shared building blocks.
//!
//! This module provides the foundation that all other game systems build upon.

pub mod animation;
pub mod animator;
pub mod config;
mod error;
mod events;
mod plugin;
mod rng;
mod states;

pub use animation::{AnimationState, Clip, FrameTiming};
pub use animator::Animator;
pub use config::GameConfig;
pub use error::{AudioError, ConfigError};
pub use events::*;
pub use plugin::CorePlugin;
pub use rng::SimRng;
pub use states::*;
