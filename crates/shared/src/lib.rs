//! Shared contract types between the character scene and its host shells.

pub mod domain;

pub use domain::{CharacterPose, SpoonPhase, DEFAULT_SPEECH_TEXT};
