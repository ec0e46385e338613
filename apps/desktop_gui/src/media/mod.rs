//! Media layer: the audio worker thread and its command/event queues.

pub mod audio;

pub use audio::{spawn_audio_thread, AudioSettings, MediaCommand, MediaEvent};
