//! Fire-and-forget clip playback on a dedicated worker thread.
//!
//! The controller's timer logic never depends on playback succeeding: the UI
//! queues a play request and moves on; failures come back as events that only
//! feed the status line and the log.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::controller::events::VoiceClip;

/// Extensions probed for clip files, in order.
const CLIP_EXTENSIONS: [&str; 3] = ["mp3", "ogg", "wav"];
/// Length of the synthesized fallback chirp.
const FALLBACK_TONE_LENGTH: Duration = Duration::from_millis(350);

#[derive(Debug, PartialEq, Eq)]
pub enum MediaCommand {
    /// Start `clip` from time zero.
    Play(VoiceClip),
}

#[derive(Debug, PartialEq, Eq)]
pub enum MediaEvent {
    PlaybackFailed { clip: VoiceClip, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct AudioSettings {
    /// Directory with clip files; fallback tones are synthesized when a clip
    /// is missing or no directory is configured.
    pub assets_dir: Option<PathBuf>,
    /// Skip audio output entirely and only log play requests.
    pub muted: bool,
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("failed to read {path}: {source}")]
    ClipRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    ClipDecode {
        path: String,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Spawns the audio worker. It drains commands until every sender is gone,
/// then exits; pending detached sinks finish on their own.
pub fn spawn_audio_thread(
    settings: AudioSettings,
    cmd_rx: Receiver<MediaCommand>,
    event_tx: Sender<MediaEvent>,
) {
    thread::spawn(move || run(settings, cmd_rx, event_tx));
}

fn run(settings: AudioSettings, cmd_rx: Receiver<MediaCommand>, event_tx: Sender<MediaEvent>) {
    let stream = if settings.muted {
        info!("audio muted; play requests will be logged only");
        None
    } else {
        match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => Some(stream),
            Err(err) => {
                warn!(error = %err, "audio output unavailable; continuing silent");
                None
            }
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            MediaCommand::Play(clip) => {
                let Some(stream) = stream.as_ref() else {
                    debug!(clip = clip.file_stem(), "playback skipped (muted or no device)");
                    continue;
                };
                if let Err(err) = play_clip(stream, settings.assets_dir.as_deref(), clip) {
                    warn!(clip = clip.file_stem(), error = %err, "clip playback failed");
                    let _ = event_tx.send(MediaEvent::PlaybackFailed {
                        clip,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }
    info!("audio worker shutting down");
}

fn play_clip(
    stream: &OutputStream,
    assets_dir: Option<&Path>,
    clip: VoiceClip,
) -> Result<(), PlaybackError> {
    let sink = Sink::connect_new(stream.mixer());
    match find_clip_file(assets_dir, clip) {
        Some(path) => {
            let file = File::open(&path).map_err(|source| PlaybackError::ClipRead {
                path: path.display().to_string(),
                source,
            })?;
            let decoder =
                Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::ClipDecode {
                    path: path.display().to_string(),
                    source,
                })?;
            sink.append(decoder);
        }
        None => {
            debug!(clip = clip.file_stem(), "no clip file found; using fallback tone");
            sink.append(fallback_tone(clip));
        }
    }
    // Fire and forget: the sink keeps playing after we drop the handle.
    sink.detach();
    Ok(())
}

fn find_clip_file(assets_dir: Option<&Path>, clip: VoiceClip) -> Option<PathBuf> {
    let dir = assets_dir?;
    CLIP_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{ext}", clip.file_stem())))
        .find(|path| path.is_file())
}

/// A short per-clip chirp so the character stays audible without asset files.
fn fallback_tone(clip: VoiceClip) -> impl Source + Send + 'static {
    let freq = match clip {
        VoiceClip::Fish => 392.0,
        VoiceClip::Meat => 330.0,
        VoiceClip::Rocket => 523.0,
        VoiceClip::Nyam => 440.0,
        VoiceClip::Congrats => 587.0,
        VoiceClip::Pants => 349.0,
        VoiceClip::Hello => 494.0,
        VoiceClip::Kasha => 415.0,
    };
    SineWave::new(freq)
        .take_duration(FALLBACK_TONE_LENGTH)
        .amplify(0.20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_files_resolve_against_the_assets_dir() {
        let dir = std::env::temp_dir().join("apple-boy-audio-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("fish.wav");
        std::fs::write(&path, b"not really audio").expect("write stub");

        assert_eq!(find_clip_file(Some(&dir), VoiceClip::Fish), Some(path.clone()));
        assert_eq!(find_clip_file(Some(&dir), VoiceClip::Meat), None);
        assert_eq!(find_clip_file(None, VoiceClip::Fish), None);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn preferred_extension_wins_when_several_exist() {
        let dir = std::env::temp_dir().join("apple-boy-audio-ext-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let mp3 = dir.join("nyam.mp3");
        let wav = dir.join("nyam.wav");
        std::fs::write(&mp3, b"a").expect("write stub");
        std::fs::write(&wav, b"b").expect("write stub");

        assert_eq!(find_clip_file(Some(&dir), VoiceClip::Nyam), Some(mp3.clone()));

        std::fs::remove_file(mp3).ok();
        std::fs::remove_file(wav).ok();
    }
}
