//! Command orchestration helpers from UI actions to the audio worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::media::MediaCommand;

pub fn dispatch_media_command(cmd_tx: &Sender<MediaCommand>, cmd: MediaCommand, status: &mut String) {
    let cmd_name = match &cmd {
        MediaCommand::Play(_) => "play_clip",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->media command"),
        Err(TrySendError::Full(_)) => {
            *status = "Audio queue is full; clip dropped".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Audio worker disconnected; sound is unavailable".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::VoiceClip;
    use crossbeam_channel::bounded;

    #[test]
    fn queued_commands_leave_the_status_untouched() {
        let (tx, rx) = bounded(4);
        let mut status = String::new();
        dispatch_media_command(&tx, MediaCommand::Play(VoiceClip::Fish), &mut status);
        assert!(status.is_empty());
        assert!(matches!(rx.try_recv(), Ok(MediaCommand::Play(VoiceClip::Fish))));
    }

    #[test]
    fn a_full_queue_drops_the_clip_with_a_status_note() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_media_command(&tx, MediaCommand::Play(VoiceClip::Fish), &mut status);
        dispatch_media_command(&tx, MediaCommand::Play(VoiceClip::Meat), &mut status);
        assert!(status.contains("full"));
    }

    #[test]
    fn a_disconnected_worker_is_reported() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        dispatch_media_command(&tx, MediaCommand::Play(VoiceClip::Hello), &mut status);
        assert!(status.contains("disconnected"));
    }
}
