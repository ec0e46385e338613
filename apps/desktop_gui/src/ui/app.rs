//! Host application shell: input capture, pose updates, scene and buttons.

use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Color32, CornerRadius, Key, Modifiers, RichText};
use scene::CharacterScene;

use crate::controller::events::{ControlEvent, VoiceClip};
use crate::controller::orchestration::dispatch_media_command;
use crate::controller::reducer::CharacterController;
use crate::media::{MediaCommand, MediaEvent};

pub struct CharacterApp {
    controller: CharacterController,
    cmd_tx: Sender<MediaCommand>,
    event_rx: Receiver<MediaEvent>,
    status: String,
}

impl CharacterApp {
    pub fn new(cmd_tx: Sender<MediaCommand>, event_rx: Receiver<MediaEvent>) -> Self {
        Self {
            controller: CharacterController::new(),
            cmd_tx,
            event_rx,
            status: String::new(),
        }
    }

    fn drain_media_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                MediaEvent::PlaybackFailed { clip, reason } => {
                    // The visual/timer sequence keeps running; only the status
                    // line learns about the missing sound.
                    self.status = format!("Клип «{}» без звука: {reason}", clip.caption());
                }
            }
        }
    }

    /// Collects the handled keys, consuming them so nothing else reacts.
    fn keyboard_events(ctx: &egui::Context) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        ctx.input_mut(|input| {
            if input.consume_key(Modifiers::NONE, Key::ArrowLeft) {
                events.push(ControlEvent::StepLeft);
            }
            if input.consume_key(Modifiers::NONE, Key::ArrowRight) {
                events.push(ControlEvent::StepRight);
            }
            if input.consume_key(Modifiers::NONE, Key::ArrowUp) {
                events.push(ControlEvent::Tilt);
            }
            if input.consume_key(Modifiers::NONE, Key::ArrowDown) {
                events.push(ControlEvent::Nap);
            }
            if input.consume_key(Modifiers::NONE, Key::Space) {
                events.push(ControlEvent::Blink);
            }
        });
        events
    }

    fn apply(&mut self, event: ControlEvent, now: Instant) {
        if let Some(clip) = self.controller.handle(event, now) {
            dispatch_media_command(&self.cmd_tx, MediaCommand::Play(clip), &mut self.status);
        }
    }

    fn sound_buttons(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal_wrapped(|ui| {
            for clip in VoiceClip::ALL {
                let button = egui::Button::new(
                    RichText::new(clip.caption()).strong().color(Color32::WHITE),
                )
                .fill(clip_button_fill(clip))
                .corner_radius(CornerRadius::same(5));
                if ui.add(button).clicked() {
                    self.apply(ControlEvent::Voice(clip), now);
                }
            }
        });
    }
}

fn clip_button_fill(clip: VoiceClip) -> Color32 {
    match clip {
        VoiceClip::Fish => Color32::from_rgb(0x4C, 0xAF, 0x50),
        VoiceClip::Meat => Color32::from_rgb(0xFF, 0x57, 0x22),
        VoiceClip::Rocket => Color32::from_rgb(0x21, 0x96, 0xF3),
        VoiceClip::Nyam => Color32::from_rgb(0xFF, 0x98, 0x00),
        _ => Color32::from_rgb(0x9C, 0x27, 0xB0),
    }
}

impl eframe::App for CharacterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.drain_media_events();
        for event in Self::keyboard_events(ctx) {
            self.apply(event, now);
        }
        self.controller.tick(now);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading("🚀 Мистер Яблочко"));
        });
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            self.sound_buttons(ui, now);
            if !self.status.is_empty() {
                ui.label(RichText::new(self.status.as_str()).weak());
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(CharacterScene::new(self.controller.pose()));
        });

        if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_buttons_have_distinct_fills() {
        let featured = [VoiceClip::Fish, VoiceClip::Meat, VoiceClip::Rocket, VoiceClip::Nyam];
        for a in featured {
            for b in featured {
                if a != b {
                    assert_ne!(clip_button_fill(a), clip_button_fill(b));
                }
            }
        }
    }

    #[test]
    fn remaining_buttons_share_the_accent_fill() {
        assert_eq!(
            clip_button_fill(VoiceClip::Congrats),
            clip_button_fill(VoiceClip::Hello)
        );
        assert_eq!(
            clip_button_fill(VoiceClip::Pants),
            clip_button_fill(VoiceClip::Kasha)
        );
    }
}
