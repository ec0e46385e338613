mod controller;
mod media;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::media::{spawn_audio_thread, AudioSettings, MediaCommand, MediaEvent};
use crate::ui::CharacterApp;

#[derive(Parser, Debug)]
struct Args {
    /// Directory with voice clips (fish.mp3, nyam.mp3, ...); fallback tones
    /// are synthesized for missing clips.
    #[arg(long)]
    assets_dir: Option<std::path::PathBuf>,
    /// Disable audio output entirely.
    #[arg(long)]
    muted: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<MediaCommand>(64);
    let (event_tx, event_rx) = bounded::<MediaEvent>(256);
    spawn_audio_thread(
        AudioSettings {
            assets_dir: args.assets_dir,
            muted: args.muted,
        },
        cmd_rx,
        event_tx,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Мистер Яблочко")
            .with_inner_size([920.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Мистер Яблочко",
        options,
        Box::new(|_cc| Ok(Box::new(CharacterApp::new(cmd_tx, event_rx)))),
    )
}
