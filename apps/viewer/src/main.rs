//! Standalone pose viewer: loads one pose snapshot and renders the scene.
//!
//! The contract between this shell and the scene is exactly the pose fields;
//! no audio, no timers, no controller.

use anyhow::{Context as _, Result};
use clap::Parser;
use eframe::egui;
use scene::CharacterScene;
use shared::CharacterPose;

#[derive(Parser, Debug)]
struct Args {
    /// Inline JSON pose snapshot, e.g. '{"sleeping":true,"spoon":"mouth"}'.
    #[arg(long, conflicts_with = "pose_file")]
    pose: Option<String>,
    /// Path to a JSON pose snapshot file.
    #[arg(long)]
    pose_file: Option<std::path::PathBuf>,
}

fn load_pose(args: &Args) -> Result<CharacterPose> {
    if let Some(json) = &args.pose {
        return serde_json::from_str(json).context("invalid --pose JSON");
    }
    if let Some(path) = &args.pose_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return serde_json::from_str(&text).context("invalid pose file JSON");
    }
    Ok(CharacterPose::default())
}

struct ViewerApp {
    pose: CharacterPose,
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Character scene viewer");
                ui.label("Standalone shell around the reusable character scene.");
            });
            ui.add(CharacterScene::new(&self.pose));
        });
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();
    let pose = load_pose(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Character Scene Viewer")
            .with_inner_size([760.0, 440.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Character Scene Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp { pose }))),
    )
    .map_err(|err| anyhow::anyhow!("eframe: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SpoonPhase;

    #[test]
    fn no_arguments_means_the_idle_pose() {
        let args = Args {
            pose: None,
            pose_file: None,
        };
        assert_eq!(load_pose(&args).expect("default"), CharacterPose::default());
    }

    #[test]
    fn inline_pose_json_is_honored() {
        let args = Args {
            pose: Some(r#"{"speaking":true,"speech_text":"НЯМ!","spoon":"eating"}"#.to_owned()),
            pose_file: None,
        };
        let pose = load_pose(&args).expect("inline pose");
        assert!(pose.speaking);
        assert_eq!(pose.speech_text, "НЯМ!");
        assert_eq!(pose.spoon, SpoonPhase::Eating);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let args = Args {
            pose: Some("{not json".to_owned()),
            pose_file: None,
        };
        assert!(load_pose(&args).is_err());
    }
}
