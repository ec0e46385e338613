//! Reusable character scene: a pure scene composer plus an egui widget wrapper.
//!
//! Hosts own all state and timing; this crate turns one [`CharacterPose`]
//! snapshot into paint-ready shapes and text labels. Same pose in, same scene
//! out — the composer keeps no memory between calls. Smoothing of the body and
//! spoon transforms lives only in the widget wrapper, so hosts that want raw
//! snapshots can call [`compose`] directly.

mod character;
mod palette;
mod path;
mod plate;
mod widget;

use egui::{Color32, Pos2, Rect, Shape, Vec2};
use shared::{CharacterPose, SpoonPhase};

use crate::path::Placement;

pub use widget::CharacterScene;

/// Scene-local content box: character art spans x 0-200, a 50 px gap, the
/// plate art x 250-450; the feet overhang the 200 px art height slightly.
pub const SCENE_SIZE: Vec2 = Vec2::new(450.0, 210.0);

/// Spoon-group translation preset for a feeding phase.
pub fn spoon_offset(phase: SpoonPhase) -> Vec2 {
    match phase {
        SpoonPhase::Plate => Vec2::new(-15.0, 25.0),
        SpoonPhase::Mouth => Vec2::new(-300.0, 30.0),
        SpoonPhase::Eating => Vec2::new(-80.0, -40.0),
    }
}

/// Resolved visual parameters for one composed frame.
///
/// Hosts with eased transforms (the widget wrapper) fill in in-between
/// offsets; converting straight from a [`CharacterPose`] uses the exact
/// preset values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePose {
    pub offset_x: f32,
    pub rotation_deg: f32,
    pub blinking: bool,
    pub sleeping: bool,
    pub speaking: bool,
    pub speech_text: String,
    pub spoon_offset: Vec2,
}

impl From<&CharacterPose> for ScenePose {
    fn from(pose: &CharacterPose) -> Self {
        Self {
            offset_x: pose.offset_x as f32,
            rotation_deg: pose.rotation_deg as f32,
            blinking: pose.blinking,
            sleeping: pose.sleeping,
            speaking: pose.speaking,
            speech_text: pose.speech_text.clone(),
            spoon_offset: spoon_offset(pose.spoon),
        }
    }
}

/// A positioned piece of scene text. Text layout needs font state, so the
/// composer returns labels as data and the widget lays them out.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    /// Screen position of the glyph box top-left.
    pub pos: Pos2,
    /// Font size in screen pixels.
    pub size: f32,
    /// Rotation applied around `pos`, in radians.
    pub angle: f32,
    pub color: Color32,
    pub text: String,
}

/// One composed frame: paint-ready shapes plus text labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneFrame {
    pub shapes: Vec<Shape>,
    pub labels: Vec<SceneLabel>,
}

/// Composes the full scene for `pose` into `frame_rect`.
///
/// Pure: no side effects, no internal state, identical output for identical
/// input. The scene is letterboxed and uniformly scaled into `frame_rect`.
pub fn compose(pose: &ScenePose, frame_rect: Rect) -> SceneFrame {
    let place = Placement::new(frame_rect, pose.offset_x, pose.rotation_deg);
    let mut frame = SceneFrame::default();
    character::push_character(pose, &place, &mut frame);
    plate::push_plate(pose, &place, &mut frame);
    frame
}
