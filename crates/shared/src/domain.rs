//! Render-input contract consumed by the scene renderer.

use serde::{Deserialize, Serialize};

/// Speech-bubble placeholder before any clip has played.
pub const DEFAULT_SPEECH_TEXT: &str = "NYAM!";

/// Three-phase feeding animation position of the spoon.
///
/// Transitions only as Plate -> Mouth -> Eating -> Plate, driven by the
/// host's timed feeding sequence, never set directly from outside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpoonPhase {
    #[default]
    Plate,
    Mouth,
    Eating,
}

/// Pose snapshot the character scene is rendered from.
///
/// Hosts own every field and all timing; the renderer is a pure function of
/// one snapshot. Every field has a safe default, so a partial snapshot still
/// renders the idle pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterPose {
    /// Horizontal offset in scene pixels.
    pub offset_x: i32,
    /// Cumulative rotation in degrees, unbounded.
    pub rotation_deg: i32,
    pub blinking: bool,
    pub sleeping: bool,
    pub speaking: bool,
    /// Speech-bubble label shown while `speaking`.
    pub speech_text: String,
    pub spoon: SpoonPhase,
}

impl Default for CharacterPose {
    fn default() -> Self {
        Self {
            offset_x: 0,
            rotation_deg: 0,
            blinking: false,
            sleeping: false,
            speaking: false,
            speech_text: DEFAULT_SPEECH_TEXT.to_owned(),
            spoon: SpoonPhase::Plate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_is_the_idle_pose() {
        let pose = CharacterPose::default();
        assert_eq!(pose.offset_x, 0);
        assert_eq!(pose.rotation_deg, 0);
        assert!(!pose.blinking);
        assert!(!pose.sleeping);
        assert!(!pose.speaking);
        assert_eq!(pose.speech_text, DEFAULT_SPEECH_TEXT);
        assert_eq!(pose.spoon, SpoonPhase::Plate);
    }

    #[test]
    fn empty_snapshot_deserializes_to_defaults() {
        let pose: CharacterPose = serde_json::from_str("{}").expect("empty object");
        assert_eq!(pose, CharacterPose::default());
    }

    #[test]
    fn partial_snapshot_keeps_remaining_defaults() {
        let pose: CharacterPose =
            serde_json::from_str(r#"{"sleeping":true,"spoon":"mouth"}"#).expect("partial object");
        assert!(pose.sleeping);
        assert_eq!(pose.spoon, SpoonPhase::Mouth);
        assert_eq!(pose.offset_x, 0);
        assert!(!pose.speaking);
    }
}
