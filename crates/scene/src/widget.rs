//! egui widget wrapper: allocates space, eases transforms, paints the scene.

use egui::epaint::TextShape;
use egui::{vec2, FontId, Response, Sense, Ui, Widget};
use shared::CharacterPose;

use crate::{compose, spoon_offset, ScenePose, SCENE_SIZE};

/// Body transform easing.
const BODY_EASE_SECS: f32 = 0.3;
/// Spoon group easing, deliberately slower than the body.
const SPOON_EASE_SECS: f32 = 0.8;

/// Paints one [`CharacterPose`] snapshot.
///
/// The widget only eases the body and spoon transforms between snapshots;
/// everything else is the pure composer's output.
pub struct CharacterScene<'a> {
    pose: &'a CharacterPose,
}

impl<'a> CharacterScene<'a> {
    pub fn new(pose: &'a CharacterPose) -> Self {
        Self { pose }
    }
}

impl Widget for CharacterScene<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let aspect = SCENE_SIZE.y / SCENE_SIZE.x;
        let width = ui.available_width().max(1.0);
        let height = (width * aspect).min(ui.available_height().max(1.0));
        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let ctx = ui.ctx().clone();
        let id = response.id;
        let offset_x =
            ctx.animate_value_with_time(id.with("offset_x"), self.pose.offset_x as f32, BODY_EASE_SECS);
        let rotation_deg = ctx.animate_value_with_time(
            id.with("rotation"),
            self.pose.rotation_deg as f32,
            BODY_EASE_SECS,
        );
        let spoon_target = spoon_offset(self.pose.spoon);
        let spoon = vec2(
            ctx.animate_value_with_time(id.with("spoon_x"), spoon_target.x, SPOON_EASE_SECS),
            ctx.animate_value_with_time(id.with("spoon_y"), spoon_target.y, SPOON_EASE_SECS),
        );

        let scene = ScenePose {
            offset_x,
            rotation_deg,
            blinking: self.pose.blinking,
            sleeping: self.pose.sleeping,
            speaking: self.pose.speaking,
            speech_text: self.pose.speech_text.clone(),
            spoon_offset: spoon,
        };
        let frame = compose(&scene, rect);

        let painter = ui.painter().with_clip_rect(rect);
        painter.extend(frame.shapes);
        for label in frame.labels {
            let galley =
                painter.layout_no_wrap(label.text, FontId::proportional(label.size), label.color);
            painter.add(TextShape::new(label.pos, galley, label.color).with_angle(label.angle));
        }
        response
    }
}
