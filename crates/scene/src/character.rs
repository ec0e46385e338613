//! The apple-boy figure: body, outfit, face, and transient overlays.

use egui::epaint::{CircleShape, QuadraticBezierShape};
use egui::{pos2, Color32, Pos2, Shape, Stroke};

use crate::palette;
use crate::path::{cubic_points, ellipse_points, quad_points, rounded_rect_points, Placement};
use crate::{SceneFrame, SceneLabel, ScenePose};

pub(crate) fn push_character(pose: &ScenePose, place: &Placement, frame: &mut SceneFrame) {
    push_body(place, frame);
    push_hair(place, frame);
    push_cap(place, frame);
    push_stem_and_leaf(place, frame);
    push_eyes(pose, place, frame);
    push_mouth(pose, place, frame);
    push_highlight(place, frame);
    if pose.speaking {
        push_sound_waves(pose, place, frame);
    }
    if pose.sleeping {
        push_sleep_glyphs(place, frame);
    }
    push_outfit(place, frame);
    push_limbs(place, frame);
}

fn mapped(place: &Placement, points: Vec<Pos2>) -> Vec<Pos2> {
    points.into_iter().map(|p| place.at(p.x, p.y)).collect()
}

fn polygon(
    place: &Placement,
    points: Vec<Pos2>,
    fill: Color32,
    stroke_color: Color32,
    stroke_width: f32,
) -> Shape {
    Shape::convex_polygon(
        mapped(place, points),
        fill,
        Stroke::new(place.len(stroke_width), stroke_color),
    )
}

fn circle(place: &Placement, cx: f32, cy: f32, r: f32, fill: Color32, stroke_color: Color32, stroke_width: f32) -> Shape {
    Shape::Circle(CircleShape {
        center: place.at(cx, cy),
        radius: place.len(r),
        fill,
        stroke: Stroke::new(place.len(stroke_width), stroke_color),
    })
}

fn push_body(place: &Placement, frame: &mut SceneFrame) {
    let mut pts = vec![pos2(100.0, 20.0)];
    cubic_points(pos2(100.0, 20.0), pos2(60.0, 20.0), pos2(40.0, 50.0), pos2(40.0, 90.0), 12, &mut pts);
    cubic_points(pos2(40.0, 90.0), pos2(40.0, 120.0), pos2(50.0, 140.0), pos2(70.0, 150.0), 12, &mut pts);
    cubic_points(pos2(70.0, 150.0), pos2(80.0, 155.0), pos2(90.0, 160.0), pos2(100.0, 160.0), 8, &mut pts);
    cubic_points(pos2(100.0, 160.0), pos2(110.0, 160.0), pos2(120.0, 155.0), pos2(130.0, 150.0), 8, &mut pts);
    cubic_points(pos2(130.0, 150.0), pos2(150.0, 140.0), pos2(160.0, 120.0), pos2(160.0, 90.0), 12, &mut pts);
    cubic_points(pos2(160.0, 90.0), pos2(160.0, 50.0), pos2(140.0, 20.0), pos2(100.0, 20.0), 12, &mut pts);
    // The final segment revisits the starting point.
    pts.pop();
    frame
        .shapes
        .push(polygon(place, pts, palette::APPLE_RED, palette::APPLE_RED_DARK, 2.0));
}

fn push_hair(place: &Placement, frame: &mut SceneFrame) {
    let strands: [[Pos2; 9]; 2] = [
        [
            pos2(70.0, 35.0),
            pos2(100.0, 20.0),
            pos2(130.0, 35.0),
            pos2(125.0, 45.0),
            pos2(120.0, 40.0),
            pos2(100.0, 30.0),
            pos2(80.0, 40.0),
            pos2(75.0, 45.0),
            pos2(70.0, 35.0),
        ],
        [
            pos2(75.0, 40.0),
            pos2(100.0, 25.0),
            pos2(125.0, 40.0),
            pos2(120.0, 50.0),
            pos2(115.0, 45.0),
            pos2(100.0, 35.0),
            pos2(85.0, 45.0),
            pos2(80.0, 50.0),
            pos2(75.0, 40.0),
        ],
    ];
    for strand in strands {
        let mut pts = vec![strand[0]];
        for seg in 0..4 {
            quad_points(strand[seg * 2], strand[seg * 2 + 1], strand[seg * 2 + 2], 6, &mut pts);
        }
        pts.pop();
        frame
            .shapes
            .push(polygon(place, pts, palette::HAIR_BROWN, palette::HAIR_BROWN_DARK, 1.0));
    }
}

fn push_cap(place: &Placement, frame: &mut SceneFrame) {
    frame.shapes.push(polygon(
        place,
        ellipse_points(100.0, 25.0, 40.0, 12.0, 0.0, 32),
        palette::CAP_NAVY,
        palette::CAP_NAVY_DARK,
        2.0,
    ));
    frame.shapes.push(polygon(
        place,
        rounded_rect_points(60.0, 15.0, 80.0, 20.0, 8.0),
        palette::CAP_BLUE,
        palette::CAP_BLUE_DARK,
        2.0,
    ));
    frame.shapes.push(polygon(
        place,
        ellipse_points(100.0, 35.0, 45.0, 8.0, 0.0, 32),
        palette::CAP_NAVY,
        palette::CAP_NAVY_DARK,
        2.0,
    ));
    frame.shapes.push(circle(
        place,
        100.0,
        25.0,
        3.0,
        palette::CAP_BUTTON,
        palette::CAP_BUTTON_DARK,
        1.0,
    ));
}

fn push_stem_and_leaf(place: &Placement, frame: &mut SceneFrame) {
    frame.shapes.push(polygon(
        place,
        rounded_rect_points(95.0, 15.0, 10.0, 15.0, 2.0),
        palette::HAIR_BROWN,
        Color32::TRANSPARENT,
        0.0,
    ));
    let mut leaf = vec![pos2(105.0, 20.0)];
    quad_points(pos2(105.0, 20.0), pos2(120.0, 15.0), pos2(125.0, 25.0), 6, &mut leaf);
    quad_points(pos2(125.0, 25.0), pos2(120.0, 30.0), pos2(105.0, 25.0), 6, &mut leaf);
    frame
        .shapes
        .push(polygon(place, leaf, palette::LEAF_GREEN, palette::LEAF_GREEN_DARK, 1.0));
}

fn push_eyes(pose: &ScenePose, place: &Placement, frame: &mut SceneFrame) {
    let closed = pose.blinking || pose.sleeping;
    for cx in [75.0, 125.0] {
        frame
            .shapes
            .push(Shape::circle_filled(place.at(cx, 70.0), place.len(8.0), Color32::WHITE));
        if closed {
            // Both blink and sleep draw the same closed lid.
            frame.shapes.push(Shape::line_segment(
                [place.at(cx - 5.0, 70.0), place.at(cx + 5.0, 70.0)],
                Stroke::new(place.len(2.0), palette::HAIR_BROWN),
            ));
        } else {
            frame
                .shapes
                .push(Shape::circle_filled(place.at(cx, 70.0), place.len(5.0), palette::HAIR_BROWN));
            frame
                .shapes
                .push(Shape::circle_filled(place.at(cx + 1.0, 68.0), place.len(2.0), Color32::WHITE));
        }
    }
}

fn push_mouth(pose: &ScenePose, place: &Placement, frame: &mut SceneFrame) {
    if pose.speaking {
        frame.shapes.push(polygon(
            place,
            ellipse_points(100.0, 110.0, 15.0, 8.0, 0.0, 24),
            Color32::BLACK,
            Color32::BLACK,
            2.0,
        ));
    } else {
        let smile = QuadraticBezierShape::from_points_stroke(
            [place.at(80.0, 100.0), place.at(100.0, 120.0), place.at(120.0, 100.0)],
            false,
            Color32::TRANSPARENT,
            Stroke::new(place.len(3.0), Color32::BLACK),
        );
        frame.shapes.push(smile.into());
    }
}

fn push_highlight(place: &Placement, frame: &mut SceneFrame) {
    frame.shapes.push(polygon(
        place,
        ellipse_points(85.0, 50.0, 15.0, 25.0, -20.0, 24),
        Color32::from_rgba_unmultiplied(255, 255, 255, 76),
        Color32::TRANSPARENT,
        0.0,
    ));
}

fn push_sound_waves(pose: &ScenePose, place: &Placement, frame: &mut SceneFrame) {
    for (cx, cy, r, alpha) in [
        (140.0, 90.0, 8.0, 0.7),
        (150.0, 100.0, 12.0, 0.5),
        (160.0, 110.0, 16.0, 0.3),
    ] {
        frame.shapes.push(Shape::circle_stroke(
            place.at(cx, cy),
            place.len(r),
            Stroke::new(place.len(2.0), palette::WAVE_GOLD.gamma_multiply(alpha)),
        ));
    }
    frame.labels.push(SceneLabel {
        pos: place.at(170.0, 95.0 - 12.0),
        size: place.len(12.0),
        angle: place.angle(),
        color: palette::WAVE_GOLD,
        text: pose.speech_text.clone(),
    });
}

fn push_sleep_glyphs(place: &Placement, frame: &mut SceneFrame) {
    for (x, y, size, alpha) in [
        (120.0, 40.0, 16.0, 0.8),
        (130.0, 30.0, 14.0, 0.6),
        (140.0, 35.0, 12.0, 0.4),
    ] {
        frame.labels.push(SceneLabel {
            pos: place.at(x, y - size),
            size: place.len(size),
            angle: place.angle(),
            color: palette::SLEEP_BLUE.gamma_multiply(alpha),
            text: "Z".to_owned(),
        });
    }
}

fn push_outfit(place: &Placement, frame: &mut SceneFrame) {
    for (x, y, w, h, r) in [
        (70.0, 140.0, 60.0, 25.0, 3.0),
        (70.0, 150.0, 25.0, 15.0, 2.0),
        (105.0, 150.0, 25.0, 15.0, 2.0),
    ] {
        frame.shapes.push(polygon(
            place,
            rounded_rect_points(x, y, w, h, r),
            palette::SHORTS_BLUE,
            palette::SHORTS_BLUE_DARK,
            2.0,
        ));
    }
    frame.shapes.push(polygon(
        place,
        rounded_rect_points(70.0, 140.0, 60.0, 4.0, 0.5),
        palette::HAIR_BROWN,
        palette::HAIR_BROWN_DARK,
        1.0,
    ));
    frame.shapes.push(polygon(
        place,
        rounded_rect_points(95.0, 138.0, 10.0, 8.0, 2.0),
        palette::BELT_GOLD,
        palette::BELT_GOLD_DARK,
        1.0,
    ));
}

fn push_limbs(place: &Placement, frame: &mut SceneFrame) {
    // Arms with fists.
    for (cx, cy, tilt, fist_x, fist_y) in [
        (60.0, 100.0, -30.0, 45.0, 120.0),
        (140.0, 100.0, 30.0, 155.0, 120.0),
    ] {
        frame.shapes.push(polygon(
            place,
            ellipse_points(cx, cy, 8.0, 25.0, tilt, 24),
            palette::APPLE_RED,
            palette::APPLE_RED_DARK,
            2.0,
        ));
        frame
            .shapes
            .push(circle(place, fist_x, fist_y, 6.0, palette::APPLE_RED, palette::APPLE_RED_DARK, 2.0));
    }
    // Legs with feet.
    for (cx, cy, tilt, foot_x, foot_y) in [
        (85.0, 170.0, -10.0, 80.0, 195.0),
        (115.0, 170.0, 10.0, 120.0, 195.0),
    ] {
        frame.shapes.push(polygon(
            place,
            ellipse_points(cx, cy, 12.0, 30.0, tilt, 24),
            palette::APPLE_RED,
            palette::APPLE_RED_DARK,
            2.0,
        ));
        frame.shapes.push(polygon(
            place,
            ellipse_points(foot_x, foot_y, 8.0, 12.0, 0.0, 20),
            palette::APPLE_RED,
            palette::APPLE_RED_DARK,
            2.0,
        ));
    }
}
