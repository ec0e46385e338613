//! The porridge plate: dishware, texture, steam, and the animated spoon group.

use egui::{pos2, Color32, Pos2, Shape, Stroke};

use crate::palette;
use crate::path::{ellipse_points, quad_points, rounded_rect_points, Placement};
use crate::{SceneFrame, ScenePose};

/// Scene-local x offset of the plate art (character width plus gap).
const PLATE_X: f32 = 250.0;

pub(crate) fn push_plate(pose: &ScenePose, place: &Placement, frame: &mut SceneFrame) {
    push_dishware(place, frame);
    push_spoon(pose, place, frame);
    push_steam(place, frame);
}

fn polygon(
    place: &Placement,
    points: Vec<Pos2>,
    fill: Color32,
    stroke_color: Color32,
    stroke_width: f32,
) -> Shape {
    let mapped: Vec<Pos2> = points.into_iter().map(|p| place.at(p.x, p.y)).collect();
    Shape::convex_polygon(mapped, fill, Stroke::new(place.len(stroke_width), stroke_color))
}

fn push_dishware(place: &Placement, frame: &mut SceneFrame) {
    frame.shapes.push(polygon(
        place,
        ellipse_points(PLATE_X + 100.0, 120.0, 60.0, 15.0, 0.0, 40),
        palette::PLATE_GREY,
        palette::PLATE_EDGE,
        2.0,
    ));
    frame.shapes.push(polygon(
        place,
        ellipse_points(PLATE_X + 100.0, 110.0, 55.0, 8.0, 0.0, 40),
        Color32::WHITE,
        palette::PLATE_EDGE,
        2.0,
    ));
    frame.shapes.push(polygon(
        place,
        ellipse_points(PLATE_X + 100.0, 110.0, 50.0, 6.0, 0.0, 40),
        palette::PORRIDGE,
        palette::PORRIDGE_EDGE,
        1.0,
    ));
    let speck = palette::PORRIDGE_SPECK.gamma_multiply(0.7);
    for (cx, cy, r) in [
        (80.0, 108.0, 3.0),
        (100.0, 105.0, 2.0),
        (120.0, 108.0, 2.5),
        (90.0, 112.0, 2.0),
        (110.0, 112.0, 1.5),
    ] {
        frame
            .shapes
            .push(Shape::circle_filled(place.at(PLATE_X + cx, cy), place.len(r), speck));
    }
}

fn push_spoon(pose: &ScenePose, place: &Placement, frame: &mut SceneFrame) {
    let dx = PLATE_X + pose.spoon_offset.x;
    let dy = pose.spoon_offset.y;

    // Spoon bowl: a small closed loop of three quadratic segments.
    let mut bowl = vec![pos2(160.0 + dx, 80.0 + dy)];
    quad_points(
        pos2(160.0 + dx, 80.0 + dy),
        pos2(170.0 + dx, 75.0 + dy),
        pos2(175.0 + dx, 85.0 + dy),
        6,
        &mut bowl,
    );
    quad_points(
        pos2(175.0 + dx, 85.0 + dy),
        pos2(170.0 + dx, 90.0 + dy),
        pos2(160.0 + dx, 85.0 + dy),
        6,
        &mut bowl,
    );
    quad_points(
        pos2(160.0 + dx, 85.0 + dy),
        pos2(155.0 + dx, 82.0 + dy),
        pos2(160.0 + dx, 80.0 + dy),
        4,
        &mut bowl,
    );
    bowl.pop();
    frame
        .shapes
        .push(polygon(place, bowl, palette::SPOON_SILVER, palette::SPOON_EDGE, 1.0));

    for (x, y, w, h, r) in [(170.0, 82.0, 15.0, 2.0, 1.0), (180.0, 80.0, 8.0, 6.0, 1.0)] {
        frame.shapes.push(polygon(
            place,
            rounded_rect_points(x + dx, y + dy, w, h, r),
            palette::SPOON_SILVER,
            palette::SPOON_EDGE,
            1.0,
        ));
    }
}

fn push_steam(place: &Placement, frame: &mut SceneFrame) {
    let steam = palette::PLATE_EDGE.gamma_multiply(0.6);
    for (x, y) in [(85.0, 100.0), (100.0, 98.0), (115.0, 100.0)] {
        let mut curl = vec![pos2(PLATE_X + x, y)];
        quad_points(
            pos2(PLATE_X + x, y),
            pos2(PLATE_X + x + 5.0, y - 5.0),
            pos2(PLATE_X + x + 10.0, y),
            6,
            &mut curl,
        );
        quad_points(
            pos2(PLATE_X + x + 10.0, y),
            pos2(PLATE_X + x + 5.0, y + 5.0),
            pos2(PLATE_X + x, y),
            6,
            &mut curl,
        );
        curl.pop();
        let mapped: Vec<Pos2> = curl.into_iter().map(|p| place.at(p.x, p.y)).collect();
        frame
            .shapes
            .push(Shape::closed_line(mapped, Stroke::new(place.len(1.0), steam)));
    }
}
