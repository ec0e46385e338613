//! Geometry helpers: the scene placement transform and curve flattening.

use std::f32::consts::{FRAC_PI_2, TAU};

use egui::emath::Rot2;
use egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::SCENE_SIZE;

/// Maps scene-local coordinates to screen coordinates.
///
/// The whole scene group is translated by `offset_x`, then rotated around
/// the content-box center, then uniformly scaled and letterboxed into the
/// target rect.
pub(crate) struct Placement {
    origin: Pos2,
    scale: f32,
    rot: Rot2,
    pivot: Vec2,
    shift: Vec2,
}

impl Placement {
    pub(crate) fn new(frame: Rect, offset_x: f32, rotation_deg: f32) -> Self {
        let scale = (frame.width() / SCENE_SIZE.x)
            .min(frame.height() / SCENE_SIZE.y)
            .max(f32::EPSILON);
        let origin = frame.center() - SCENE_SIZE * scale * 0.5;
        Self {
            origin,
            scale,
            rot: Rot2::from_angle(rotation_deg.to_radians()),
            pivot: SCENE_SIZE * 0.5,
            shift: vec2(offset_x, 0.0),
        }
    }

    pub(crate) fn at(&self, x: f32, y: f32) -> Pos2 {
        let local = self.rot * (vec2(x, y) - self.pivot) + self.pivot + self.shift;
        self.origin + local * self.scale
    }

    /// Scales a scene-local length (radius, stroke width) to screen pixels.
    pub(crate) fn len(&self, v: f32) -> f32 {
        v * self.scale
    }

    /// Scene rotation in radians, for rotated text.
    pub(crate) fn angle(&self) -> f32 {
        self.rot.angle()
    }
}

/// Appends the flattened points of a quadratic bezier, excluding `p0`.
pub(crate) fn quad_points(p0: Pos2, c: Pos2, p1: Pos2, steps: usize, out: &mut Vec<Pos2>) {
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let u = 1.0 - t;
        let x = u * u * p0.x + 2.0 * u * t * c.x + t * t * p1.x;
        let y = u * u * p0.y + 2.0 * u * t * c.y + t * t * p1.y;
        out.push(pos2(x, y));
    }
}

/// Appends the flattened points of a cubic bezier, excluding `p0`.
pub(crate) fn cubic_points(p0: Pos2, c1: Pos2, c2: Pos2, p1: Pos2, steps: usize, out: &mut Vec<Pos2>) {
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        out.push(pos2(
            a * p0.x + b * c1.x + c * c2.x + d * p1.x,
            a * p0.y + b * c1.y + c * c2.y + d * p1.y,
        ));
    }
}

/// Samples an ellipse outline, optionally tilted, as a closed point loop.
pub(crate) fn ellipse_points(
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    tilt_deg: f32,
    steps: usize,
) -> Vec<Pos2> {
    let tilt = Rot2::from_angle(tilt_deg.to_radians());
    (0..steps)
        .map(|i| {
            let t = i as f32 / steps as f32 * TAU;
            let p = tilt * vec2(rx * t.cos(), ry * t.sin());
            pos2(cx + p.x, cy + p.y)
        })
        .collect()
}

/// Samples a rounded rectangle outline as a closed point loop.
pub(crate) fn rounded_rect_points(x: f32, y: f32, w: f32, h: f32, r: f32) -> Vec<Pos2> {
    let r = r.min(w * 0.5).min(h * 0.5).max(0.0);
    // Corner arc centers, clockwise from the top-right.
    let corners = [
        (x + w - r, y + r),
        (x + w - r, y + h - r),
        (x + r, y + h - r),
        (x + r, y + r),
    ];
    let mut points = Vec::with_capacity(corners.len() * 5);
    for (i, (cx, cy)) in corners.into_iter().enumerate() {
        let start = (i as f32 - 1.0) * FRAC_PI_2;
        for step in 0..=4 {
            let a = start + step as f32 / 4.0 * FRAC_PI_2;
            points.push(pos2(cx + r * a.cos(), cy + r * a.sin()));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_is_identity_shaped_without_offset_or_rotation() {
        let frame = Rect::from_min_max(pos2(0.0, 0.0), pos2(SCENE_SIZE.x, SCENE_SIZE.y));
        let place = Placement::new(frame, 0.0, 0.0);
        let p = place.at(100.0, 20.0);
        assert!((p.x - 100.0).abs() < 1e-3);
        assert!((p.y - 20.0).abs() < 1e-3);
        assert!((place.len(8.0) - 8.0).abs() < 1e-6);
    }

    #[test]
    fn placement_applies_offset_before_scaling() {
        let frame = Rect::from_min_max(pos2(0.0, 0.0), pos2(SCENE_SIZE.x * 2.0, SCENE_SIZE.y * 2.0));
        let base = Placement::new(frame, 0.0, 0.0).at(100.0, 100.0);
        let moved = Placement::new(frame, 20.0, 0.0).at(100.0, 100.0);
        assert!((moved.x - base.x - 40.0).abs() < 1e-3);
        assert!((moved.y - base.y).abs() < 1e-3);
    }

    #[test]
    fn placement_rotates_around_the_scene_center() {
        let frame = Rect::from_min_max(pos2(0.0, 0.0), pos2(SCENE_SIZE.x, SCENE_SIZE.y));
        let place = Placement::new(frame, 0.0, 180.0);
        let center = place.at(SCENE_SIZE.x * 0.5, SCENE_SIZE.y * 0.5);
        assert!((center.x - SCENE_SIZE.x * 0.5).abs() < 1e-3);
        assert!((center.y - SCENE_SIZE.y * 0.5).abs() < 1e-3);
        // A point left of the pivot lands the same distance right of it.
        let flipped = place.at(SCENE_SIZE.x * 0.5 - 50.0, SCENE_SIZE.y * 0.5);
        assert!((flipped.x - (SCENE_SIZE.x * 0.5 + 50.0)).abs() < 1e-2);
    }

    #[test]
    fn flattened_curves_end_on_their_endpoints() {
        let mut quad = Vec::new();
        quad_points(pos2(80.0, 100.0), pos2(100.0, 120.0), pos2(120.0, 100.0), 8, &mut quad);
        assert_eq!(quad.len(), 8);
        assert_eq!(*quad.last().expect("points"), pos2(120.0, 100.0));

        let mut cubic = Vec::new();
        cubic_points(
            pos2(100.0, 20.0),
            pos2(60.0, 20.0),
            pos2(40.0, 50.0),
            pos2(40.0, 90.0),
            12,
            &mut cubic,
        );
        assert_eq!(cubic.len(), 12);
        assert_eq!(*cubic.last().expect("points"), pos2(40.0, 90.0));
    }

    #[test]
    fn rounded_rect_stays_inside_its_bounds() {
        let points = rounded_rect_points(60.0, 15.0, 80.0, 20.0, 8.0);
        assert!(!points.is_empty());
        for p in points {
            assert!(p.x >= 59.9 && p.x <= 140.1);
            assert!(p.y >= 14.9 && p.y <= 35.1);
        }
    }
}
