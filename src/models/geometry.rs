// src/models/geometry.rs
// Transform and canvas sizing types
//
// Canvas space has its origin at the top-left corner with y pointing down.
// Rotations are in radians; a positive angle turns +x toward +y.

use nannou::prelude::*;

/// Rigid 2D transform: rotate about the local origin, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        if self.rotation == 0.0 {
            return point + self.translation;
        }
        let (sin_rot, cos_rot) = self.rotation.sin_cos();
        let rotated = pt2(
            point.x * cos_rot - point.y * sin_rot,
            point.x * sin_rot + point.y * cos_rot,
        );
        rotated + self.translation
    }

    /// Frame whose origin sits at `offset` in this frame's coordinates.
    pub fn translated(&self, offset: Vec2) -> Transform2D {
        Transform2D {
            translation: self.apply_to_point(offset),
            rotation: self.rotation,
        }
    }

    /// Frame rotated by `angle` about this frame's origin.
    pub fn rotated(&self, angle: f32) -> Transform2D {
        Transform2D {
            translation: self.translation,
            rotation: self.rotation + angle,
        }
    }

    /// Maps a canvas-space point back into this frame.
    pub fn inverse_apply(&self, point: Point2) -> Point2 {
        let d = point - self.translation;
        let (sin_rot, cos_rot) = self.rotation.sin_cos();
        pt2(d.x * cos_rot + d.y * sin_rot, -d.x * sin_rot + d.y * cos_rot)
    }
}

/// Canvas size for a viewport: width clamped to `max_width`, height two thirds of the width.
pub fn canvas_size_for_viewport(viewport_width: f32, max_width: u32) -> [u32; 2] {
    let width = viewport_width.min(max_width as f32).round().max(1.0) as u32;
    let height = ((width as f32) * 2.0 / 3.0).round().max(1.0) as u32;
    [width, height]
}

/// On-screen size of the canvas inside a window: aspect ratio kept, shrunk to
/// fit, never scaled up past 1:1.
pub fn letterbox_size(canvas: [u32; 2], window: Vec2) -> Vec2 {
    let size = vec2(canvas[0] as f32, canvas[1] as f32);
    if size.x <= 0.0 || size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (window.x / size.x).min(window.y / size.y).clamp(0.0, 1.0);
    size * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn close(a: Point2, b: Point2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_default_transform() {
        let transform = Transform2D::default();
        assert_eq!(transform.translation, Vec2::ZERO);
        assert_eq!(transform.rotation, 0.0);
        assert_eq!(transform.apply_to_point(pt2(3.0, 4.0)), pt2(3.0, 4.0));
    }

    #[test]
    fn test_translation_then_rotation() {
        let frame = Transform2D::default().translated(vec2(100.0, 50.0));
        assert!(close(frame.apply_to_point(pt2(1.0, 1.0)), pt2(101.0, 51.0)));

        // quarter turn: +x maps onto +y (downward on the canvas)
        let rotated = frame.rotated(PI / 2.0);
        assert!(close(rotated.apply_to_point(pt2(10.0, 0.0)), pt2(100.0, 60.0)));
        assert!(close(rotated.apply_to_point(pt2(0.0, 10.0)), pt2(90.0, 50.0)));
    }

    #[test]
    fn test_translate_inside_rotated_frame() {
        let frame = Transform2D::default().rotated(PI / 2.0).translated(vec2(10.0, 0.0));
        assert!(close(frame.translation, pt2(0.0, 10.0)));
    }

    #[test]
    fn test_inverse_round_trip() {
        let frame = Transform2D {
            translation: vec2(480.0, 250.0),
            rotation: -0.2,
        };
        let local = pt2(-310.0, 17.5);
        assert!(close(frame.inverse_apply(frame.apply_to_point(local)), local));
    }

    #[test]
    fn test_canvas_size_for_viewport() {
        assert_eq!(canvas_size_for_viewport(960.0, 980), [960, 640]);
        assert_eq!(canvas_size_for_viewport(1920.0, 980), [980, 653]);
        assert_eq!(canvas_size_for_viewport(301.0, 980), [301, 201]);
        assert_eq!(canvas_size_for_viewport(0.0, 980), [1, 1]);
    }

    #[test]
    fn test_letterbox_keeps_aspect() {
        // window matches the canvas
        assert_eq!(letterbox_size([960, 640], vec2(960.0, 640.0)), vec2(960.0, 640.0));

        // wider than max_width: shown 1:1, not stretched
        assert_eq!(letterbox_size([980, 653], vec2(1600.0, 900.0)), vec2(980.0, 653.0));

        // short window: shrunk by height
        let fitted = letterbox_size([960, 640], vec2(960.0, 320.0));
        assert!((fitted - vec2(480.0, 320.0)).length() < 1e-3);
        assert!((fitted.x / fitted.y - 1.5).abs() < 1e-4);

        assert_eq!(letterbox_size([0, 0], vec2(100.0, 100.0)), Vec2::ZERO);
    }
}
