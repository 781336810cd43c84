// src/draw/origin_marker.rs
// Debug cross at the local origin of a cloud

use nannou::prelude::*;

use super::{Canvas, LocalCanvas};
use crate::utilities::color255;

const ARM: f32 = 12.0;

pub fn draw_origin_cross<C: Canvas + ?Sized>(canvas: &mut LocalCanvas<C>) {
    let color = color255(255.0, 255.0, 255.0, 80.0);
    canvas.line(pt2(-ARM, 0.0), pt2(ARM, 0.0), color, 2.0);
    canvas.line(pt2(0.0, -ARM), pt2(0.0, ARM), color, 2.0);
}
