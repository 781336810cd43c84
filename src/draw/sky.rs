// src/draw/sky.rs
// Vertical sky gradient, one line per pixel row

use nannou::prelude::*;

use super::{Canvas, LocalCanvas};
use crate::utilities::{color255, lerp_color};

pub fn sky_top() -> Rgba {
    color255(160.0, 205.0, 255.0, 255.0)
}

pub fn sky_bottom() -> Rgba {
    color255(235.0, 250.0, 255.0, 255.0)
}

/// Normalized position of `row` among `rows` rows; a single row counts as the top.
pub fn row_position(row: u32, rows: u32) -> f32 {
    if rows <= 1 {
        0.0
    } else {
        row as f32 / (rows - 1) as f32
    }
}

/// Paints the full canvas. Expects a canvas-space view (no transform).
pub fn draw_sky<C: Canvas + ?Sized>(canvas: &mut LocalCanvas<C>) {
    let size = canvas.size();
    let rows = size.y.max(0.0) as u32;
    let (top, bottom) = (sky_top(), sky_bottom());

    for row in 0..rows {
        let y = row as f32;
        let color = lerp_color(top, bottom, row_position(row, rows));
        canvas.line(pt2(0.0, y), pt2(size.x, y), color, 1.0);
    }
}
