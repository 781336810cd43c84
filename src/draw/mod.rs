// src/draw/mod.rs
// Drawing primitives for the cloud generators.
//
// Generators draw through a `LocalCanvas`, which places their local-space
// geometry onto a `Canvas`. A canvas either records the commands (`Scene`)
// or paints them straight onto a nannou `Draw`.

pub mod cirrus;
pub mod cumulus;
pub mod local_canvas;
pub mod origin_marker;
pub mod sky;

pub use local_canvas::LocalCanvas;

use nannou::prelude::*;

/// A single drawing operation in canvas space (top-left origin, y down).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        start: Point2,
        end: Point2,
        color: Rgba,
        weight: f32,
    },
    // filled, no stroke; w and h are diameters before rotation
    Ellipse {
        center: Point2,
        w: f32,
        h: f32,
        rotation: f32,
        color: Rgba,
    },
    // unfilled, colored per vertex
    Polyline {
        vertices: Vec<(Point2, Rgba)>,
        weight: f32,
    },
}

impl DrawCommand {
    /// Paints the command onto a nannou `Draw` whose origin is the canvas center.
    pub fn draw(&self, draw: &Draw, canvas_size: Vec2) {
        match self {
            DrawCommand::Line {
                start,
                end,
                color,
                weight,
            } => {
                draw.line()
                    .start(to_draw_space(*start, canvas_size))
                    .end(to_draw_space(*end, canvas_size))
                    .stroke_weight(*weight)
                    .color(*color);
            }
            DrawCommand::Ellipse {
                center,
                w,
                h,
                rotation,
                color,
            } => {
                let c = to_draw_space(*center, canvas_size);
                draw.ellipse()
                    .x_y(c.x, c.y)
                    .w_h(*w, *h)
                    // y is flipped, so the turn direction flips with it
                    .rotate(-*rotation)
                    .color(*color);
            }
            DrawCommand::Polyline { vertices, weight } => {
                draw.polyline().weight(*weight).points_colored(
                    vertices
                        .iter()
                        .map(|(p, color)| (to_draw_space(*p, canvas_size), *color)),
                );
            }
        }
    }
}

/// Canvas space to nannou space: origin moves to the center and y flips to point up.
pub fn to_draw_space(point: Point2, canvas_size: Vec2) -> Point2 {
    pt2(
        point.x - canvas_size.x / 2.0,
        canvas_size.y / 2.0 - point.y,
    )
}

/// Drawing target for canvas-space commands.
pub trait Canvas {
    fn size(&self) -> Vec2;
    fn push(&mut self, command: DrawCommand);
}
