// src/render/scene.rs
//
// A Scene records draw commands so a finished render can be painted every
// frame or inspected.

use nannou::prelude::*;

use crate::draw::{Canvas, DrawCommand};

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Paints the scene onto a nannou `Draw` centered on the canvas.
    pub fn draw(&self, draw: &Draw) {
        for command in &self.commands {
            command.draw(draw, self.size);
        }
    }

    /// (start, end, color, weight) of each line.
    pub fn lines(&self) -> impl Iterator<Item = (Point2, Point2, Rgba, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line {
                start,
                end,
                color,
                weight,
            } => Some((*start, *end, *color, *weight)),
            _ => None,
        })
    }

    /// (center, w, h, rotation, color) of each ellipse.
    pub fn ellipses(&self) -> impl Iterator<Item = (Point2, f32, f32, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Ellipse {
                center,
                w,
                h,
                rotation,
                color,
            } => Some((*center, *w, *h, *rotation, *color)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[(Point2, Rgba)]> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { vertices, .. } => Some(vertices.as_slice()),
            _ => None,
        })
    }
}

impl Canvas for Scene {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
