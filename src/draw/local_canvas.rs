// src/draw/local_canvas.rs
//
// A view onto a Canvas through an explicit transform. Nested frames are new
// views borrowed from the parent, so the parent's transform is untouched
// once the nested view is dropped.

use nannou::prelude::*;

use super::{Canvas, DrawCommand};
use crate::models::Transform2D;

pub struct LocalCanvas<'a, C: Canvas + ?Sized> {
    target: &'a mut C,
    transform: Transform2D,
}

impl<'a, C: Canvas + ?Sized> LocalCanvas<'a, C> {
    /// View in plain canvas coordinates.
    pub fn new(target: &'a mut C) -> Self {
        Self {
            target,
            transform: Transform2D::default(),
        }
    }

    pub fn translated(&mut self, offset: Vec2) -> LocalCanvas<'_, C> {
        LocalCanvas {
            transform: self.transform.translated(offset),
            target: &mut *self.target,
        }
    }

    pub fn rotated(&mut self, angle: f32) -> LocalCanvas<'_, C> {
        LocalCanvas {
            transform: self.transform.rotated(angle),
            target: &mut *self.target,
        }
    }

    pub fn transform(&self) -> Transform2D {
        self.transform
    }

    /// Size of the underlying canvas.
    pub fn size(&self) -> Vec2 {
        self.target.size()
    }

    pub fn line(&mut self, start: Point2, end: Point2, color: Rgba, weight: f32) {
        self.target.push(DrawCommand::Line {
            start: self.transform.apply_to_point(start),
            end: self.transform.apply_to_point(end),
            color,
            weight,
        });
    }

    pub fn ellipse(&mut self, center: Point2, w: f32, h: f32, color: Rgba) {
        self.target.push(DrawCommand::Ellipse {
            center: self.transform.apply_to_point(center),
            w,
            h,
            rotation: self.transform.rotation,
            color,
        });
    }

    pub fn polyline<I>(&mut self, vertices: I, weight: f32)
    where
        I: IntoIterator<Item = (Point2, Rgba)>,
    {
        let transform = self.transform;
        let vertices = vertices
            .into_iter()
            .map(|(p, color)| (transform.apply_to_point(p), color))
            .collect();
        self.target.push(DrawCommand::Polyline { vertices, weight });
    }
}
