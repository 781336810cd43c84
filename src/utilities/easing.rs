//src/utilities/easing.rs

// interpolation and easing helpers shared by the cloud generators

use nannou::prelude::*;

/// Linear interpolation with `t` clamped to [0, 1].
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    start * (1.0 - t) + end * t
}

/// Clamped cubic smoothstep. `edge0` must be less than `edge1`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0) as f64;
    // the cubic is evaluated in f64; in f32 it can step back by an ulp near t = 1
    (t * t * (3.0 - 2.0 * t)) as f32
}

/// Component-wise blend of two colors, alpha included.
pub fn lerp_color(start: Rgba, end: Rgba, t: f32) -> Rgba {
    rgba(
        lerp(start.red, end.red, t),
        lerp(start.green, end.green, t),
        lerp(start.blue, end.blue, t),
        lerp(start.alpha, end.alpha, t),
    )
}

/// Builds a color from 0-255 channel values, the way the palettes are written down.
pub fn color255(r: f32, g: f32, b: f32, a: f32) -> Rgba {
    rgba(r / 255.0, g / 255.0, b / 255.0, a / 255.0)
}
