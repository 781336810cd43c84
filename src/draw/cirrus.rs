// src/draw/cirrus.rs
//
// Cirrus in local space: wavy filaments along the x axis with faded tips,
// then a haze of small translucent ellipses. The caller rotates the frame.

use nannou::prelude::*;

use super::{Canvas, LocalCanvas};
use crate::models::CirrusParams;
use crate::render::RenderSession;
use crate::utilities::{color255, lerp, smoothstep};

pub const FILAMENTS: usize = 280;
pub const END_SPREAD: f32 = 40.0; // max shift of each filament end along x
const FILAMENT_SPREAD: f32 = 0.28;
const FILAMENT_MAX_ALPHA: f32 = 90.0;
const FADE_IN_END: f32 = 0.14;
const FADE_OUT_START: f32 = 0.86;
const FILAMENT_NOISE_SCALE: (f32, f32) = (0.004, 0.02);
const FILAMENT_NOISE_BIAS: f32 = 5000.0;

pub const HAZE_DOTS: usize = 1200;
const HAZE_REACH: f32 = 0.55;
const HAZE_SPREAD: f32 = 0.35;
const HAZE_MAX_ALPHA: f32 = 55.0;
const HAZE_NOISE_SCALE: (f32, f32) = (0.006, 0.02);
const HAZE_NOISE_BIAS: f32 = 7000.0;

/// Fade along a filament: 0 at both tips, 1 through the middle.
pub fn filament_fade(t: f32) -> f32 {
    smoothstep(0.0, FADE_IN_END, t) * (1.0 - smoothstep(FADE_OUT_START, 1.0, t))
}

/// Stroke alpha (0-255 scale) of a filament vertex at parameter `t`.
pub fn filament_alpha(t: f32) -> f32 {
    FILAMENT_MAX_ALPHA * filament_fade(t)
}

pub fn draw_cirrus_local<C: Canvas + ?Sized>(
    canvas: &mut LocalCanvas<C>,
    session: &mut RenderSession,
    params: &CirrusParams,
) {
    for _ in 0..FILAMENTS {
        let vertices = sample_filament(session, params);
        canvas.polyline(vertices, 1.0);
    }
    draw_haze_local(canvas, session, params);
}

/// Vertices of one filament with their stroke colors.
pub fn sample_filament(session: &mut RenderSession, params: &CirrusParams) -> Vec<(Point2, Rgba)> {
    let len = params.length;
    let y_base = session.rng.gaussian(0.0, params.thickness * FILAMENT_SPREAD);

    let x0 = -len * 0.5 + session.rng.range(-END_SPREAD, END_SPREAD);
    let x1 = len * 0.5 + session.rng.range(-END_SPREAD, END_SPREAD);

    let wav = session.rng.range(8.0, 26.0);
    let steps = session.rng.int_range(30, 54);

    (0..=steps)
        .map(|s| {
            let t = s as f32 / steps as f32;
            let x = lerp(x0, x1, t);

            let n = session.noise.get(
                (x + FILAMENT_NOISE_BIAS) * FILAMENT_NOISE_SCALE.0,
                (y_base + FILAMENT_NOISE_BIAS) * FILAMENT_NOISE_SCALE.1,
            );
            let y = y_base + (n - 0.5) * wav;

            (pt2(x, y), color255(255.0, 255.0, 255.0, filament_alpha(t)))
        })
        .collect()
}

pub fn draw_haze_local<C: Canvas + ?Sized>(
    canvas: &mut LocalCanvas<C>,
    session: &mut RenderSession,
    params: &CirrusParams,
) {
    let reach = params.length * HAZE_REACH;

    for _ in 0..HAZE_DOTS {
        let x = session.rng.range(-reach, reach);
        let y = session.rng.gaussian(0.0, params.thickness * HAZE_SPREAD);
        let n = session.noise.get(
            (x + HAZE_NOISE_BIAS) * HAZE_NOISE_SCALE.0,
            (y + HAZE_NOISE_BIAS) * HAZE_NOISE_SCALE.1,
        );
        let alpha = lerp(0.0, HAZE_MAX_ALPHA, n);

        let w = session.rng.range(3.0, 12.0);
        let h = session.rng.range(3.0, 10.0);
        canvas.ellipse(pt2(x, y), w, h, color255(255.0, 255.0, 255.0, alpha));
    }
}
