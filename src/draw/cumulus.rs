// src/draw/cumulus.rs
//
// Cumulus in local space: three overlapping puff clusters sampled inside
// ellipses around the origin, back to front, then a speckle of mist
// along the rim to soften the silhouette.

use nannou::prelude::*;

use super::{Canvas, LocalCanvas};
use crate::models::CumulusParams;
use crate::render::RenderSession;
use crate::utilities::{color255, lerp};

// sample ellipse half-axes, as a fraction of the cluster size
const CLUSTER_SPREAD: f32 = 0.52;
const PUFF_JITTER: f32 = 0.03;
const PUFF_NOISE_SCALE: f32 = 0.006;
const PUFF_NOISE_BIAS: f32 = 1000.0;
const PUFF_ASPECT: f32 = 1.25;

pub const MIST_DOTS: usize = 1600;
const MIST_JITTER: f32 = 0.02;
const MIST_NOISE_SCALE: f32 = 0.01;
const MIST_NOISE_BIAS: f32 = 2000.0;
const MIST_MAX_ALPHA: f32 = 45.0;

/// One layer of puffs. `width`/`height` are the cluster's own size, already scaled from the cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuffLayer {
    pub width: f32,
    pub height: f32,
    pub color: Rgba,
    pub count: usize,
    pub offset: Vec2,
}

impl PuffLayer {
    /// Half-axes of the ellipse the puff centers are sampled from.
    pub fn sample_radii(&self) -> (f32, f32) {
        (self.width * CLUSTER_SPREAD, self.height * CLUSTER_SPREAD)
    }
}

/// Shadow, body and highlight layers in drawing order.
pub fn cumulus_layers(params: &CumulusParams) -> [PuffLayer; 3] {
    let (w, h) = (params.width, params.height);
    [
        // underbelly shadow
        PuffLayer {
            width: w * 0.98,
            height: h * 0.85,
            color: color255(210.0, 225.0, 240.0, 120.0),
            count: 260,
            offset: vec2(0.0, h * 0.10),
        },
        // body
        PuffLayer {
            width: w,
            height: h,
            color: color255(255.0, 255.0, 255.0, 170.0),
            count: 320,
            offset: Vec2::ZERO,
        },
        // highlight, up and to the left
        PuffLayer {
            width: w * 0.75,
            height: h * 0.65,
            color: color255(255.0, 255.0, 255.0, 150.0),
            count: 200,
            offset: vec2(-w * 0.06, -h * 0.16),
        },
    ]
}

pub fn draw_cumulus_local<C: Canvas + ?Sized>(
    canvas: &mut LocalCanvas<C>,
    session: &mut RenderSession,
    params: &CumulusParams,
) {
    for layer in cumulus_layers(params).iter() {
        draw_puff_cluster_local(canvas, session, layer);
    }
    soft_mist_local(canvas, session, params);
}

pub fn draw_puff_cluster_local<C: Canvas + ?Sized>(
    canvas: &mut LocalCanvas<C>,
    session: &mut RenderSession,
    layer: &PuffLayer,
) {
    let (w, h) = (layer.width, layer.height);
    let (rx, ry) = layer.sample_radii();

    for _ in 0..layer.count {
        let p = session.rng.sample_point_in_ellipse(rx, ry);

        let px = p.x + layer.offset.x + session.rng.gaussian(0.0, w * PUFF_JITTER);
        let py = p.y + layer.offset.y + session.rng.gaussian(0.0, h * PUFF_JITTER);

        // noise varies puff size smoothly across the shape
        let n = session.noise.get(
            (px + PUFF_NOISE_BIAS) * PUFF_NOISE_SCALE,
            (py + PUFF_NOISE_BIAS) * PUFF_NOISE_SCALE,
        );
        let r = lerp(w * 0.06, w * 0.15, n) * session.rng.range(0.7, 1.15);

        canvas.ellipse(pt2(px, py), r * PUFF_ASPECT, r, layer.color);
    }
}

pub fn soft_mist_local<C: Canvas + ?Sized>(
    canvas: &mut LocalCanvas<C>,
    session: &mut RenderSession,
    params: &CumulusParams,
) {
    let (w, h) = (params.width, params.height);

    for _ in 0..MIST_DOTS {
        let angle = session.rng.angle();

        // rim band
        let rr_x = session.rng.range(0.45, 0.75) * (w * 0.5);
        let rr_y = session.rng.range(0.45, 0.75) * (h * 0.5);

        let px = angle.cos() * rr_x + session.rng.gaussian(0.0, w * MIST_JITTER);
        let py = angle.sin() * rr_y + session.rng.gaussian(0.0, h * MIST_JITTER);

        let n = session.noise.get(
            (px + MIST_NOISE_BIAS) * MIST_NOISE_SCALE,
            (py + MIST_NOISE_BIAS) * MIST_NOISE_SCALE,
        );
        let alpha = lerp(0.0, MIST_MAX_ALPHA, n);

        let size = session.rng.range(6.0, 18.0);
        canvas.ellipse(pt2(px, py), size, size, color255(255.0, 255.0, 255.0, alpha));
    }
}
