// src/render/cloud_renderer.rs
//
// Drives one render pass: reseed, paint the sky, pick an origin, then draw
// the cloud in a frame translated (and for cirrus rotated) to that origin.

use log::info;
use nannou::prelude::*;

use super::{RenderSession, Scene};
use crate::draw::{
    cirrus::draw_cirrus_local, cumulus::draw_cumulus_local, origin_marker::draw_origin_cross,
    sky::draw_sky, LocalCanvas,
};
use crate::models::{CirrusParams, CloudKind, CloudParams, CumulusParams, SceneInfo};
use crate::utilities::CloudRng;

// Origin region as fractions of the canvas
const ORIGIN_X_RANGE: (f32, f32) = (0.25, 0.75);
const ORIGIN_Y_RANGE: (f32, f32) = (0.25, 0.55);

/// A finished render: the recorded scene and how to reproduce it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCloud {
    pub scene: Scene,
    pub info: SceneInfo,
}

/// Holds the seed counter and the origin marker flag between renders.
#[derive(Debug, Clone)]
pub struct CloudRenderer {
    seed: u32,
    show_origin: bool,
    last_kind: CloudKind,
}

impl Default for CloudRenderer {
    fn default() -> Self {
        Self::new(1, false)
    }
}

impl CloudRenderer {
    /// `seed` is the counter's starting value; the first render uses `seed + 1`.
    pub fn new(seed: u32, show_origin: bool) -> Self {
        Self {
            seed,
            show_origin,
            last_kind: CloudKind::Cumulus,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sets the counter; the next render uses `seed + 1`.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
    }

    pub fn show_origin(&self) -> bool {
        self.show_origin
    }

    pub fn set_show_origin(&mut self, show: bool) {
        self.show_origin = show;
    }

    pub fn toggle_origin(&mut self) {
        self.show_origin = !self.show_origin;
    }

    /// Kind of the most recent render, cumulus before any render.
    pub fn last_kind(&self) -> CloudKind {
        self.last_kind
    }

    pub fn render_cumulus(&mut self, canvas_size: Vec2) -> RenderedCloud {
        self.render(CloudKind::Cumulus, canvas_size)
    }

    pub fn render_cirrus(&mut self, canvas_size: Vec2) -> RenderedCloud {
        self.render(CloudKind::Cirrus, canvas_size)
    }

    /// Advances the seed and renders a fresh cloud of `kind`.
    pub fn render(&mut self, kind: CloudKind, canvas_size: Vec2) -> RenderedCloud {
        self.seed = self.seed.checked_add(1).unwrap_or(1);
        self.last_kind = kind;
        self.render_with_seed(kind, self.seed, canvas_size)
    }

    /// Renders `kind` at an explicit seed. The counter is left alone.
    pub fn render_with_seed(&self, kind: CloudKind, seed: u32, canvas_size: Vec2) -> RenderedCloud {
        let mut session = RenderSession::new(seed);
        let mut scene = Scene::new(canvas_size);

        let mut canvas = LocalCanvas::new(&mut scene);
        draw_sky(&mut canvas);

        let origin = sample_origin(&mut session.rng, canvas_size);

        let params = {
            let mut local = canvas.translated(origin);
            if self.show_origin {
                draw_origin_cross(&mut local);
            }

            match kind {
                CloudKind::Cumulus => {
                    let params = CumulusParams::sample(&mut session.rng);
                    draw_cumulus_local(&mut local, &mut session, &params);
                    CloudParams::Cumulus(params)
                }
                CloudKind::Cirrus => {
                    let params = CirrusParams::sample(&mut session.rng);
                    let mut rotated = local.rotated(params.angle);
                    draw_cirrus_local(&mut rotated, &mut session, &params);
                    CloudParams::Cirrus(params)
                }
            }
        };

        info!(
            "Rendered {} with seed {} at ({:.0}, {:.0}), {} draw commands",
            kind.name(),
            seed,
            origin.x,
            origin.y,
            scene.len()
        );

        RenderedCloud {
            info: SceneInfo {
                seed,
                canvas_width: canvas_size.x,
                canvas_height: canvas_size.y,
                origin: [origin.x, origin.y],
                show_origin: self.show_origin,
                params,
            },
            scene,
        }
    }
}

/// Cloud origin: x in 25-75% of the width, y in 25-55% of the height.
pub fn sample_origin(rng: &mut CloudRng, canvas_size: Vec2) -> Point2 {
    let x = rng.range(
        canvas_size.x * ORIGIN_X_RANGE.0,
        canvas_size.x * ORIGIN_X_RANGE.1,
    );
    let y = rng.range(
        canvas_size.y * ORIGIN_Y_RANGE.0,
        canvas_size.y * ORIGIN_Y_RANGE.1,
    );
    pt2(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn canvas() -> Vec2 {
        vec2(960.0, 640.0)
    }

    #[test]
    fn test_seed_advances_before_each_render() {
        let mut renderer = CloudRenderer::new(1, false);
        let first = renderer.render_cumulus(canvas());
        assert_eq!(first.info.seed, 2);
        let second = renderer.render_cirrus(canvas());
        assert_eq!(second.info.seed, 3);
        assert_eq!(renderer.seed(), 3);
        assert_eq!(renderer.last_kind(), CloudKind::Cirrus);
    }

    #[test]
    fn test_render_with_seed_leaves_counter() {
        let renderer = CloudRenderer::new(10, false);
        let rendered = renderer.render_with_seed(CloudKind::Cirrus, 99, canvas());
        assert_eq!(rendered.info.seed, 99);
        assert_eq!(renderer.seed(), 10);
    }

    #[test]
    fn test_render_can_be_reproduced_from_its_info() {
        let mut renderer = CloudRenderer::new(1, false);
        let rendered = renderer.render_cirrus(canvas());
        let info = &rendered.info;
        let again = renderer.render_with_seed(
            info.kind(),
            info.seed,
            vec2(info.canvas_width, info.canvas_height),
        );
        assert_eq!(again, rendered);
    }

    #[test]
    fn test_origin_marker_toggle() {
        let mut renderer = CloudRenderer::new(1, false);
        let plain = renderer.render_with_seed(CloudKind::Cumulus, 5, canvas());
        renderer.toggle_origin();
        assert!(renderer.show_origin());
        let marked = renderer.render_with_seed(CloudKind::Cumulus, 5, canvas());

        // the two cross lines sit between the sky and the cloud
        assert_eq!(marked.scene.lines().count(), plain.scene.lines().count() + 2);
        assert_eq!(marked.scene.len(), plain.scene.len() + 2);
        assert!(marked.info.show_origin);

        let origin = pt2(marked.info.origin[0], marked.info.origin[1]);
        let cross: Vec<_> = marked.scene.lines().skip(640).collect();
        assert!(((cross[0].0 + cross[0].1) * 0.5 - origin).length() < 1e-3);

        // toggling the marker does not move the cloud
        assert_eq!(marked.info.params, plain.info.params);
        assert_eq!(marked.info.origin, plain.info.origin);
    }

    #[test]
    fn test_cirrus_frame_is_rotated_by_angle() {
        let renderer = CloudRenderer::default();
        let rendered = renderer.render_with_seed(CloudKind::Cirrus, 8, canvas());
        let CloudParams::Cirrus(params) = rendered.info.params else {
            panic!("expected cirrus params");
        };
        assert!(rendered
            .scene
            .ellipses()
            .all(|(_, _, _, rotation, _)| (rotation - params.angle).abs() < 1e-6));
    }

    #[test]
    fn test_next_render_follows_set_seed() {
        let mut renderer = CloudRenderer::new(1, false);
        renderer.set_seed(0);
        assert_eq!(renderer.render_cumulus(canvas()).info.seed, 1);

        renderer.set_seed(41);
        assert_eq!(renderer.render_cirrus(canvas()).info.seed, 42);

        let fresh = CloudRenderer::new(0, false);
        assert_eq!(fresh.seed(), 0);
    }

    #[test]
    fn test_seed_wraps_to_one() {
        let mut renderer = CloudRenderer::new(u32::MAX, false);
        let rendered = renderer.render_cumulus(vec2(300.0, 200.0));
        assert_eq!(rendered.info.seed, 1);
    }

    proptest! {
        #[test]
        fn prop_origin_within_region(seed in 1u32..100_000, w in 1.0f32..4000.0, h in 1.0f32..4000.0) {
            let mut rng = CloudRng::new(seed);
            let origin = sample_origin(&mut rng, vec2(w, h));
            prop_assert!(origin.x >= 0.25 * w && origin.x <= 0.75 * w);
            prop_assert!(origin.y >= 0.25 * h && origin.y <= 0.55 * h);
        }
    }
}
