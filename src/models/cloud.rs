// src/models/cloud.rs
// Cloud kinds, their sampled shape parameters and the description of a finished render

use log::debug;
use serde::{Deserialize, Serialize};

use crate::utilities::CloudRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudKind {
    Cumulus,
    Cirrus,
}

impl CloudKind {
    pub fn name(&self) -> &'static str {
        match self {
            CloudKind::Cumulus => "cumulus",
            CloudKind::Cirrus => "cirrus",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulusParams {
    pub width: f32,
    pub height: f32,
}

impl CumulusParams {
    pub const WIDTH_RANGE: (f32, f32) = (320.0, 520.0);
    pub const ASPECT_RANGE: (f32, f32) = (0.35, 0.55);

    pub fn sample(rng: &mut CloudRng) -> Self {
        let width = rng.range(Self::WIDTH_RANGE.0, Self::WIDTH_RANGE.1);
        let height = width * rng.range(Self::ASPECT_RANGE.0, Self::ASPECT_RANGE.1);
        debug!("cumulus params: width {:.1}, height {:.1}", width, height);
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirrusParams {
    pub length: f32,
    pub thickness: f32,
    pub angle: f32, // radians
}

impl CirrusParams {
    pub const LENGTH_RANGE: (f32, f32) = (520.0, 820.0);
    pub const THICKNESS_RANGE: (f32, f32) = (40.0, 90.0);
    pub const ANGLE_RANGE: (f32, f32) = (-0.25, 0.25);

    pub fn sample(rng: &mut CloudRng) -> Self {
        let length = rng.range(Self::LENGTH_RANGE.0, Self::LENGTH_RANGE.1);
        let thickness = rng.range(Self::THICKNESS_RANGE.0, Self::THICKNESS_RANGE.1);
        let angle = rng.range(Self::ANGLE_RANGE.0, Self::ANGLE_RANGE.1);
        debug!(
            "cirrus params: length {:.1}, thickness {:.1}, angle {:.3}",
            length, thickness, angle
        );
        Self {
            length,
            thickness,
            angle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CloudParams {
    Cumulus(CumulusParams),
    Cirrus(CirrusParams),
}

impl CloudParams {
    pub fn kind(&self) -> CloudKind {
        match self {
            CloudParams::Cumulus(_) => CloudKind::Cumulus,
            CloudParams::Cirrus(_) => CloudKind::Cirrus,
        }
    }
}

/// Everything needed to reproduce a render: feed `seed` and the canvas size back
/// into `CloudRenderer::render_with_seed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneInfo {
    pub seed: u32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub origin: [f32; 2],
    pub show_origin: bool,
    pub params: CloudParams,
}

impl SceneInfo {
    pub fn kind(&self) -> CloudKind {
        self.params.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_params_serialize_with_kind_tag() {
        let params = CloudParams::Cirrus(CirrusParams {
            length: 600.0,
            thickness: 50.0,
            angle: 0.1,
        });
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(json["kind"], "cirrus");
        assert_eq!(json["length"], 600.0);

        let back: CloudParams = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), CloudKind::Cirrus);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CloudKind::Cumulus.name(), "cumulus");
        assert_eq!(CloudKind::Cirrus.name(), "cirrus");
    }

    proptest! {
        #[test]
        fn prop_cumulus_params_in_range(seed in 1u32..100_000) {
            let mut rng = CloudRng::new(seed);
            let p = CumulusParams::sample(&mut rng);
            prop_assert!(p.width >= 320.0 && p.width <= 520.0);
            let f = p.height / p.width;
            prop_assert!(f >= 0.35 - 1e-5 && f <= 0.55 + 1e-5);
        }

        #[test]
        fn prop_cirrus_params_in_range(seed in 1u32..100_000) {
            let mut rng = CloudRng::new(seed);
            let p = CirrusParams::sample(&mut rng);
            prop_assert!(p.length >= 520.0 && p.length <= 820.0);
            prop_assert!(p.thickness >= 40.0 && p.thickness <= 90.0);
            prop_assert!(p.angle >= -0.25 && p.angle <= 0.25);
        }
    }
}
