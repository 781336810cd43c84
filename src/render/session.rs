// src/render/session.rs

use crate::utilities::{CloudRng, NoiseField};

/// Random and noise sources for one render pass, both seeded from the same value.
pub struct RenderSession {
    pub rng: CloudRng,
    pub noise: NoiseField,
}

impl RenderSession {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: CloudRng::new(seed),
            noise: NoiseField::new(seed),
        }
    }
}
