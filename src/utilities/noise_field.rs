// src/utilities/noise_field.rs
//
// Seeded 2D smooth noise in [0, 1]: a few octaves of Perlin noise summed
// with halving amplitude, then remapped from [-1, 1].

use nannou::noise::{NoiseFn, Perlin, Seedable};

const OCTAVES: u32 = 4;
const FALLOFF: f64 = 0.5;

pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new().set_seed(seed),
        }
    }

    pub fn get(&self, x: f32, y: f32) -> f32 {
        let mut amp = 0.5;
        let mut freq = 1.0;
        let mut sum = 0.0;
        let mut norm = 0.0;

        for _ in 0..OCTAVES {
            sum += self.perlin.get([x as f64 * freq, y as f64 * freq]) * amp;
            norm += amp;
            amp *= FALLOFF;
            freq *= 2.0;
        }

        let val = sum / norm; // [-1,1]
        ((val + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }
}
