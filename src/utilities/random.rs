// src/utilities/random.rs
//
// Seeded random source for a single render pass

use nannou::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::TAU;

// Rejection sampling gives up after this many misses and returns the center
const MAX_ELLIPSE_ATTEMPTS: usize = 64;

/// Uniform and gaussian sampling from one seeded generator, so a render is
/// reproducible from its seed alone.
#[derive(Debug, Clone)]
pub struct CloudRng {
    rng: StdRng,
    spare_gaussian: Option<f32>,
}

impl CloudRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
            spare_gaussian: None,
        }
    }

    /// Uniform in [lo, hi]. Returns `lo` when the range is empty.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        // rounding can land a hair past `hi`
        (lo + (hi - lo) * self.rng.gen::<f32>()).min(hi)
    }

    /// Uniform integer in [lo, hi).
    pub fn int_range(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Uniform angle in [0, 2pi).
    pub fn angle(&mut self) -> f32 {
        self.range(0.0, TAU)
    }

    /// Normal sample using the polar method; the second value of each pair is kept for the next call.
    pub fn gaussian(&mut self, mean: f32, std_dev: f32) -> f32 {
        if let Some(spare) = self.spare_gaussian.take() {
            return mean + std_dev * spare;
        }

        loop {
            let u = self.rng.gen_range(-1.0f32..1.0);
            let v = self.rng.gen_range(-1.0f32..1.0);
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let m = (-2.0 * s.ln() / s).sqrt();
                self.spare_gaussian = Some(v * m);
                return mean + std_dev * u * m;
            }
        }
    }

    /// Uniform point inside the origin-centered ellipse with half-axes (rx, ry).
    pub fn sample_point_in_ellipse(&mut self, rx: f32, ry: f32) -> Point2 {
        if rx <= 0.0 || ry <= 0.0 {
            return pt2(0.0, 0.0);
        }

        for _ in 0..MAX_ELLIPSE_ATTEMPTS {
            let x = self.range(-rx, rx);
            let y = self.range(-ry, ry);
            if (x * x) / (rx * rx) + (y * y) / (ry * ry) <= 1.0 {
                return pt2(x, y);
            }
        }
        pt2(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = CloudRng::new(7);
        let mut b = CloudRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.range(0.0, 10.0), b.range(0.0, 10.0));
            assert_eq!(a.gaussian(0.0, 1.0), b.gaussian(0.0, 1.0));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = CloudRng::new(1);
        let mut b = CloudRng::new(2);
        let xs: Vec<f32> = (0..8).map(|_| a.range(0.0, 1.0)).collect();
        let ys: Vec<f32> = (0..8).map(|_| b.range(0.0, 1.0)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_empty_range_returns_lower_bound() {
        let mut rng = CloudRng::new(3);
        assert_eq!(rng.range(5.0, 5.0), 5.0);
        assert_eq!(rng.range(5.0, 1.0), 5.0);
        assert_eq!(rng.int_range(30, 30), 30);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = CloudRng::new(11);
        let n = 20_000;
        let samples: Vec<f32> = (0..n).map(|_| rng.gaussian(3.0, 2.0)).collect();
        let mean = samples.iter().sum::<f32>() / n as f32;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f32>() / n as f32;
        assert!((mean - 3.0).abs() < 0.1, "mean was {}", mean);
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std dev was {}", var.sqrt());
    }

    #[test]
    fn test_degenerate_ellipse_returns_center() {
        let mut rng = CloudRng::new(5);
        assert_eq!(rng.sample_point_in_ellipse(0.0, 10.0), pt2(0.0, 0.0));
        assert_eq!(rng.sample_point_in_ellipse(10.0, -1.0), pt2(0.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_point_in_ellipse(seed in 1u32..10_000, rx in 0.01f32..1000.0, ry in 0.01f32..1000.0) {
            let mut rng = CloudRng::new(seed);
            for _ in 0..32 {
                let p = rng.sample_point_in_ellipse(rx, ry);
                prop_assert!((p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry) <= 1.0);
            }
        }

        #[test]
        fn prop_range_stays_in_bounds(seed in 1u32..10_000, lo in -1000.0f32..1000.0, span in 0.001f32..1000.0) {
            let mut rng = CloudRng::new(seed);
            let hi = lo + span;
            let v = rng.range(lo, hi);
            prop_assert!(v >= lo && v <= hi);
        }

        #[test]
        fn prop_int_range_is_half_open(seed in 1u32..10_000) {
            let mut rng = CloudRng::new(seed);
            let v = rng.int_range(30, 54);
            prop_assert!((30..54).contains(&v));
        }
    }
}
