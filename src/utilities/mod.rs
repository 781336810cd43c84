pub mod easing;
pub mod noise_field;
pub mod random;

pub use easing::{color255, lerp, lerp_color, smoothstep};
pub use noise_field::NoiseField;
pub use random::CloudRng;
