pub mod cloud;
pub mod geometry;

pub use cloud::{CirrusParams, CloudKind, CloudParams, CumulusParams, SceneInfo};
pub use geometry::{canvas_size_for_viewport, letterbox_size, Transform2D};
