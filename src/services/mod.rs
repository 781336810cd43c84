pub mod scene_export;

pub use scene_export::{save_png, SceneExporter};
