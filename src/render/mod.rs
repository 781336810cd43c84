// src/render/mod.rs
// Render passes and the GPU target they are drawn into

pub mod cloud_renderer;
pub mod render_target;
pub mod scene;
pub mod session;

pub use cloud_renderer::{sample_origin, CloudRenderer, RenderedCloud};
pub use render_target::RenderTarget;
pub use scene::Scene;
pub use session::RenderSession;
