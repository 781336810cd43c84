// src/render/render_target.rs
//
// Off-screen texture the scene is drawn into. The multisampled texture is
// resolved into a plain one that the window view letterboxes onto the
// frame, and the capturer reads it back for PNG export.

use log::error;
use nannou::prelude::*;
use nannou::window::Window;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::letterbox_size;
use crate::services::save_png;

const RESOLVED_TEXTURE_FORMAT: wgpu::TextureFormat = Frame::TEXTURE_FORMAT;

pub struct RenderTarget {
    texture: wgpu::Texture,
    resolved_texture: wgpu::Texture, // single-sampled copy the view draws from
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,
    texture_capturer: wgpu::TextureCapturer,
}

impl RenderTarget {
    pub fn new(window: &Window, size: [u32; 2], texture_samples: u32) -> Self {
        let device = window.device();
        let texture = wgpu::TextureBuilder::new()
            .size(size)
            // RENDER_ATTACHMENT for the Draw pass, TEXTURE_BINDING for the reshaper and capturer
            .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
            .sample_count(texture_samples)
            .format(wgpu::TextureFormat::Rgba16Float)
            .build(device);

        let draw_renderer = nannou::draw::RendererBuilder::new()
            .build_from_texture_descriptor(device, texture.descriptor());

        let resolved_texture = wgpu::TextureBuilder::new()
            .size(size)
            .sample_count(1)
            .format(RESOLVED_TEXTURE_FORMAT)
            .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
            .build(device);

        let texture_view = texture.view().build();
        let texture_reshaper = wgpu::TextureReshaper::new(
            device,
            &texture_view,
            texture.sample_count(), // source samples
            texture.sample_type(),
            1, // destination samples (no MSAA)
            RESOLVED_TEXTURE_FORMAT,
        );

        Self {
            texture,
            resolved_texture,
            draw_renderer,
            texture_reshaper,
            texture_capturer: wgpu::TextureCapturer::default(),
        }
    }

    pub fn size(&self) -> [u32; 2] {
        self.texture.size()
    }

    /// Encodes the draw into the texture and submits it.
    pub fn render(&mut self, window: &Window, draw: &Draw) {
        let encoder = self.encode(window, draw, "Scene renderer");
        window.queue().submit(Some(encoder.finish()));
    }

    /// Renders like `render`, then reads the texture back and saves it as a PNG at `path`.
    /// The save completes asynchronously; failures are logged.
    pub fn render_and_capture(&mut self, window: &Window, draw: &Draw, path: PathBuf) -> Result<()> {
        let mut encoder = self.encode(window, draw, "Scene capture");
        let snapshot = self
            .texture_capturer
            .capture(window.device(), &mut encoder, &self.texture);
        window.queue().submit(Some(encoder.finish()));

        snapshot
            .read(move |result| match result {
                Ok(image) => {
                    if let Err(e) = save_png(&image.to_owned(), &path) {
                        error!("{}", e);
                    }
                }
                Err(e) => error!("Failed to map capture of {}: {:?}", path.display(), e),
            })
            .map_err(|e| Error::Export(format!("{:?}", e)))
    }

    /// Blocks until every pending capture has been handed to its callback.
    pub fn await_captures(&self, window: &Window) {
        if let Err(e) = self.texture_capturer.await_active_snapshots(window.device()) {
            error!("Pending captures did not finish: {:?}", e);
        }
    }

    /// Draws the canvas centered in the window at its own aspect ratio, shrunk
    /// if the window is too small and never stretched.
    pub fn view(&self, app: &App, frame: Frame) {
        let fitted = letterbox_size(self.size(), app.window_rect().wh());

        let draw = app.draw();
        draw.background().color(BLACK);
        draw.texture(&self.resolved_texture).w_h(fitted.x, fitted.y);

        if let Err(e) = draw.to_frame(app, &frame) {
            error!("Failed to draw the canvas to the window: {:?}", e);
        }
    }

    fn encode(&mut self, window: &Window, draw: &Draw, label: &str) -> wgpu::CommandEncoder {
        let device = window.device();
        let ce_desc = wgpu::CommandEncoderDescriptor { label: Some(label) };
        let mut encoder = device.create_command_encoder(&ce_desc);
        let texture_view = self.texture.view().build();

        // scale factor 1: one draw unit per texture pixel
        self.draw_renderer.encode_render_pass(
            device,
            &mut encoder,
            draw,
            1.0,
            self.texture.size(),
            &texture_view,
            None,
        );

        // resolve MSAA for the window view
        self.texture_reshaper
            .encode_render_pass(&self.resolved_texture.view().build(), &mut encoder);
        encoder
    }
}
