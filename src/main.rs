// src/main.rs
use log::{error, info, warn};
use nannou::prelude::*;

use cloudvis::{
    config::Config,
    controllers::{command_for_key, CloudCommand, OscController},
    draw::sky::sky_top,
    models::canvas_size_for_viewport,
    render::{CloudRenderer, RenderTarget, RenderedCloud},
    services::SceneExporter,
};

struct Model {
    config: Config,

    // Cloud state:
    renderer: CloudRenderer,
    current: RenderedCloud,

    // Comms components:
    osc_controller: Option<OscController>,

    // Rendering components:
    draw: nannou::Draw,
    target: RenderTarget,

    // Export:
    exporter: Option<SceneExporter>,

    needs_redraw: bool,
    save_requested: bool,
}

impl Model {
    fn canvas_size(&self) -> Vec2 {
        let [w, h] = self.target.size();
        vec2(w as f32, h as f32)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!("{}; using default settings", e);
        Config::default()
    });

    let canvas = canvas_size_for_viewport(
        config.window.initial_width as f32,
        config.window.max_width,
    );

    // Create window
    let window_id = app
        .new_window()
        .title("cloudvis")
        .size(canvas[0], canvas[1])
        .msaa_samples(1)
        .view(view)
        .key_pressed(key_pressed)
        .resized(resized)
        .build()
        .expect("Failed to build window");

    let target = {
        let window = app.window(window_id).expect("Window closed during setup");
        RenderTarget::new(&window, canvas, config.rendering.texture_samples)
    };

    // OSC is optional; the keyboard always works
    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => {
                info!("Listening for OSC on port {}", config.osc.rx_port);
                Some(controller)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    } else {
        None
    };

    let exporter = match SceneExporter::new(config.resolve_output_dir()) {
        Ok(exporter) => Some(exporter),
        Err(e) => {
            warn!("{}; saving is disabled", e);
            None
        }
    };

    let mut renderer = CloudRenderer::new(config.debug.initial_seed, config.debug.show_origin);
    let current = renderer.render_cumulus(vec2(canvas[0] as f32, canvas[1] as f32));

    info!("Keys: 1/C cumulus, 2/I cirrus, Space again, S save, O origin marker");

    Model {
        config,
        renderer,
        current,
        osc_controller,
        draw: nannou::Draw::new(),
        target,
        exporter,
        needs_redraw: true,
        save_requested: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if let Some(command) = command_for_key(key) {
        apply_command(model, command);
    }
}

fn resized(app: &App, model: &mut Model, dim: Vec2) {
    let canvas = canvas_size_for_viewport(dim.x, model.config.window.max_width);
    if canvas == model.target.size() {
        return;
    }

    let window = app.main_window();
    // let pending saves finish before their capturer goes away
    model.target.await_captures(&window);
    model.target = RenderTarget::new(&window, canvas, model.config.rendering.texture_samples);

    let kind = model.renderer.last_kind();
    apply_command(model, CloudCommand::Render(kind));
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // Process OSC messages
    let commands = model
        .osc_controller
        .as_mut()
        .map(|osc| {
            osc.process_messages();
            osc.take_commands()
        })
        .unwrap_or_default();
    for command in commands {
        apply_command(model, command);
    }

    if model.needs_redraw || model.save_requested {
        render_and_capture(app, model);
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    model.target.view(app, frame);
}

fn exit(app: &App, model: Model) {
    model.target.await_captures(&app.main_window());
}

// ******************************* Commands *******************************

fn apply_command(model: &mut Model, command: CloudCommand) {
    let size = model.canvas_size();
    match command {
        CloudCommand::Render(kind) => {
            model.current = model.renderer.render(kind, size);
            model.needs_redraw = true;
        }
        CloudCommand::RenderAgain => {
            let kind = model.renderer.last_kind();
            model.current = model.renderer.render(kind, size);
            model.needs_redraw = true;
        }
        CloudCommand::Save => model.save_requested = true,
        CloudCommand::ToggleOrigin => {
            model.renderer.toggle_origin();
            redraw_current(model);
        }
        CloudCommand::SetOrigin(show) => {
            model.renderer.set_show_origin(show);
            redraw_current(model);
        }
        CloudCommand::SetSeed(seed) => {
            model.renderer.set_seed(seed);
            info!("Seed counter set to {}", model.renderer.seed());
        }
    }
}

// Same cloud, current origin marker setting
fn redraw_current(model: &mut Model) {
    let size = model.canvas_size();
    let info = &model.current.info;
    model.current = model.renderer.render_with_seed(info.kind(), info.seed, size);
    model.needs_redraw = true;
}

// ******************************* Rendering and Capture *****************************

fn render_and_capture(app: &App, model: &mut Model) {
    let window = app.main_window();

    let draw = &model.draw;
    draw.reset();
    draw.background().color(sky_top());
    model.current.scene.draw(draw);

    if model.save_requested {
        match &model.exporter {
            Some(exporter) => {
                let info = &model.current.info;
                if let Err(e) = exporter.write_scene_info(info) {
                    error!("{}", e);
                }
                let path = exporter.png_path(info);
                if let Err(e) = model.target.render_and_capture(&window, &model.draw, path) {
                    error!("{}", e);
                }
            }
            None => {
                warn!("No output directory available; nothing saved");
                model.target.render(&window, &model.draw);
            }
        }
    } else {
        model.target.render(&window, &model.draw);
    }

    model.needs_redraw = false;
    model.save_requested = false;
}
