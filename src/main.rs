//! poly4d - 4D polytope viewer
//!
//! Rotates 4D polytopes in six planes and shows their perspective projection
//! into 3D.
//!
//! Controls:
//! - Space: next scene
//! - Right/Left: next/previous rotation axis
//! - M: toggle single-axis / all-axes rotation
//! - Z/X (held): zoom out/in
//! - F: toggle fullscreen
//! - Escape: exit

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use poly4d::config::AppConfig;
use poly4d::input::{InputAction, InputMapper};
use poly4d::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};
use poly4d_core::PolytopeLibrary;
use poly4d_render::Camera3D;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    library: PolytopeLibrary,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    animation: AnimationSystem,
    camera: Camera3D,
    /// Most recent frame rate sample
    fps: Option<f32>,
}

impl App {
    fn new(config: AppConfig, library: PolytopeLibrary) -> Self {
        let animation = AnimationSystem::new(
            config.animation.to_settings(),
            config.initial_state(),
            config.camera.to_zoom_controller(),
        );
        let camera = config.camera.to_camera();

        Self {
            config,
            library,
            window: None,
            render: None,
            animation,
            camera,
            fps: None,
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            let fps = self.fps.filter(|_| self.config.debug.show_fps);
            window.update_title(self.animation.state(), fps);
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Scene(event) => {
                self.animation.handle_event(event);
                self.update_title();
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Exit => event_loop.exit(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let update = self.animation.update(&mut self.camera);
        if let Some(fps) = update.fps {
            self.fps = Some(fps);
            if self.config.debug.show_fps {
                self.update_title();
            }
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.library, self.animation.state(), &self.camera) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window.with_status_in_title(self.config.rendering.status_in_title),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.projection.to_projector(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        log::info!("Scene {}: {}", self.animation.state().scene.index(), self.animation.state().scene);
        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
        self.update_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.animation.release_keys();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    // Discrete actions fire once per press, not on auto-repeat
                    if !event.repeat {
                        if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                            self.handle_action(event_loop, action);
                            return;
                        }
                    }
                    // Held keys
                    self.animation.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    // Load configuration before logging so the log level can come from it
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (RUST_LOG still wins)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting poly4d");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let library = match PolytopeLibrary::new() {
        Ok(library) => library,
        Err(e) => {
            log::error!("Invalid shape definition: {}", e);
            std::process::exit(1);
        }
    };

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config, library);
    event_loop.run_app(&mut app).expect("Event loop error");
}
