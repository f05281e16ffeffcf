//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The primitive pipeline and the frame's canvas
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;

use poly4d_core::{PolytopeLibrary, SceneState};
use poly4d_math::Projector;
use poly4d_render::{
    context::{ContextError, RenderContext},
    pipeline::PrimitivePipeline,
    Camera3D, GpuCanvas, RenderDispatcher,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// GPU setup failed
    Context(ContextError),
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Context(e) => write!(f, "GPU initialization failed: {}", e),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            e => RenderError::Other(format!("{:?}", e)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: PrimitivePipeline,
    canvas: GpuCanvas,
    dispatcher: RenderDispatcher,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, projector: Projector, vsync: bool) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = PrimitivePipeline::new(
            &context.device,
            context.config.format,
            context.size.width,
            context.size.height,
        );
        log::info!(
            "Renderer ready: {:?} surface, {}x{}",
            context.config.format,
            context.config.width,
            context.config.height
        );

        let canvas = GpuCanvas::new(context.aspect_ratio());

        Ok(Self {
            context,
            pipeline,
            canvas,
            dispatcher: RenderDispatcher::new(projector),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure after [`RenderError::SurfaceLost`]
    pub fn recover(&mut self) {
        log::warn!("Surface lost, reconfiguring");
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        library: &PolytopeLibrary,
        state: &SceneState,
        camera: &Camera3D,
    ) -> Result<(), RenderError> {
        // Record the frame on the CPU
        self.canvas.reset(self.context.aspect_ratio());
        self.dispatcher.render(&mut self.canvas, library, state, camera);

        // Get surface texture
        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.canvas.present(&self.context, &mut self.pipeline, &mut encoder, &view);

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
