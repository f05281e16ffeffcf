//! Animation system
//!
//! Manages the per-frame update including:
//! - Delta time calculation
//! - Scene events and animation ticks
//! - Held-key camera zoom
//! - Frame rate sampling

use std::time::Instant;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use poly4d_core::{AnimationSettings, SceneController, SceneEvent, SceneState};
use poly4d_input::ZoomController;
use poly4d_render::Camera3D;

/// Longest frame time fed to the update, in seconds
const MAX_FRAME_TIME: f32 = 0.25;

/// Result of an animation update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Animation ticks run this frame
    pub ticks: u32,
    /// New frames-per-second sample, produced about once a second
    pub fps: Option<f32>,
}

/// Counts frames over one-second windows
#[derive(Debug, Default)]
struct FpsCounter {
    frames: u32,
    elapsed: f32,
}

impl FpsCounter {
    fn record(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < 1.0 {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

/// Owns the scene state and everything that changes it over time
pub struct AnimationSystem {
    controller: SceneController,
    state: SceneState,
    zoom: ZoomController,
    fps: FpsCounter,
    last_frame: Instant,
}

impl AnimationSystem {
    /// Create a new animation system
    pub fn new(settings: AnimationSettings, state: SceneState, zoom: ZoomController) -> Self {
        Self {
            controller: SceneController::new(settings),
            state,
            zoom,
            fps: FpsCounter::default(),
            last_frame: Instant::now(),
        }
    }

    /// Current scene state
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Apply a discrete scene event
    pub fn handle_event(&mut self, event: SceneEvent) {
        self.controller.handle_event(&mut self.state, event);
    }

    /// Pass a key to the zoom controller
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        self.zoom.process_keyboard(key, state)
    }

    /// Forget held keys, e.g. when the window loses focus
    pub fn release_keys(&mut self) {
        self.zoom.reset();
    }

    /// Run one frame using the time since the previous call
    pub fn update(&mut self, camera: &mut Camera3D) -> FrameUpdate {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt, camera)
    }

    /// Run one frame of `dt` seconds
    pub fn advance(&mut self, dt: f32, camera: &mut Camera3D) -> FrameUpdate {
        // Cap dt so a stalled window does not jump
        let dt = dt.clamp(0.0, MAX_FRAME_TIME);

        let ticks = self.controller.update(&mut self.state, dt);
        if self.zoom.is_zooming() {
            self.zoom.update(camera, dt);
        }
        let fps = self.fps.record(dt);

        FrameUpdate { ticks, fps }
    }
}
