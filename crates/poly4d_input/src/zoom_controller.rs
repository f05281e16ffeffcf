//! Camera zoom driven by held keys
//!
//! Controls:
//! - Z: Move the camera away from its target
//! - X: Move the camera toward its target

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks the zoom keys and applies them to a camera over time
pub struct ZoomController {
    zoom_out: bool, // Z
    zoom_in: bool,  // X

    // Configuration
    pub zoom_speed: f32,   // Units per second
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomController {
    pub fn new() -> Self {
        Self {
            zoom_out: false,
            zoom_in: false,
            zoom_speed: 6.0,
            min_distance: 2.0,
            max_distance: 60.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a zoom key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyZ => { self.zoom_out = pressed; true }
            KeyCode::KeyX => { self.zoom_in = pressed; true }
            _ => false,
        }
    }

    /// Check if a zoom key is held
    pub fn is_zooming(&self) -> bool {
        self.zoom_out != self.zoom_in
    }

    /// Release both keys, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.zoom_out = false;
        self.zoom_in = false;
    }

    /// Apply held keys for `dt` seconds
    ///
    /// Returns the camera distance after the update.
    pub fn update<C: CameraZoom>(&self, camera: &mut C, dt: f32) -> f32 {
        let direction = (self.zoom_out as i32 - self.zoom_in as i32) as f32;
        let current = camera.distance();
        if direction == 0.0 || dt <= 0.0 {
            return current;
        }

        let target = (current + direction * self.zoom_speed * dt)
            .clamp(self.min_distance, self.max_distance);
        if target != current {
            camera.set_distance(target);
            log::trace!("Camera distance: {:.2}", target);
        }
        target
    }

    /// Builder: set zoom speed
    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Builder: set the allowed distance range
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min.min(max);
        self.max_distance = max.max(min);
        self
    }
}

/// Trait for cameras that can move along their view direction
pub trait CameraZoom {
    /// Distance from the camera to its target
    fn distance(&self) -> f32;
    /// Move the camera so it sits `distance` from its target, keeping the direction
    fn set_distance(&mut self, distance: f32);
}
