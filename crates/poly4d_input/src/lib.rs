//! Held-key input handling
//!
//! Discrete key presses are mapped to scene events by the application.
//! This crate covers input that acts continuously while a key is held,
//! currently the camera zoom.

mod zoom_controller;

pub use zoom_controller::{ZoomController, CameraZoom};
