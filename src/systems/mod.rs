//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod animation;
mod render;
mod window;

pub use animation::{AnimationSystem, FrameUpdate};
pub use render::{RenderError, RenderSystem};
pub use window::{status_title, WindowError, WindowSystem};
