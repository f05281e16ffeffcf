//! poly4d - rotating 4D polytopes
//!
//! Application layer: configuration, input mapping and the systems that
//! tie the scene state to a window and the GPU.

pub mod config;
pub mod input;
pub mod systems;
