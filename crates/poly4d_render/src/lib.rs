//! Rendering for poly4d
//!
//! This crate turns a scene state into draw calls and draws them with wgpu.
//!
//! ## Key Components
//!
//! - [`dispatch::RenderDispatcher`] - Projects the active shape and issues draw calls
//! - [`dispatch::Canvas3D`] - The drawing capabilities the dispatcher relies on
//! - [`style::StyleSpec`] - Background, edge color and fill mode per scene
//! - [`camera::Camera3D`] - Perspective camera that views the projected shape
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::PrimitivePipeline`] - Line and triangle pipelines
//! - [`gpu_canvas::GpuCanvas`] - Canvas that records a frame for the GPU

pub mod color;
pub mod style;
pub mod camera;
pub mod dispatch;
pub mod context;
pub mod pipeline;
pub mod gpu_canvas;

pub use color::{Color, FACE_PALETTE, palette_color};
pub use style::StyleSpec;
pub use camera::Camera3D;
pub use dispatch::{Canvas3D, CommandList, DrawCommand, RenderDispatcher, project_vertices};
pub use gpu_canvas::GpuCanvas;
