//! Rendering pipeline components
//!
//! One shader drives three pipelines: lines, culled triangles and unculled
//! triangles. They share the vertex buffer, uniforms and depth texture.

pub mod types;
pub mod primitive_pipeline;

// Re-export types
pub use types::{ColorVertex, Uniforms};

// Re-export pipelines
pub use primitive_pipeline::{PrimitivePipeline, Batch, BatchKind, DEPTH_FORMAT};
