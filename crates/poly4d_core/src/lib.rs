//! Core types for poly4d
//!
//! This crate holds everything that does not touch a window or a GPU:
//!
//! - [`Shape`] - Vertices, edges and faces of one polytope
//! - [`PolytopeLibrary`] - The validated set of shipped shapes
//! - [`Scene`] - One shape paired with a [`RenderStyle`]
//! - [`SceneState`] - Scene, axis, rotation mode and accumulated angles
//! - [`SceneController`] - Applies [`SceneEvent`]s and animation ticks

mod shape;
mod error;
mod polytopes;
mod library;
mod scene;
mod controller;

pub use shape::{Shape, ShapeKind, Edge, Face, MIN_FACE_ARITY, MAX_FACE_ARITY};
pub use error::ShapeError;
pub use library::PolytopeLibrary;
pub use scene::{Scene, RenderStyle};
pub use controller::{SceneState, SceneEvent, SceneController, RotationMode, AnimationSettings};

// Re-export commonly used types from poly4d_math for convenience
pub use poly4d_math::{Vec4, Vec3, RotationPlane, RotationAngles, Rotation4, Projector};
