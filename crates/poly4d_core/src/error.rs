//! Shape definition errors
//!
//! These indicate bad static data, never a runtime condition. They are
//! detected once when the polytope library is built.

use std::fmt;

use crate::shape::{ShapeKind, MAX_FACE_ARITY, MIN_FACE_ARITY};

/// A broken edge or face in a shape definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// An edge refers to a vertex that does not exist
    EdgeOutOfRange { kind: ShapeKind, edge: usize, index: usize, vertex_count: usize },
    /// An edge connects a vertex to itself
    DegenerateEdge { kind: ShapeKind, edge: usize, index: usize },
    /// A face has fewer than three indices
    FaceTooSmall { kind: ShapeKind, face: usize, arity: usize },
    /// A face has more indices than any shipped polygon
    FaceTooLarge { kind: ShapeKind, face: usize, arity: usize },
    /// A face refers to a vertex that does not exist
    FaceOutOfRange { kind: ShapeKind, face: usize, index: usize, vertex_count: usize },
    /// A face repeats an index in two consecutive positions
    DegenerateFace { kind: ShapeKind, face: usize, index: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EdgeOutOfRange { kind, edge, index, vertex_count } => write!(
                f,
                "{}: edge {} uses vertex {} but the shape has {} vertices",
                kind, edge, index, vertex_count
            ),
            ShapeError::DegenerateEdge { kind, edge, index } => {
                write!(f, "{}: edge {} connects vertex {} to itself", kind, edge, index)
            }
            ShapeError::FaceTooSmall { kind, face, arity } => write!(
                f,
                "{}: face {} has {} indices (minimum {})",
                kind, face, arity, MIN_FACE_ARITY
            ),
            ShapeError::FaceTooLarge { kind, face, arity } => write!(
                f,
                "{}: face {} has {} indices (maximum {})",
                kind, face, arity, MAX_FACE_ARITY
            ),
            ShapeError::FaceOutOfRange { kind, face, index, vertex_count } => write!(
                f,
                "{}: face {} uses vertex {} but the shape has {} vertices",
                kind, face, index, vertex_count
            ),
            ShapeError::DegenerateFace { kind, face, index } => write!(
                f,
                "{}: face {} repeats vertex {} in consecutive positions",
                kind, face, index
            ),
        }
    }
}

impl std::error::Error for ShapeError {}
