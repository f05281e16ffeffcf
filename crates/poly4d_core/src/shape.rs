//! Polytope data model
//!
//! A [`Shape`] is pure geometry: 4D vertices, edges as index pairs and faces
//! as index loops. No colors or rendering info lives here.

use poly4d_math::Vec4;
use serde::{Serialize, Deserialize};

use crate::error::ShapeError;

/// Smallest number of indices a face may have
pub const MIN_FACE_ARITY: usize = 3;
/// Largest number of indices a face may have
pub const MAX_FACE_ARITY: usize = 6;

/// Which shipped polytope a shape is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Tesseract,
    Pyramid,
    PentagonPrism,
    HexagonPrism,
}

impl ShapeKind {
    /// All kinds, in scene order
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Tesseract,
        ShapeKind::Pyramid,
        ShapeKind::PentagonPrism,
        ShapeKind::HexagonPrism,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Tesseract => "Tesseract",
            ShapeKind::Pyramid => "Pyramid",
            ShapeKind::PentagonPrism => "Pentagon Prism",
            ShapeKind::HexagonPrism => "Hexagon Prism",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An unordered pair of vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Indices sorted low-high, for comparing edges regardless of direction
    #[inline]
    pub fn canonical(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}

impl From<(usize, usize)> for Edge {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

/// An ordered loop of vertex indices bounding a planar polygon
///
/// Faces keep their own arity; a triangle is stored as three indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self { indices: indices.into() }
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.indices.len()
    }

    /// Fan triangulation from the first index
    ///
    /// Yields `arity - 2` triangles: (i0, i1, i2), (i0, i2, i3), ...
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let first = self.indices.first().copied().unwrap_or_default();
        self.indices
            .get(1..)
            .unwrap_or_default()
            .windows(2)
            .map(move |pair| [first, pair[0], pair[1]])
    }
}

/// A 4D polytope: vertices, edges and faces
#[derive(Clone, Debug)]
pub struct Shape {
    kind: ShapeKind,
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Shape {
    /// Assemble a shape without checking it; see [`Shape::validate`]
    pub fn new(kind: ShapeKind, vertices: Vec<Vec4>, edges: Vec<Edge>, faces: Vec<Face>) -> Self {
        Self { kind, vertices, edges, faces }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check every edge and face against the vertex list
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let kind = self.kind;
        let vertex_count = self.vertices.len();

        for (edge_idx, edge) in self.edges.iter().enumerate() {
            for index in [edge.a, edge.b] {
                if index >= vertex_count {
                    return Err(ShapeError::EdgeOutOfRange { kind, edge: edge_idx, index, vertex_count });
                }
            }
            if edge.a == edge.b {
                return Err(ShapeError::DegenerateEdge { kind, edge: edge_idx, index: edge.a });
            }
        }

        for (face_idx, face) in self.faces.iter().enumerate() {
            let arity = face.arity();
            if arity < MIN_FACE_ARITY {
                return Err(ShapeError::FaceTooSmall { kind, face: face_idx, arity });
            }
            if arity > MAX_FACE_ARITY {
                return Err(ShapeError::FaceTooLarge { kind, face: face_idx, arity });
            }
            if let Some(&index) = face.indices().iter().find(|&&i| i >= vertex_count) {
                return Err(ShapeError::FaceOutOfRange { kind, face: face_idx, index, vertex_count });
            }
            // Consecutive pairs, including the closing last -> first segment
            let indices = face.indices();
            for (i, &current) in indices.iter().enumerate() {
                let next = indices[(i + 1) % arity];
                if current == next {
                    return Err(ShapeError::DegenerateFace { kind, face: face_idx, index: current });
                }
            }
        }

        Ok(())
    }
}
