//! The polytope library
//!
//! All shapes are built and validated once at startup and stay immutable
//! for the rest of the run.

use crate::error::ShapeError;
use crate::polytopes;
use crate::shape::{Shape, ShapeKind};

/// Immutable, validated set of shapes, one per [`ShapeKind`]
#[derive(Clone, Debug)]
pub struct PolytopeLibrary {
    /// Indexed by position of the kind in [`ShapeKind::ALL`]
    shapes: Vec<Shape>,
}

impl PolytopeLibrary {
    /// Build and validate every shipped shape
    pub fn new() -> Result<Self, ShapeError> {
        let library = Self::from_shapes(ShapeKind::ALL.iter().map(|&k| polytopes::build(k)))?;
        for shape in library.iter() {
            log::debug!(
                "{}: {} vertices, {} edges, {} faces",
                shape.kind(),
                shape.vertex_count(),
                shape.edge_count(),
                shape.face_count()
            );
        }
        log::info!("Polytope library ready with {} shapes", library.len());
        Ok(library)
    }

    /// Validate and index a set of shapes
    ///
    /// Later shapes replace earlier ones of the same kind. Kinds that are
    /// not supplied fall back to their shipped definition.
    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Result<Self, ShapeError> {
        let mut slots: Vec<Option<Shape>> = vec![None; ShapeKind::ALL.len()];
        for shape in shapes {
            shape.validate()?;
            let kind = shape.kind();
            slots[slot(kind)] = Some(shape);
        }

        let mut resolved = Vec::with_capacity(slots.len());
        for (kind, shape) in ShapeKind::ALL.iter().zip(slots) {
            let shape = match shape {
                Some(shape) => shape,
                None => {
                    let shape = polytopes::build(*kind);
                    shape.validate()?;
                    shape
                }
            };
            resolved.push(shape);
        }

        Ok(Self { shapes: resolved })
    }

    /// The shape for a kind
    #[inline]
    pub fn get(&self, kind: ShapeKind) -> &Shape {
        &self.shapes[slot(kind)]
    }

    /// Iterate shapes in [`ShapeKind::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn slot(kind: ShapeKind) -> usize {
    kind as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Edge, Face};
    use poly4d_math::Vec4;

    #[test]
    fn test_library_has_every_kind() {
        let library = PolytopeLibrary::new().unwrap();
        assert_eq!(library.len(), 4);
        for kind in ShapeKind::ALL {
            assert_eq!(library.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_slot_matches_all_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(slot(*kind), i);
        }
    }

    #[test]
    fn test_bad_shape_rejected() {
        let broken = Shape::new(
            ShapeKind::Pyramid,
            vec![Vec4::ZERO, Vec4::X, Vec4::Y],
            vec![Edge::new(0, 3)],
            vec![Face::new([0, 1, 2])],
        );
        let err = PolytopeLibrary::from_shapes([broken]).unwrap_err();
        assert!(matches!(err, ShapeError::EdgeOutOfRange { kind: ShapeKind::Pyramid, index: 3, .. }));
    }

    #[test]
    fn test_override_replaces_earlier_shape_of_same_kind() {
        let tesseract = polytopes::tesseract();
        let small = Shape::new(
            ShapeKind::Tesseract,
            tesseract.vertices().iter().map(|&v| v * 0.5).collect(),
            tesseract.edges().to_vec(),
            tesseract.faces().to_vec(),
        );
        let library = PolytopeLibrary::from_shapes([tesseract, small]).unwrap();
        assert_eq!(library.get(ShapeKind::Tesseract).vertices()[0], Vec4::new(-0.5, -0.5, -0.5, -0.5));
        assert_eq!(library.get(ShapeKind::Pyramid).vertex_count(), 9);
    }

    #[test]
    fn test_override_shape() {
        let triangle = Shape::new(
            ShapeKind::Pyramid,
            vec![Vec4::ZERO, Vec4::X, Vec4::Y],
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
            vec![Face::new([0, 1, 2])],
        );
        let library = PolytopeLibrary::from_shapes([triangle]).unwrap();
        assert_eq!(library.get(ShapeKind::Pyramid).vertex_count(), 3);
        assert_eq!(library.get(ShapeKind::Tesseract).vertex_count(), 16);
    }
}
