//! Definitions of the shipped polytopes
//!
//! The tesseract and pyramid are written out as tables. The two prisms are
//! generated from a regular n-gon so the pentagon and hexagon share one
//! construction.

use std::f32::consts::TAU;

use poly4d_math::Vec4;

use crate::shape::{Edge, Face, Shape, ShapeKind};

/// Build the shape for a kind (unvalidated)
pub fn build(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Tesseract => tesseract(),
        ShapeKind::Pyramid => pyramid(),
        ShapeKind::PentagonPrism => centered_prism(ShapeKind::PentagonPrism, 5),
        ShapeKind::HexagonPrism => centered_prism(ShapeKind::HexagonPrism, 6),
    }
}

fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

fn faces(loops: &[&[usize]]) -> Vec<Face> {
    loops.iter().map(|l| Face::new(*l)).collect()
}

/// Tesseract with side 2 centered at the origin
///
/// Vertex i has coordinate -1 or +1 per bit of i: x is bit 3, w is bit 0.
/// 16 vertices, 32 edges, 24 square faces.
pub fn tesseract() -> Shape {
    let sign = |i: usize, bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
    let vertices = (0..16)
        .map(|i| Vec4::new(sign(i, 3), sign(i, 2), sign(i, 1), sign(i, 0)))
        .collect();

    let edges = edges(&[
        (0, 1), (0, 2), (0, 4), (1, 3), (1, 5), (2, 3), (2, 6), (3, 7),
        (4, 5), (4, 6), (5, 7), (6, 7), (8, 9), (8, 10), (8, 12), (9, 11),
        (9, 13), (10, 11), (10, 14), (11, 15), (12, 13), (12, 14), (13, 15), (14, 15),
        (0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
    ]);

    let faces = faces(&[
        // Inner cube (x = -1)
        &[0, 1, 3, 2], &[4, 5, 7, 6], &[0, 1, 5, 4],
        &[2, 3, 7, 6], &[0, 2, 6, 4], &[1, 3, 7, 5],
        // Outer cube (x = +1)
        &[8, 9, 11, 10], &[12, 13, 15, 14], &[8, 9, 13, 12],
        &[10, 11, 15, 14], &[8, 10, 14, 12], &[9, 11, 15, 13],
        // Squares joining the two cubes
        &[0, 1, 9, 8], &[1, 3, 11, 9], &[2, 3, 11, 10], &[0, 2, 10, 8],
        &[4, 5, 13, 12], &[5, 7, 15, 13], &[6, 7, 15, 14], &[4, 6, 14, 12],
        &[0, 4, 12, 8], &[1, 5, 13, 9], &[2, 6, 14, 10], &[3, 7, 15, 11],
    ]);

    Shape::new(ShapeKind::Tesseract, vertices, edges, faces)
}

/// A cube at w = 1 joined to an apex at the origin
///
/// 9 vertices, 20 edges, 8 triangles and 4 quads.
pub fn pyramid() -> Shape {
    let vertices = vec![
        Vec4::new(0.0, 0.0, 0.0, 0.0), // apex
        Vec4::new(1.0, 1.0, 1.0, 1.0),
        Vec4::new(1.0, -1.0, 1.0, 1.0),
        Vec4::new(-1.0, -1.0, 1.0, 1.0),
        Vec4::new(-1.0, 1.0, 1.0, 1.0),
        Vec4::new(1.0, 1.0, -1.0, 1.0),
        Vec4::new(1.0, -1.0, -1.0, 1.0),
        Vec4::new(-1.0, -1.0, -1.0, 1.0),
        Vec4::new(-1.0, 1.0, -1.0, 1.0),
    ];

    let edges = edges(&[
        // Apex to base
        (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8),
        // Base square at z = 1
        (1, 2), (2, 3), (3, 4), (4, 1),
        // Base square at z = -1
        (5, 6), (6, 7), (7, 8), (8, 5),
        // Between the squares
        (1, 5), (2, 6), (3, 7), (4, 8),
    ]);

    let faces = faces(&[
        &[0, 1, 2], &[0, 2, 3], &[0, 3, 4], &[0, 4, 1],
        &[0, 5, 6], &[0, 6, 7], &[0, 7, 8], &[0, 8, 5],
        &[1, 2, 6, 5], &[2, 3, 7, 6], &[3, 4, 8, 7], &[4, 1, 5, 8],
    ]);

    Shape::new(ShapeKind::Pyramid, vertices, edges, faces)
}

/// Two regular n-gons at w = +1 and w = -1 around a shared center vertex
///
/// Vertex 0 is the center, 1..=n the ring at w = +1, n+1..=2n the ring at
/// w = -1. Ring vertex k sits at angle 2πk/n in the xy plane.
pub fn centered_prism(kind: ShapeKind, sides: usize) -> Shape {
    let n = sides;
    let bottom = |k: usize| 1 + k % n;
    let top = |k: usize| 1 + n + k % n;

    let mut vertices = Vec::with_capacity(2 * n + 1);
    vertices.push(Vec4::ZERO);
    for w in [1.0, -1.0] {
        for k in 0..n {
            let (sin, cos) = (TAU * k as f32 / n as f32).sin_cos();
            vertices.push(Vec4::new(cos, sin, 0.0, w));
        }
    }

    let mut edges = Vec::with_capacity(5 * n);
    for ring in [&bottom as &dyn Fn(usize) -> usize, &top] {
        edges.extend((0..n).map(|k| Edge::new(0, ring(k))));
        edges.extend((0..n).map(|k| Edge::new(ring(k), ring(k + 1))));
    }
    edges.extend((0..n).map(|k| Edge::new(bottom(k), top(k))));

    let mut faces = Vec::with_capacity(3 * n);
    for ring in [&bottom as &dyn Fn(usize) -> usize, &top] {
        faces.extend((0..n).map(|k| Face::new([0, ring(k), ring(k + 1)])));
    }
    faces.extend((0..n).map(|k| Face::new([bottom(k), bottom(k + 1), top(k + 1), top(k)])));

    Shape::new(kind, vertices, edges, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tesseract_counts() {
        let t = tesseract();
        assert_eq!(t.vertex_count(), 16);
        assert_eq!(t.edge_count(), 32);
        assert_eq!(t.face_count(), 24);
        assert!(t.faces().iter().all(|f| f.arity() == 4));
    }

    #[test]
    fn test_tesseract_vertex_order() {
        let t = tesseract();
        assert_eq!(t.vertices()[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[1], Vec4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(t.vertices()[8], Vec4::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[15], Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_tesseract_edges_are_unit_steps() {
        // Every edge flips exactly one coordinate
        let t = tesseract();
        let mut seen = HashSet::new();
        for e in t.edges() {
            assert_eq!((e.a ^ e.b).count_ones(), 1, "edge {:?}", e);
            assert!(seen.insert(e.canonical()), "duplicate edge {:?}", e);
        }
    }

    #[test]
    fn test_tesseract_face_edges_exist() {
        let t = tesseract();
        let edges: HashSet<_> = t.edges().iter().map(Edge::canonical).collect();
        for face in t.faces() {
            let idx = face.indices();
            for i in 0..idx.len() {
                let e = Edge::new(idx[i], idx[(i + 1) % idx.len()]);
                assert!(edges.contains(&e.canonical()), "face {:?} side {:?}", idx, e);
            }
        }
    }

    #[test]
    fn test_pyramid_counts() {
        let p = pyramid();
        assert_eq!(p.vertex_count(), 9);
        assert_eq!(p.edge_count(), 20);
        assert_eq!(p.face_count(), 12);
        assert_eq!(p.faces().iter().filter(|f| f.arity() == 3).count(), 8);
    }

    #[test]
    fn test_pentagon_prism_matches_reference_points() {
        let p = build(ShapeKind::PentagonPrism);
        assert_eq!(p.vertex_count(), 11);
        assert_eq!(p.edge_count(), 25);
        assert_eq!(p.face_count(), 15);

        let v2 = p.vertices()[2];
        assert!((v2.x - 0.309).abs() < 0.001 && (v2.y - 0.951).abs() < 0.001);
        assert_eq!(v2.w, 1.0);
        let v9 = p.vertices()[9];
        assert!((v9.x + 0.809).abs() < 0.001 && (v9.y + 0.588).abs() < 0.001);
        assert_eq!(v9.w, -1.0);
    }

    #[test]
    fn test_hexagon_prism_counts() {
        let h = build(ShapeKind::HexagonPrism);
        assert_eq!(h.vertex_count(), 13);
        assert_eq!(h.edge_count(), 30);
        assert_eq!(h.face_count(), 18);
    }

    #[test]
    fn test_prism_edge_order() {
        let h = centered_prism(ShapeKind::HexagonPrism, 6);
        let e = h.edges();
        assert_eq!(e[0], Edge::new(0, 1));
        assert_eq!(e[11], Edge::new(6, 1));
        assert_eq!(e[12], Edge::new(0, 7));
        assert_eq!(e[23], Edge::new(12, 7));
        assert_eq!(e[24], Edge::new(1, 7));
    }

    #[test]
    fn test_prism_side_faces() {
        let p = centered_prism(ShapeKind::PentagonPrism, 5);
        assert_eq!(p.faces()[10].indices(), &[1, 2, 7, 6]);
        assert_eq!(p.faces()[14].indices(), &[5, 1, 6, 10]);
    }

    #[test]
    fn test_all_shapes_validate() {
        for kind in ShapeKind::ALL {
            let shape = build(kind);
            assert_eq!(shape.kind(), kind);
            shape.validate().unwrap_or_else(|e| panic!("{}", e));
        }
    }
}
