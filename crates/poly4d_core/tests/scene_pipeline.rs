//! Integration tests for the rotate-and-project pipeline
//!
//! These tests drive the public API the way the viewer does:
//! 1. Build the polytope library
//! 2. Apply scene events and animation ticks to a scene state
//! 3. Rotate and project the active shape's vertices

use poly4d_core::{
    PolytopeLibrary, Rotation4, RotationAngles, RotationMode, RotationPlane, Scene,
    SceneController, SceneEvent, SceneState, ShapeKind, Vec4,
};
use poly4d_math::{project, rotate};
use std::f32::consts::{FRAC_PI_2, TAU};

const EPSILON: f32 = 0.0001;

fn projected(library: &PolytopeLibrary, state: &SceneState) -> Vec<[f32; 3]> {
    let rotation = Rotation4::from_angles(&state.angles);
    library
        .get(state.scene.shape)
        .vertices()
        .iter()
        .map(|&v| project(rotation.rotate(v)).to_array())
        .collect()
}

// ==================== Projection Tests ====================

#[test]
fn test_unrotated_tesseract_corners() {
    let library = PolytopeLibrary::new().unwrap();
    let state = SceneState::default();
    let points = projected(&library, &state);

    // Corner at w = -1 is pulled out by 2/3
    let near = points[0];
    for c in near {
        assert!((c + 2.0 / 3.0).abs() < EPSILON, "got {:?}", near);
    }

    // Corner at w = +1 is shrunk to 2/5
    let far = points[15];
    for c in far {
        assert!((c - 0.4).abs() < EPSILON, "got {:?}", far);
    }
}

#[test]
fn test_pyramid_apex_projects_to_origin() {
    let library = PolytopeLibrary::new().unwrap();
    let mut state = SceneState::default();
    state.scene = Scene::from_index(3);
    state.angles = RotationAngles::from_array([0.3, 1.1, 2.0, 0.7, 4.0, 5.5]);

    let points = projected(&library, &state);
    assert_eq!(points[0], [0.0, 0.0, 0.0]);
}

// ==================== Animation Tests ====================

#[test]
fn test_every_scene_stays_finite_while_animating() {
    let library = PolytopeLibrary::new().unwrap();
    let mut controller = SceneController::default();
    let mut state = SceneState::new(RotationPlane::XW, RotationMode::AllAxes);

    for _ in 0..Scene::COUNT {
        for _ in 0..120 {
            controller.update(&mut state, 1.0 / 60.0);
            for p in projected(&library, &state) {
                assert!(p.iter().all(|c| c.is_finite()), "{}: {:?}", state.scene, p);
            }
        }
        controller.handle_event(&mut state, SceneEvent::AdvanceScene);
    }
    assert_eq!(state.scene, Scene::FIRST);
}

#[test]
fn test_axis_switch_keeps_accumulated_angles() {
    let mut controller = SceneController::default();
    let mut state = SceneState::default();

    controller.update(&mut state, 5.0 / 60.0);
    let xw = state.angles.xw;
    assert!(xw > 0.0);

    controller.handle_event(&mut state, SceneEvent::AdvanceAxis);
    controller.update(&mut state, 2.0 / 60.0);

    assert_eq!(state.angles.xw, xw);
    assert!((state.angles.yz - 0.04).abs() < EPSILON);
}

// ==================== Rotation Properties ====================

#[test]
fn test_rotation_preserves_length_for_all_shapes() {
    let library = PolytopeLibrary::new().unwrap();
    let angles = RotationAngles::from_array([0.4, 1.3, 2.9, 3.7, 5.1, 6.0]);

    for kind in ShapeKind::ALL {
        for &v in library.get(kind).vertices() {
            let r = rotate(v, &angles);
            assert!(
                (r.length() - v.length()).abs() < 1e-4,
                "{}: {:?} -> {:?}",
                kind,
                v,
                r
            );
        }
    }
}

#[test]
fn test_quarter_turn_xw_swaps_into_w() {
    let mut angles = RotationAngles::ZERO;
    angles.set(RotationPlane::XW, FRAC_PI_2);
    let r = rotate(Vec4::new(1.0, 0.0, 0.0, 0.0), &angles);
    assert!(r.max_abs_diff(Vec4::new(0.0, 0.0, 0.0, -1.0)) < EPSILON, "got {:?}", r);
}

#[test]
fn test_full_turn_accumulates_back_to_identity() {
    let theta = 1.234;
    let mut angles = RotationAngles::ZERO;
    for plane in RotationPlane::ALL {
        angles.advance(plane, theta);
        angles.advance(plane, TAU - theta);
    }
    let v = Vec4::new(0.3, -1.2, 0.8, 0.5);
    assert!(rotate(v, &angles).max_abs_diff(v) < 1e-3);
}
