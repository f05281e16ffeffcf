//! 3D viewing camera
//!
//! The projected polytope is an ordinary 3D object; this camera looks at it
//! the same way regardless of scene. It supports:
//! - Perspective projection with a vertical field of view
//! - Zooming along the line from the target to the camera

use poly4d_input::CameraZoom;
use poly4d_math::Vec3;

/// Perspective camera looking at a target point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fovy: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera3D {
    /// Camera at (10, 10, 10) looking at the origin with a 45° field of view
    pub fn new() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Builder: set position and target
    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self
    }

    /// Builder: set field of view in degrees
    pub fn with_fovy(mut self, fovy: f32) -> Self {
        self.fovy = fovy;
        self
    }

    /// Builder: set clip planes
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// World to view space
    pub fn view_matrix(&self) -> [[f32; 4]; 4] {
        look_at_matrix(self.position.to_array(), self.target.to_array(), self.up.to_array())
    }

    /// View to clip space
    pub fn projection_matrix(&self, aspect: f32) -> [[f32; 4]; 4] {
        perspective_matrix(self.fovy.to_radians(), aspect, self.near, self.far)
    }

    /// World to clip space (projection applied after view)
    pub fn view_projection(&self, aspect: f32) -> [[f32; 4]; 4] {
        // Column-major storage, so `mat4_mul(a, b)` is the product b * a
        mat4_mul(self.view_matrix(), self.projection_matrix(aspect))
    }
}

impl CameraZoom for Camera3D {
    fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    fn set_distance(&mut self, distance: f32) {
        let offset = self.position - self.target;
        if offset.length() > 0.0 {
            self.position = self.target + offset.normalized() * distance;
        }
    }
}

/// Right-handed perspective matrix with depth in `[0, 1]`
///
/// Column-major: `m[column][row]`.
pub fn perspective_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> [[f32; 4]; 4] {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix, column-major
pub fn look_at_matrix(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> [[f32; 4]; 4] {
    let eye = Vec3::from_array(eye);
    let f = (Vec3::from_array(target) - eye).normalized();
    let s = f.cross(Vec3::from_array(up)).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// Multiply two 4x4 matrices as stored arrays
pub fn mat4_mul(a: [[f32; 4]; 4], b: [[f32; 4]; 4]) -> [[f32; 4]; 4] {
    let mut result = [[0.0f32; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    /// Apply a column-major matrix to a point, returning clip coordinates
    fn transform_point(m: &[[f32; 4]; 4], p: Vec3) -> [f32; 4] {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0f32; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = (0..4).map(|col| m[col][row] * v[col]).sum();
        }
        out
    }

    #[test]
    fn test_default_camera() {
        let cam = Camera3D::default();
        assert_eq!(cam.position, Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert_eq!(cam.up, Vec3::Y);
        assert_eq!(cam.fovy, 45.0);
    }

    #[test]
    fn test_target_maps_to_screen_center() {
        let cam = Camera3D::default();
        let clip = transform_point(&cam.view_projection(16.0 / 9.0), cam.target);
        assert!(clip[3] > 0.0);
        assert!((clip[0] / clip[3]).abs() < EPSILON);
        assert!((clip[1] / clip[3]).abs() < EPSILON);
        let depth = clip[2] / clip[3];
        assert!(depth > 0.0 && depth < 1.0);
    }

    #[test]
    fn test_view_moves_eye_to_origin() {
        let cam = Camera3D::default();
        let eye = transform_point(&cam.view_matrix(), cam.position);
        for c in &eye[..3] {
            assert!(c.abs() < EPSILON, "got {:?}", eye);
        }
    }

    #[test]
    fn test_depth_range() {
        let proj = perspective_matrix(std::f32::consts::FRAC_PI_4, 1.0, 0.5, 50.0);
        let near = transform_point(&proj, Vec3::new(0.0, 0.0, -0.5));
        let far = transform_point(&proj, Vec3::new(0.0, 0.0, -50.0));
        assert!((near[2] / near[3]).abs() < EPSILON);
        assert!((far[2] / far[3] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_up_stays_up() {
        let cam = Camera3D::default();
        let clip = transform_point(&cam.view_projection(1.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(clip[1] / clip[3] > 0.0);
    }

    #[test]
    fn test_zoom_keeps_direction() {
        let mut cam = Camera3D::default();
        let before = cam.distance();
        assert!((before - 300.0f32.sqrt()).abs() < EPSILON);

        cam.set_distance(5.0);
        assert!((cam.distance() - 5.0).abs() < EPSILON);
        // Still on the diagonal
        assert!((cam.position.x - cam.position.y).abs() < EPSILON);
        assert!((cam.position.y - cam.position.z).abs() < EPSILON);
        assert!(cam.position.x > 0.0);
    }
}
