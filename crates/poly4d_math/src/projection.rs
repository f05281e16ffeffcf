//! Perspective projection from 4D to 3D
//!
//! A point is scaled by `K / (D + w)`: the further along -w it sits, the
//! larger it appears. `D` is the viewer's distance along w and `K` sets the
//! overall size of the result.

use serde::{Serialize, Deserialize};
use crate::{Vec3, Vec4};

/// Default scale numerator
pub const DEFAULT_SCALE: f32 = 2.0;
/// Default viewer distance along w
pub const DEFAULT_DISTANCE: f32 = 4.0;
/// Smallest denominator magnitude allowed before clamping
pub const DEFAULT_EPSILON: f32 = 1e-4;
/// Floor applied to a configured ε that is zero, negative or NaN
pub const MIN_EPSILON: f32 = 1e-6;

/// Perspective projector with a clamped denominator
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projector {
    /// Scale numerator (K)
    pub scale: f32,
    /// Viewer distance along w (D)
    pub distance: f32,
    /// Minimum |D + w| (ε), never taken below [`MIN_EPSILON`]
    pub epsilon: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Projector {
    /// K = 2, D = 4, ε = 1e-4
    pub const DEFAULT: Self = Self {
        scale: DEFAULT_SCALE,
        distance: DEFAULT_DISTANCE,
        epsilon: DEFAULT_EPSILON,
    };

    pub const fn new(scale: f32, distance: f32, epsilon: f32) -> Self {
        Self { scale, distance, epsilon }
    }

    /// Denominator `D + w`, pushed away from zero to at least ε in magnitude
    ///
    /// Zero counts as positive.
    #[inline]
    pub fn denominator(&self, w: f32) -> f32 {
        let epsilon = self.epsilon.max(MIN_EPSILON);
        let denom = self.distance + w;
        if denom.abs() < epsilon {
            epsilon.copysign(denom)
        } else {
            denom
        }
    }

    /// Project a (rotated) 4D point into 3D
    #[inline]
    pub fn project(&self, v: Vec4) -> Vec3 {
        let scale = self.scale / self.denominator(v.w);
        Vec3::new(v.x * scale, v.y * scale, v.z * scale)
    }
}

/// Project with the default constants
#[inline]
pub fn project(v: Vec4) -> Vec3 {
    Projector::DEFAULT.project(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_tesseract_corner() {
        // scale = 2 / (4 - 1) = 0.6667
        let p = project(Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert!((p.x + 0.667).abs() < EPSILON, "got {p:?}");
        assert!((p.y + 0.667).abs() < EPSILON);
        assert!((p.z + 0.667).abs() < EPSILON);
    }

    #[test]
    fn test_far_side_is_smaller() {
        // w = +1: scale = 2 / 5 = 0.4
        let p = project(Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert!((p.x - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_singularity_is_finite() {
        let p = project(Vec4::new(-1.0, 1.0, 0.5, -4.0));
        assert!(p.is_finite(), "got {p:?}");
    }

    #[test]
    fn test_near_singularity_keeps_sign() {
        let projector = Projector::DEFAULT;
        assert!(projector.denominator(-4.0 + 1e-6) > 0.0);
        assert!(projector.denominator(-4.0 - 1e-6) < 0.0);
        assert_eq!(projector.denominator(-4.0), DEFAULT_EPSILON);
        assert!(projector.project(Vec4::new(1.0, 0.0, 0.0, -4.00001)).is_finite());
    }

    #[test]
    fn test_unclamped_denominator_untouched() {
        let projector = Projector::DEFAULT;
        assert_eq!(projector.denominator(0.0), 4.0);
        assert_eq!(projector.denominator(-3.0), 1.0);
    }

    #[test]
    fn test_zero_epsilon_still_guards() {
        for epsilon in [0.0, -1.0, f32::NAN] {
            let projector = Projector::new(DEFAULT_SCALE, DEFAULT_DISTANCE, epsilon);
            assert_eq!(projector.denominator(-4.0), MIN_EPSILON);
            let p = projector.project(Vec4::new(1.0, 0.0, 0.5, -4.0));
            assert!(p.is_finite(), "epsilon {epsilon}: got {p:?}");
        }
    }

    #[test]
    fn test_custom_constants() {
        let projector = Projector::new(1.0, 2.0, 1e-4);
        let p = projector.project(Vec4::new(3.0, 0.0, 0.0, 0.0));
        assert!((p.x - 1.5).abs() < EPSILON);
    }
}
