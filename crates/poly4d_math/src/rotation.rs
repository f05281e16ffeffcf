//! Six-plane rotation composer
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! A full rotation here is six planar (Givens) rotations applied one after
//! another, each one reading the coordinates the previous step produced.
//! The steps do not commute, so the order below is part of the result:
//!
//! 1. (x, y) by XY
//! 2. (z, x) by XZ
//! 3. (w, x) by XW
//! 4. (y, z) by YZ
//! 5. (w, y) by YW
//! 6. (z, w) by ZW

use std::f32::consts::TAU;

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// The 6 rotation planes in 4D space, in composition order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - yaw-like spin around the Z axis in 3D
    XY,
    /// XZ plane - spin around the Y axis in 3D
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - spin around the X axis in 3D
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// Number of rotation planes in 4D
    pub const COUNT: usize = 6;

    /// All planes, indexed 0..6 in composition order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Index of this plane (0 = XY ... 5 = ZW)
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Plane for an index, wrapping modulo 6
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Next plane, wrapping ZW -> XY
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous plane, wrapping XY -> ZW
    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Short display name ("XY", "XW", ...)
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulated rotation angle per plane, in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationAngles {
    pub xy: f32,
    pub xz: f32,
    pub xw: f32,
    pub yz: f32,
    pub yw: f32,
    pub zw: f32,
}

impl RotationAngles {
    /// All six angles zero
    pub const ZERO: Self = Self { xy: 0.0, xz: 0.0, xw: 0.0, yz: 0.0, yw: 0.0, zw: 0.0 };

    /// Angles from an array in plane order
    pub const fn from_array(a: [f32; 6]) -> Self {
        Self { xy: a[0], xz: a[1], xw: a[2], yz: a[3], yw: a[4], zw: a[5] }
    }

    /// Angles as an array in plane order
    pub const fn to_array(self) -> [f32; 6] {
        [self.xy, self.xz, self.xw, self.yz, self.yw, self.zw]
    }

    /// Single angle for one plane
    pub fn get(&self, plane: RotationPlane) -> f32 {
        match plane {
            RotationPlane::XY => self.xy,
            RotationPlane::XZ => self.xz,
            RotationPlane::XW => self.xw,
            RotationPlane::YZ => self.yz,
            RotationPlane::YW => self.yw,
            RotationPlane::ZW => self.zw,
        }
    }

    fn slot(&mut self, plane: RotationPlane) -> &mut f32 {
        match plane {
            RotationPlane::XY => &mut self.xy,
            RotationPlane::XZ => &mut self.xz,
            RotationPlane::XW => &mut self.xw,
            RotationPlane::YZ => &mut self.yz,
            RotationPlane::YW => &mut self.yw,
            RotationPlane::ZW => &mut self.zw,
        }
    }

    /// Set one plane's angle (stored as given, not wrapped)
    pub fn set(&mut self, plane: RotationPlane, angle: f32) {
        *self.slot(plane) = angle;
    }

    /// Add `delta` to one plane and wrap the result into `[0, 2π)`
    pub fn advance(&mut self, plane: RotationPlane, delta: f32) {
        let slot = self.slot(plane);
        *slot = wrap_angle(*slot + delta);
    }
}

/// Wrap an angle into `[0, 2π)`
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Rotate the pair (a, b) by θ given as (sin θ, cos θ)
#[inline]
fn planar(a: f32, b: f32, (sin, cos): (f32, f32)) -> (f32, f32) {
    (a * cos - b * sin, a * sin + b * cos)
}

/// A set of rotation angles with sin/cos evaluated once
///
/// Build one per frame with [`Rotation4::from_angles`] and reuse it for
/// every vertex of the shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation4 {
    /// (sin, cos) per plane, in plane order
    terms: [(f32, f32); 6],
}

impl Rotation4 {
    /// The identity rotation (all angles zero)
    pub const IDENTITY: Self = Self { terms: [(0.0, 1.0); 6] };

    /// Precompute sin/cos for each plane angle
    pub fn from_angles(angles: &RotationAngles) -> Self {
        let a = angles.to_array();
        let mut terms = [(0.0, 1.0); 6];
        for (term, angle) in terms.iter_mut().zip(a) {
            *term = angle.sin_cos();
        }
        Self { terms }
    }

    /// Apply the six planar rotations in order
    pub fn rotate(&self, v: Vec4) -> Vec4 {
        let [xy, xz, xw, yz, yw, zw] = self.terms;
        let (x, y, z, w) = (v.x, v.y, v.z, v.w);

        let (x, y) = planar(x, y, xy);
        let (z, x) = planar(z, x, xz);
        let (w, x) = planar(w, x, xw);
        let (y, z) = planar(y, z, yz);
        let (w, y) = planar(w, y, yw);
        let (z, w) = planar(z, w, zw);

        Vec4::new(x, y, z, w)
    }
}

impl Default for Rotation4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotate a single vertex by the given angles
///
/// Shorthand for `Rotation4::from_angles(angles).rotate(v)`.
pub fn rotate(v: Vec4, angles: &RotationAngles) -> Vec4 {
    Rotation4::from_angles(angles).rotate(v)
}
