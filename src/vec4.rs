//! Four-component vector filling a whole register.
//!
//! [`Vec4::magnitude`] and [`Vec4::normalized`] use the approximate reciprocal
//! square root, unlike [`Vec3`] which takes an exact `sqrt`. The relative error
//! is bounded by [`RSQRT_RELATIVE_ERROR`](crate::RSQRT_RELATIVE_ERROR), so the
//! two types can disagree on the length of the same logical vector by that much.

use std::fmt;

use crate::error::{check_length, VectorError};
use crate::ops::{self, impl_vector_ops, SimdVector};
use crate::simd::{F32x4, Register, SimdLanes};
use crate::{Vec2, Vec3};

/// A four-component `f32` vector.
///
/// Equality is epsilon equality, see [`EPSILON`](crate::EPSILON).
#[derive(Copy, Clone, Debug, Default)]
#[repr(C, align(16))]
pub struct Vec4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vec4 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    pub fn from_x_yzw(x: f32, yzw: Vec3) -> Self {
        Self::new(x, yzw.x(), yzw.y(), yzw.z())
    }

    #[inline(always)]
    pub fn from_xyz_w(xyz: Vec3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    #[inline(always)]
    pub fn from_x_y_zw(x: f32, y: f32, zw: Vec2) -> Self {
        Self::new(x, y, zw.x(), zw.y())
    }

    #[inline(always)]
    pub fn from_xy_z_w(xy: Vec2, z: f32, w: f32) -> Self {
        Self::new(xy.x(), xy.y(), z, w)
    }

    #[inline(always)]
    pub fn from_x_yz_w(x: f32, yz: Vec2, w: f32) -> Self {
        Self::new(x, yz.x(), yz.y(), w)
    }

    #[inline(always)]
    pub fn from_register(register: Register) -> Self {
        Self::from_lanes(F32x4::from_register(register))
    }

    #[inline(always)]
    pub fn to_register(self) -> Register {
        self.lanes().to_register()
    }

    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.z
    }

    #[inline(always)]
    pub fn w(&self) -> f32 {
        self.w
    }

    #[inline(always)]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    #[inline(always)]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    #[inline(always)]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    #[inline(always)]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// `(x, y, z)` as a [`Vec3`].
    #[inline(always)]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Drops `w`. Same as [`xyz`](Vec4::xyz).
    #[inline(always)]
    pub fn truncate(self) -> Vec3 {
        self.xyz()
    }

    /// Per-lane sign: `1.0`, `-1.0`, or `0.0` for zero and NaN lanes.
    #[inline(always)]
    pub fn sign(self) -> Self {
        let lanes = self.lanes();
        let zero = F32x4::zero();

        let positive = lanes.gt_mask(zero) & F32x4::splat(1.0);
        let negative = lanes.lt_mask(zero) & F32x4::splat(-1.0);

        Self::from_lanes(positive | negative)
    }

    /// `(x0 + z0) + (y0 + w0)` where `x0 = a.x * b.x` and so on.
    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f32 {
        (self.lanes() * rhs.lanes()).sum4()
    }

    #[inline(always)]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// Approximate length, `s * rsqrt_approx(s)` with `s = sqr_magnitude()`.
    ///
    /// Relative error is within [`crate::RSQRT_RELATIVE_ERROR`]. The zero vector
    /// yields NaN (`0 * inf`), and so does a vector whose `sqr_magnitude`
    /// overflows to infinity (`inf * 0`), where [`Vec3::magnitude`] gives inf.
    #[inline(always)]
    pub fn magnitude(self) -> f32 {
        let s = F32x4::splat(self.sqr_magnitude());
        (s * s.rsqrt_approx()).lane0()
    }

    /// `self * rsqrt_approx(sqr_magnitude())`, within
    /// [`crate::RSQRT_RELATIVE_ERROR`] of unit length.
    ///
    /// A zero vector gives NaN components.
    #[inline(always)]
    pub fn normalized(self) -> Self {
        let inv = F32x4::splat(self.sqr_magnitude()).rsqrt_approx();
        Self::from_lanes(self.lanes() * inv)
    }

    /// Cross product of the xyz parts, computed over the full register.
    ///
    /// The result's `w` is `a.w*b.w - a.w*b.w`, which is `0` for finite input.
    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self {
        ops::cross(self, rhs)
    }

    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0, 0.0)
    }

    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0, 0.0)
    }

    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0, 0.0)
    }

    /// Positive `w` direction.
    #[doc(alias = "in")]
    pub const fn inward() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Negative `w` direction.
    #[doc(alias = "out")]
    pub const fn outward() -> Self {
        Self::new(0.0, 0.0, 0.0, -1.0)
    }

    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Homogeneous origin point `(0, 0, 0, 1)`.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl SimdVector for Vec4 {
    #[inline(always)]
    fn lanes(self) -> F32x4 {
        F32x4::from_array(self.to_array())
    }

    #[inline(always)]
    fn from_lanes(lanes: F32x4) -> Self {
        let [x, y, z, w] = lanes.to_array();
        Self { x, y, z, w }
    }

    #[inline(always)]
    fn broadcast(s: f32) -> F32x4 {
        F32x4::splat(s)
    }

    #[inline(always)]
    fn broadcast_divisor(s: f32) -> F32x4 {
        F32x4::splat(s)
    }
}

impl_vector_ops!(Vec4);

impl std::ops::Div for Vec4 {
    type Output = Vec4;

    #[inline(always)]
    fn div(self, rhs: Vec4) -> Vec4 {
        ops::div(self, rhs)
    }
}

impl std::ops::Div<Vec4> for f32 {
    type Output = Vec4;

    #[inline(always)]
    fn div(self, rhs: Vec4) -> Vec4 {
        ops::scalar_div(self, rhs)
    }
}

impl std::ops::DivAssign for Vec4 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Vec4) {
        *self = *self / rhs;
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl From<(f32, Vec3)> for Vec4 {
    fn from((x, yzw): (f32, Vec3)) -> Self {
        Self::from_x_yzw(x, yzw)
    }
}

impl From<(Vec3, f32)> for Vec4 {
    fn from((xyz, w): (Vec3, f32)) -> Self {
        Self::from_xyz_w(xyz, w)
    }
}

impl From<(f32, f32, Vec2)> for Vec4 {
    fn from((x, y, zw): (f32, f32, Vec2)) -> Self {
        Self::from_x_y_zw(x, y, zw)
    }
}

impl From<(Vec2, f32, f32)> for Vec4 {
    fn from((xy, z, w): (Vec2, f32, f32)) -> Self {
        Self::from_xy_z_w(xy, z, w)
    }
}

impl From<(f32, Vec2, f32)> for Vec4 {
    fn from((x, yz, w): (f32, Vec2, f32)) -> Self {
        Self::from_x_yz_w(x, yz, w)
    }
}

impl TryFrom<&[f32]> for Vec4 {
    type Error = VectorError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        check_length(4, slice.len(), "slice must hold exactly the 4 components of a Vec4")?;
        Ok(Self::new(slice[0], slice[1], slice[2], slice[3]))
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RSQRT_RELATIVE_ERROR;

    #[test]
    fn test_sign() {
        let s = Vec4::new(3.5, -0.25, 0.0, -0.0).sign();
        assert_eq!(s.to_array(), [1.0, -1.0, 0.0, 0.0]);

        let s = Vec4::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.0e-30).sign();
        assert_eq!(s.to_array(), [0.0, 1.0, -1.0, 1.0]);
        assert_eq!(s.x().to_bits(), 0);
    }

    #[test]
    fn test_magnitude_is_approximate() {
        let m = Vec4::one().magnitude();
        println!("Vec4::one().magnitude() = {m:.8}");

        assert!((m - 2.0).abs() <= 2.0 * RSQRT_RELATIVE_ERROR);
    }

    #[test]
    fn test_magnitude_of_zero_is_nan() {
        assert!(Vec4::zero().magnitude().is_nan());
        assert!(Vec4::zero().normalized().to_array().iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_magnitude_overflow_is_nan() {
        let v = Vec4::new(1.0e20, 0.0, 0.0, 0.0);

        assert_eq!(v.sqr_magnitude(), f32::INFINITY);
        assert!(v.magnitude().is_nan());
        assert_eq!(v.xyz().magnitude(), f32::INFINITY);
    }

    #[test]
    fn test_negation_flips_zero_sign() {
        let n = -Vec4::zero();

        assert!(n.to_array().iter().all(|c| c.is_sign_negative()));
        assert_eq!((-Vec4::new(1.0, -2.0, 3.0, -4.0)).to_array(), [-1.0, 2.0, -3.0, 4.0]);
    }

    #[test]
    fn test_dot_uses_all_lanes() {
        assert_eq!(Vec4::one().dot(Vec4::new(1.0, 2.0, 3.0, 4.0)), 10.0);
        assert_eq!(Vec4::inward().dot(Vec4::origin()), 1.0);
    }

    #[test]
    fn test_cross_xyz_and_w() {
        let c = Vec4::from((Vec3::right(), 2.0)).cross(Vec4::from((Vec3::up(), 5.0)));

        assert_eq!(c, Vec4::forward());
        assert_eq!(c.w(), 0.0);
    }

    #[test]
    fn test_division_forms() {
        let v = Vec4::new(2.0, 4.0, 8.0, 16.0);

        assert_eq!((v / 2.0).to_array(), [1.0, 2.0, 4.0, 8.0]);
        assert_eq!((16.0 / v).to_array(), [8.0, 4.0, 2.0, 1.0]);
        assert_eq!((v / Vec4::new(2.0, 2.0, 4.0, 4.0)).to_array(), [1.0, 2.0, 2.0, 4.0]);

        let mut u = v;
        u /= Vec4::one() * 2.0;
        assert_eq!(u, v / 2.0);
    }

    #[test]
    fn test_lifting_constructors() {
        let xy = Vec2::new(1.0, 2.0);
        let xyz = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(Vec4::from((0.0, xyz)).to_array(), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(Vec4::from((xyz, 4.0)).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vec4::from((5.0, 6.0, xy)).to_array(), [5.0, 6.0, 1.0, 2.0]);
        assert_eq!(Vec4::from((xy, 5.0, 6.0)).to_array(), [1.0, 2.0, 5.0, 6.0]);
        assert_eq!(Vec4::from((5.0, xy, 6.0)).to_array(), [5.0, 1.0, 2.0, 6.0]);
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Vec4::origin(), Vec4::inward());
        assert_eq!(-Vec4::inward(), Vec4::outward());
        assert_eq!(Vec4::origin().xyz(), Vec3::zero());
        assert_eq!(Vec4::left() + Vec4::right(), Vec4::zero());
    }

    #[test]
    fn test_register_round_trip() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec4::from_register(v.to_register()).to_array(), v.to_array());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec4::new(1.0, 0.5, -2.0, 0.0).to_string(), "(1, 0.5, -2, 0)");
    }
}
