//! Three-component vector stored in a 4-lane register layout.
//!
//! The fourth lane is padding. It is zero after every constructor and every
//! arithmetic operator, which is what lets [`Vec3::dot`] and the equality test
//! run on whole registers without masking. Scalars are broadcast as
//! `(s, s, s, 0)`, and as `(s, s, s, 1)` when used as a divisor, so the padding
//! lane stays zero even for `v + s` or `v / 0.0`.

use std::fmt;

use crate::error::{check_length, VectorError};
use crate::ops::{self, impl_vector_ops, SimdVector};
use crate::simd::{F32x4, Register, SimdLanes};
use crate::{Vec2, Vec4};

/// A three-component `f32` vector.
///
/// Equality is epsilon equality, see [`EPSILON`](crate::EPSILON).
#[derive(Copy, Clone, Default)]
#[repr(C, align(16))]
pub struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
    pad: f32,
}

impl Vec3 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, pad: 0.0 }
    }

    /// `(xy.x, xy.y, z)`
    #[inline(always)]
    pub fn from_xy_z(xy: Vec2, z: f32) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    /// `(x, yz.x, yz.y)`
    #[inline(always)]
    pub fn from_x_yz(x: f32, yz: Vec2) -> Self {
        Self::new(x, yz.x(), yz.y())
    }

    /// Builds a vector from a native register. The register's fourth lane is
    /// discarded.
    #[inline(always)]
    pub fn from_register(register: Register) -> Self {
        Self::from_lanes(F32x4::from_register(register).clear_w())
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
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// All four storage lanes, padding included.
    #[inline(always)]
    pub fn to_lanes(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.pad]
    }

    /// Lifts to a [`Vec4`] with the given `w`.
    #[inline(always)]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::from_xyz_w(self, w)
    }

    /// Drops `z`.
    #[inline(always)]
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// `(a.x * b.x + a.y * b.y) + a.z * b.z`
    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f32 {
        (self.lanes() * rhs.lanes()).sum3()
    }

    #[inline(always)]
    pub fn sqr_magnitude(self) -> f32 {
        self.dot(self)
    }

    /// Exact length, `sqrt(dot(self, self))`.
    #[inline(always)]
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// `self / self.magnitude()`.
    ///
    /// A zero vector gives NaN components.
    #[inline(always)]
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Right-handed cross product: `cross(right(), up()) == forward()`.
    ///
    /// Bit-identical to
    /// `(a.y*b.z - a.z*b.y, a.z*b.x - a.x*b.z, a.x*b.y - a.y*b.x)`.
    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self {
        ops::cross(self, rhs)
    }

    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    pub const fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl SimdVector for Vec3 {
    #[inline(always)]
    fn lanes(self) -> F32x4 {
        F32x4::from_array(self.to_lanes())
    }

    #[inline(always)]
    fn from_lanes(lanes: F32x4) -> Self {
        let [x, y, z, pad] = lanes.to_array();
        Self { x, y, z, pad }
    }

    #[inline(always)]
    fn broadcast(s: f32) -> F32x4 {
        F32x4::from_array([s, s, s, 0.0])
    }

    #[inline(always)]
    fn broadcast_divisor(s: f32) -> F32x4 {
        F32x4::from_array([s, s, s, 1.0])
    }
}

impl_vector_ops!(Vec3);

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<(Vec2, f32)> for Vec3 {
    fn from((xy, z): (Vec2, f32)) -> Self {
        Self::from_xy_z(xy, z)
    }
}

impl From<(f32, Vec2)> for Vec3 {
    fn from((x, yz): (f32, Vec2)) -> Self {
        Self::from_x_yz(x, yz)
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = VectorError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        check_length(3, slice.len(), "slice must hold exactly the 3 components of a Vec3")?;
        Ok(Self::new(slice[0], slice[1], slice[2]))
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn scalar_cross(a: Vec3, b: Vec3) -> [f32; 3] {
        [
            a.y() * b.z() - a.z() * b.y(),
            a.z() * b.x() - a.x() * b.z(),
            a.x() * b.y() - a.y() * b.x(),
        ]
    }

    #[test]
    fn test_new_clears_padding() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).to_lanes(), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(Vec3::default().to_lanes(), [0.0; 4]);
    }

    #[test]
    fn test_mutable_accessors_are_visible_to_operations() {
        let mut v = Vec3::zero();
        *v.x_mut() = 3.0;
        *v.z_mut() = 4.0;

        assert_eq!(v.magnitude(), 5.0);

        *v.y_mut() -= 1.0;
        assert_eq!(v.to_array(), [3.0, -1.0, 4.0]);
    }

    #[test]
    fn test_from_register_discards_fourth_lane() {
        let dirty = F32x4::from_array([1.0, 2.0, 3.0, 99.0]).to_register();
        let v = Vec3::from_register(dirty);

        assert_eq!(v.to_lanes(), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(v.sqr_magnitude(), 14.0);
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(Vec3::right().cross(Vec3::up()), Vec3::forward());
        assert_eq!(Vec3::up().cross(Vec3::forward()), Vec3::right());
        assert_eq!(Vec3::forward().cross(Vec3::right()), Vec3::up());
        assert_eq!(Vec3::up().cross(Vec3::right()), Vec3::back());
    }

    #[test]
    fn test_cross_matches_scalar_formula_bitwise() {
        let a = Vec3::new(1.5, -2.25, 0.1);
        let b = Vec3::new(-7.0, 0.3, 12.5);

        let c = a.cross(b);
        let expected = scalar_cross(a, b);

        for (got, want) in c.to_array().iter().zip(expected.iter()) {
            assert_eq!(got.to_bits(), want.to_bits());
        }
        assert_eq!(c.to_lanes()[3], 0.0);
    }

    #[test]
    fn test_dot_order() {
        let a = Vec3::new(1.0e8, 1.0, -1.0e8);
        assert_eq!(a.dot(Vec3::one()), (1.0e8f32 + 1.0) + -1.0e8);
    }

    #[test]
    fn test_division_by_zero_propagates() {
        let v = Vec3::new(1.0, -1.0, 0.0) / 0.0;

        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
        assert!(v.z().is_nan());
        assert_eq!(v.to_lanes()[3], 0.0);
    }

    #[test]
    fn test_normalized_zero_is_nan() {
        let n = Vec3::zero().normalized();

        assert!(n.to_array().iter().all(|c| c.is_nan()));

        // NaN lanes never compare equal, not even to a copy
        let copy = n;
        assert_ne!(n, copy);
    }

    #[test]
    fn test_negation_flips_zero_sign() {
        let n = -Vec3::zero();

        assert!(n.x().is_sign_negative());
        assert!(n.y().is_sign_negative());
        assert!(n.z().is_sign_negative());
        assert_eq!(n.to_lanes()[3].to_bits(), 0);
        assert_eq!((-Vec3::new(1.0, -2.0, 3.0)).to_array(), [-1.0, 2.0, -3.0]);
    }

    #[test]
    fn test_scalar_operand_order() {
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!((10.0 - v).to_array(), [9.0, 8.0, 7.0]);
        assert_eq!((v - 10.0).to_array(), [-9.0, -8.0, -7.0]);
        assert_eq!((2.0 * v).to_array(), (v * 2.0).to_array());
        assert_eq!((1.0 + v).to_array(), (v + 1.0).to_array());
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Vec3::one();
        v += Vec3::up();
        v *= 2.0;
        v -= 1.0;
        v /= 2.0;

        assert_eq!(v.to_array(), [0.5, 1.5, 0.5]);
        assert_eq!(v.to_lanes()[3], 0.0);
    }

    #[test]
    fn test_epsilon_boundaries() {
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(v, v + Vec3::new(EPSILON / 2.0, 0.0, 0.0));
        assert_ne!(v, v + Vec3::new(10.0 * EPSILON, 0.0, 0.0));
        assert_ne!(v, v - Vec3::new(0.0, 0.0, 10.0 * EPSILON));
    }

    #[test]
    fn test_lifting_constructors() {
        let xy = Vec2::new(1.0, 2.0);

        assert_eq!(Vec3::from((xy, 3.0)).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vec3::from((0.0, xy)).to_array(), [0.0, 1.0, 2.0]);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).truncate(), xy);
    }

    #[test]
    fn test_try_from_slice() {
        assert_eq!(
            Vec3::try_from([1.0f32, 2.0, 3.0].as_slice()).unwrap(),
            Vec3::new(1.0, 2.0, 3.0)
        );
        assert!(Vec3::try_from([1.0f32, 2.0].as_slice()).is_err());
    }

    #[test]
    fn test_sum_and_num_traits() {
        use num::{One, Zero};

        let total: Vec3 = [Vec3::up(), Vec3::right(), Vec3::forward()].iter().sum();
        assert_eq!(total, <Vec3 as One>::one());

        assert!(<Vec3 as Zero>::zero().is_zero());
        assert!(!Vec3::up().is_zero());
    }

    #[test]
    fn test_display_and_debug() {
        let v = Vec3::new(1.0, 2.5, -3.0);

        assert_eq!(v.to_string(), "(1, 2.5, -3)");
        assert_eq!(format!("{v:?}"), "Vec3 { x: 1.0, y: 2.5, z: -3.0 }");
    }
}
