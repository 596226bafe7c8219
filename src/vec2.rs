use std::fmt;

use crate::error::{check_length, VectorError};
use crate::{Vec3, EPSILON};

/// A two-component vector.
///
/// Plain pair of floats with no register behind it. It exists mainly as a
/// fragment for building [`Vec3`] and [`Vec4`](crate::Vec4) values, so it
/// carries no arithmetic operators.
#[derive(Copy, Clone, Debug, Default)]
#[repr(C)]
pub struct Vec2 {
    x: f32,
    y: f32,
}

impl Vec2 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
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
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    #[inline(always)]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// Lifts to a [`Vec3`] with the given `z`.
    #[inline(always)]
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::from_xy_z(self, z)
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl PartialEq for Vec2 {
    /// Epsilon equality, see [`EPSILON`].
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = VectorError;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        check_length(2, slice.len(), "slice must hold exactly the 2 components of a Vec2")?;
        Ok(Self::new(slice[0], slice[1]))
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_alias_storage() {
        let mut v = Vec2::new(1.0, 2.0);
        *v.x_mut() = 5.0;
        *v.y_mut() += 1.0;

        assert_eq!(v.x(), 5.0);
        assert_eq!(v.y(), 3.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vec2::default().to_array(), [0.0, 0.0]);
    }

    #[test]
    fn test_epsilon_equality() {
        let v = Vec2::new(1.0, -1.0);

        assert_eq!(v, Vec2::new(1.0 + EPSILON / 2.0, -1.0));
        assert_ne!(v, Vec2::new(1.0, -1.0 + 10.0 * EPSILON));
    }

    #[test]
    fn test_try_from_slice() {
        let v = Vec2::try_from([3.0f32, 4.0].as_slice()).unwrap();
        assert_eq!(v.to_array(), [3.0, 4.0]);

        let err = Vec2::try_from([1.0f32, 2.0, 3.0].as_slice()).unwrap_err();
        assert_eq!(
            err,
            crate::error::length_error(
                2,
                3,
                "slice must hold exactly the 2 components of a Vec2"
            )
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1.0, -0.5).to_string(), "(1, -0.5)");
    }

    #[test]
    fn test_extend() {
        let v = Vec2::new(1.0, 2.0).extend(3.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }
}
