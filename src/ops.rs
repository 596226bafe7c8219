//! Generic lane-wise arithmetic shared by [`Vec3`](crate::Vec3) and
//! [`Vec4`](crate::Vec4).
//!
//! A vector type only describes how it moves in and out of [`F32x4`] and how a
//! scalar is broadcast for it. The free functions below do the actual work;
//! `impl_vector_ops!` only emits the operator trait impls that coherence
//! requires per concrete type.

use crate::simd::{F32x4, SimdLanes};
use crate::EPSILON;

pub(crate) trait SimdVector: Copy {
    fn lanes(self) -> F32x4;

    /// Wraps lanes produced by arithmetic on `lanes()` values.
    fn from_lanes(lanes: F32x4) -> Self;

    /// Broadcast of `s` used for `+`, `-` and `*`.
    fn broadcast(s: f32) -> F32x4;

    /// Broadcast of `s` used as a divisor.
    fn broadcast_divisor(s: f32) -> F32x4;
}

#[inline(always)]
pub(crate) fn add<V: SimdVector>(a: V, b: V) -> V {
    V::from_lanes(a.lanes() + b.lanes())
}

#[inline(always)]
pub(crate) fn sub<V: SimdVector>(a: V, b: V) -> V {
    V::from_lanes(a.lanes() - b.lanes())
}

#[inline(always)]
pub(crate) fn mul<V: SimdVector>(a: V, b: V) -> V {
    V::from_lanes(a.lanes() * b.lanes())
}

#[inline(always)]
pub(crate) fn div<V: SimdVector>(a: V, b: V) -> V {
    V::from_lanes(a.lanes() / b.lanes())
}

#[inline(always)]
pub(crate) fn add_scalar<V: SimdVector>(a: V, s: f32) -> V {
    V::from_lanes(a.lanes() + V::broadcast(s))
}

#[inline(always)]
pub(crate) fn scalar_add<V: SimdVector>(s: f32, a: V) -> V {
    V::from_lanes(V::broadcast(s) + a.lanes())
}

#[inline(always)]
pub(crate) fn sub_scalar<V: SimdVector>(a: V, s: f32) -> V {
    V::from_lanes(a.lanes() - V::broadcast(s))
}

#[inline(always)]
pub(crate) fn scalar_sub<V: SimdVector>(s: f32, a: V) -> V {
    V::from_lanes(V::broadcast(s) - a.lanes())
}

#[inline(always)]
pub(crate) fn mul_scalar<V: SimdVector>(a: V, s: f32) -> V {
    V::from_lanes(a.lanes() * V::broadcast(s))
}

#[inline(always)]
pub(crate) fn scalar_mul<V: SimdVector>(s: f32, a: V) -> V {
    V::from_lanes(V::broadcast(s) * a.lanes())
}

#[inline(always)]
pub(crate) fn div_scalar<V: SimdVector>(a: V, s: f32) -> V {
    V::from_lanes(a.lanes() / V::broadcast_divisor(s))
}

/// Only meaningful for types whose `broadcast` fills every lane.
#[inline(always)]
pub(crate) fn scalar_div<V: SimdVector>(s: f32, a: V) -> V {
    V::from_lanes(V::broadcast(s) / a.lanes())
}

#[inline(always)]
pub(crate) fn neg<V: SimdVector>(a: V) -> V {
    V::from_lanes(a.lanes() * V::broadcast(-1.0))
}

/// Lanes of `a` and `b` all differ by strictly less than [`EPSILON`].
#[inline(always)]
pub(crate) fn approx_eq<V: SimdVector>(a: V, b: V) -> bool {
    (a.lanes() - b.lanes())
        .abs()
        .lt_mask(F32x4::splat(EPSILON))
        .all_lanes()
}

/// Cross product of the xyz lanes; the w lane is `a.w*b.w - a.w*b.w`.
#[inline(always)]
pub(crate) fn cross<V: SimdVector>(a: V, b: V) -> V {
    let (a, b) = (a.lanes(), b.lanes());
    V::from_lanes(a.yzxw() * b.zxyw() - a.zxyw() * b.yzxw())
}

macro_rules! impl_vector_ops {
    ($ty:ty) => {
        impl std::ops::Add for $ty {
            type Output = $ty;

            #[inline(always)]
            fn add(self, rhs: $ty) -> $ty {
                $crate::ops::add(self, rhs)
            }
        }

        impl std::ops::Add<f32> for $ty {
            type Output = $ty;

            #[inline(always)]
            fn add(self, rhs: f32) -> $ty {
                $crate::ops::add_scalar(self, rhs)
            }
        }

        impl std::ops::Add<$ty> for f32 {
            type Output = $ty;

            #[inline(always)]
            fn add(self, rhs: $ty) -> $ty {
                $crate::ops::scalar_add(self, rhs)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = $ty;

            #[inline(always)]
            fn sub(self, rhs: $ty) -> $ty {
                $crate::ops::sub(self, rhs)
            }
        }

        impl std::ops::Sub<f32> for $ty {
            type Output = $ty;

            #[inline(always)]
            fn sub(self, rhs: f32) -> $ty {
                $crate::ops::sub_scalar(self, rhs)
            }
        }

        impl std::ops::Sub<$ty> for f32 {
            type Output = $ty;

            #[inline(always)]
            fn sub(self, rhs: $ty) -> $ty {
                $crate::ops::scalar_sub(self, rhs)
            }
        }

        impl std::ops::Mul for $ty {
            type Output = $ty;

            #[inline(always)]
            fn mul(self, rhs: $ty) -> $ty {
                $crate::ops::mul(self, rhs)
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = $ty;

            #[inline(always)]
            fn mul(self, rhs: f32) -> $ty {
                $crate::ops::mul_scalar(self, rhs)
            }
        }

        impl std::ops::Mul<$ty> for f32 {
            type Output = $ty;

            #[inline(always)]
            fn mul(self, rhs: $ty) -> $ty {
                $crate::ops::scalar_mul(self, rhs)
            }
        }

        impl std::ops::Div<f32> for $ty {
            type Output = $ty;

            #[inline(always)]
            fn div(self, rhs: f32) -> $ty {
                $crate::ops::div_scalar(self, rhs)
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;

            #[inline(always)]
            fn neg(self) -> $ty {
                $crate::ops::neg(self)
            }
        }

        impl std::ops::AddAssign for $ty {
            #[inline(always)]
            fn add_assign(&mut self, rhs: $ty) {
                *self = *self + rhs;
            }
        }

        impl std::ops::AddAssign<f32> for $ty {
            #[inline(always)]
            fn add_assign(&mut self, rhs: f32) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $ty {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: $ty) {
                *self = *self - rhs;
            }
        }

        impl std::ops::SubAssign<f32> for $ty {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: f32) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign for $ty {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: $ty) {
                *self = *self * rhs;
            }
        }

        impl std::ops::MulAssign<f32> for $ty {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<f32> for $ty {
            #[inline(always)]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl PartialEq for $ty {
            /// Epsilon equality, see [`EPSILON`](crate::EPSILON).
            #[inline(always)]
            fn eq(&self, other: &$ty) -> bool {
                $crate::ops::approx_eq(*self, *other)
            }
        }

        impl std::iter::Sum for $ty {
            fn sum<I: Iterator<Item = $ty>>(iter: I) -> $ty {
                iter.fold(<$ty>::zero(), |acc, v| acc + v)
            }
        }

        impl<'a> std::iter::Sum<&'a $ty> for $ty {
            fn sum<I: Iterator<Item = &'a $ty>>(iter: I) -> $ty {
                iter.fold(<$ty>::zero(), |acc, v| acc + *v)
            }
        }

        impl num::Zero for $ty {
            #[inline(always)]
            fn zero() -> $ty {
                <$ty>::zero()
            }

            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == <$ty>::zero()
            }
        }

        impl num::One for $ty {
            #[inline(always)]
            fn one() -> $ty {
                <$ty>::one()
            }
        }
    };
}

pub(crate) use impl_vector_ops;
