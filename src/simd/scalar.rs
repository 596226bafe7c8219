//! Portable 4-lane backend over `[f32; 4]`.
//!
//! Used when neither SSE2 nor NEON is available, or when the `scalar` feature is
//! enabled. Every exact operation performs the same IEEE-754 steps in the same
//! order as the hardware backends, so results match them bit for bit.

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Sub};

use crate::simd::traits::SimdLanes;

/// Register stand-in for targets without a 128-bit float register.
pub type Register = [f32; 4];

const TRUE_MASK: u32 = u32::MAX;

/// Four f32 lanes computed one at a time.
#[derive(Copy, Clone, Debug, Default)]
#[repr(C, align(16))]
pub struct F32x4 {
    elements: [f32; 4],
}

impl F32x4 {
    #[inline(always)]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            elements: self.elements.map(f),
        }
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let [a0, a1, a2, a3] = self.elements;
        let [b0, b1, b2, b3] = rhs.elements;

        Self {
            elements: [f(a0, b0), f(a1, b1), f(a2, b2), f(a3, b3)],
        }
    }

    #[inline(always)]
    fn zip_bits(self, rhs: Self, f: impl Fn(u32, u32) -> u32) -> Self {
        self.zip(rhs, |a, b| f32::from_bits(f(a.to_bits(), b.to_bits())))
    }

    #[inline(always)]
    fn mask(condition: bool) -> f32 {
        f32::from_bits(if condition { TRUE_MASK } else { 0 })
    }
}

/// Reciprocal square root estimate: bit-level initial guess refined by one
/// Newton-Raphson step. Max relative error is about 1.75e-3.
///
/// Subnormal inputs are flushed to zero, as `rsqrtps` does.
#[inline(always)]
pub(crate) fn rsqrt_estimate(x: f32) -> f32 {
    if x.abs() < f32::MIN_POSITIVE {
        return f32::INFINITY.copysign(x);
    }
    if x.is_nan() || x < 0.0 {
        return f32::NAN;
    }
    if x.is_infinite() {
        return 0.0;
    }

    let y = f32::from_bits(0x5f37_5a86 - (x.to_bits() >> 1));
    y * (1.5 - 0.5 * x * y * y)
}

impl SimdLanes for F32x4 {
    type Register = Register;

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self {
        Self { elements: lanes }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        self.elements
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: [value; 4],
        }
    }

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline(always)]
    fn from_register(register: Register) -> Self {
        Self::from_array(register)
    }

    #[inline(always)]
    fn to_register(self) -> Register {
        self.elements
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(|lane| f32::from_bits(lane.to_bits() & 0x7fff_ffff))
    }

    #[inline(always)]
    fn rsqrt_approx(self) -> Self {
        self.map(rsqrt_estimate)
    }

    #[inline(always)]
    fn lt_mask(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| Self::mask(a < b))
    }

    #[inline(always)]
    fn gt_mask(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| Self::mask(a > b))
    }

    #[inline(always)]
    fn all_lanes(self) -> bool {
        self.elements
            .iter()
            .all(|lane| lane.to_bits() & 0x8000_0000 != 0)
    }

    #[inline(always)]
    fn yzxw(self) -> Self {
        let [x, y, z, w] = self.elements;
        Self::from_array([y, z, x, w])
    }

    #[inline(always)]
    fn zxyw(self) -> Self {
        let [x, y, z, w] = self.elements;
        Self::from_array([z, x, y, w])
    }

    #[inline(always)]
    fn clear_w(self) -> Self {
        let [x, y, z, _] = self.elements;
        Self::from_array([x, y, z, 0.0])
    }

    #[inline(always)]
    fn sum3(self) -> f32 {
        let [x, y, z, _] = self.elements;
        (x + y) + z
    }

    #[inline(always)]
    fn sum4(self) -> f32 {
        let [x, y, z, w] = self.elements;
        (x + z) + (y + w)
    }

    #[inline(always)]
    fn lane0(self) -> f32 {
        self.elements[0]
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a / b)
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.zip_bits(rhs, |a, b| a & b)
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.zip_bits(rhs, |a, b| a | b)
    }
}
