//! ARM NEON 4-lane f32 backend.
//!
//! Wraps `float32x4_t`. NEON has no immediate-controlled float shuffle, so the
//! cross-product lane permutations go through a byte table lookup.
//!
//! # Precision
//!
//! `vrsqrteq_f32` alone only gives about 8 bits, so `rsqrt_approx` refines it
//! with one `vrsqrtsq_f32` Newton-Raphson step.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Sub};

use crate::simd::traits::SimdLanes;

pub const NEON_ALIGNMENT: usize = 16;

/// Native register type.
pub type Register = float32x4_t;

// Byte indices for vqtbl1q_u8, 4 bytes per f32 lane
const YZXW: [u8; 16] = [4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 12, 13, 14, 15];
const ZXYW: [u8; 16] = [8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 12, 13, 14, 15];

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: float32x4_t,
}

impl F32x4 {
    #[inline(always)]
    fn wrap(elements: float32x4_t) -> Self {
        Self { elements }
    }

    #[inline(always)]
    fn from_mask(mask: uint32x4_t) -> Self {
        Self::wrap(unsafe { vreinterpretq_f32_u32(mask) })
    }

    #[inline(always)]
    fn as_mask(self) -> uint32x4_t {
        unsafe { vreinterpretq_u32_f32(self.elements) }
    }

    #[inline(always)]
    fn permute(self, table: &[u8; 16]) -> Self {
        unsafe {
            let bytes = vreinterpretq_u8_f32(self.elements);
            let idx = vld1q_u8(table.as_ptr());
            Self::wrap(vreinterpretq_f32_u8(vqtbl1q_u8(bytes, idx)))
        }
    }
}

impl SimdLanes for F32x4 {
    type Register = Register;

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self {
        // SAFETY: `lanes` is 4 initialized f32.
        Self::wrap(unsafe { vld1q_f32(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        // SAFETY: `out` has room for exactly 4 f32.
        unsafe { vst1q_f32(out.as_mut_ptr(), self.elements) };
        out
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::wrap(unsafe { vdupq_n_f32(value) })
    }

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline(always)]
    fn from_register(register: Register) -> Self {
        Self::wrap(register)
    }

    #[inline(always)]
    fn to_register(self) -> Register {
        self.elements
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::wrap(unsafe { vabsq_f32(self.elements) })
    }

    #[inline(always)]
    fn rsqrt_approx(self) -> Self {
        unsafe {
            let x = self.elements;
            let estimate = vrsqrteq_f32(x);
            // x * (e * e) keeps the 0 * inf special case inside vrsqrts,
            // so +-0 and +inf keep their hardware results
            let step = vrsqrtsq_f32(x, vmulq_f32(estimate, estimate));
            Self::wrap(vmulq_f32(estimate, step))
        }
    }

    #[inline(always)]
    fn lt_mask(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcltq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_mask(self, rhs: Self) -> Self {
        Self::from_mask(unsafe { vcgtq_f32(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn all_lanes(self) -> bool {
        // Minimum lane is u32::MAX only if every lane is set
        unsafe { vminvq_u32(self.as_mask()) == u32::MAX }
    }

    #[inline(always)]
    fn yzxw(self) -> Self {
        self.permute(&YZXW)
    }

    #[inline(always)]
    fn zxyw(self) -> Self {
        self.permute(&ZXYW)
    }

    #[inline(always)]
    fn clear_w(self) -> Self {
        Self::wrap(unsafe { vsetq_lane_f32(0.0, self.elements, 3) })
    }

    #[inline(always)]
    fn sum3(self) -> f32 {
        unsafe {
            let c = self.elements;
            (vgetq_lane_f32(c, 0) + vgetq_lane_f32(c, 1)) + vgetq_lane_f32(c, 2)
        }
    }

    #[inline(always)]
    fn sum4(self) -> f32 {
        unsafe {
            // [x + z, y + w]
            let pairs = vadd_f32(vget_low_f32(self.elements), vget_high_f32(self.elements));
            vpadds_f32(pairs)
        }
    }

    #[inline(always)]
    fn lane0(self) -> f32 {
        unsafe { vgetq_lane_f32(self.elements, 0) }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { vaddq_f32(self.elements, rhs.elements) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { vsubq_f32(self.elements, rhs.elements) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { vmulq_f32(self.elements, rhs.elements) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { vdivq_f32(self.elements, rhs.elements) })
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_mask(unsafe { vandq_u32(self.as_mask(), rhs.as_mask()) })
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_mask(unsafe { vorrq_u32(self.as_mask(), rhs.as_mask()) })
    }
}
