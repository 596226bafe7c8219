//! SSE 4-lane f32 backend.
//!
//! Wraps `__m128`. Only SSE and SSE2 instructions are used, which are part of
//! the x86_64 baseline; `build.rs` only selects this backend when `sse2` is
//! enabled for the target.
//!
//! # Precision
//!
//! `rsqrt_approx` is a single `_mm_rsqrt_ps` with a relative error of at most
//! `1.5 * 2^-12`. All other operations are exact.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Sub};

use crate::simd::traits::SimdLanes;

/// SSE memory alignment requirement in bytes.
pub const SSE_ALIGNMENT: usize = 16;

/// Native register type.
pub type Register = __m128;

// Shuffle immediates, two bits per destination lane from w down to x.
// (y, z, x, w)
const YZXW: i32 = 0b11_00_10_01;
// (z, x, y, w)
const ZXYW: i32 = 0b11_01_00_10;
// (y, y, y, y)
const YYYY: i32 = 0b01_01_01_01;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    elements: __m128,
}

impl F32x4 {
    #[inline(always)]
    fn wrap(elements: __m128) -> Self {
        Self { elements }
    }
}

impl SimdLanes for F32x4 {
    type Register = Register;

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self {
        // SAFETY: `lanes` is 4 initialized f32; unaligned load has no alignment requirement.
        Self::wrap(unsafe { _mm_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        // SAFETY: `out` has room for exactly 4 f32.
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.elements) };
        out
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self::wrap(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    fn zero() -> Self {
        Self::wrap(unsafe { _mm_setzero_ps() })
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
        Self::wrap(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.elements) })
    }

    #[inline(always)]
    fn rsqrt_approx(self) -> Self {
        Self::wrap(unsafe { _mm_rsqrt_ps(self.elements) })
    }

    #[inline(always)]
    fn lt_mask(self, rhs: Self) -> Self {
        Self::wrap(unsafe { _mm_cmplt_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn gt_mask(self, rhs: Self) -> Self {
        Self::wrap(unsafe { _mm_cmpgt_ps(self.elements, rhs.elements) })
    }

    #[inline(always)]
    fn all_lanes(self) -> bool {
        unsafe { _mm_movemask_ps(self.elements) == 0b1111 }
    }

    #[inline(always)]
    fn yzxw(self) -> Self {
        Self::wrap(unsafe { _mm_shuffle_ps::<YZXW>(self.elements, self.elements) })
    }

    #[inline(always)]
    fn zxyw(self) -> Self {
        Self::wrap(unsafe { _mm_shuffle_ps::<ZXYW>(self.elements, self.elements) })
    }

    #[inline(always)]
    fn clear_w(self) -> Self {
        unsafe {
            let keep_xyz = _mm_castsi128_ps(_mm_set_epi32(0, -1, -1, -1));
            Self::wrap(_mm_and_ps(self.elements, keep_xyz))
        }
    }

    #[inline(always)]
    fn sum3(self) -> f32 {
        unsafe {
            let c = self.elements;
            // lane 0: (x + y) + z
            let xy = _mm_add_ss(c, _mm_shuffle_ps::<YYYY>(c, c));
            _mm_cvtss_f32(_mm_add_ss(xy, _mm_unpackhi_ps(c, c)))
        }
    }

    #[inline(always)]
    fn sum4(self) -> f32 {
        unsafe {
            let c = self.elements;
            // [x + z, y + w, ..]
            let pairs = _mm_add_ps(c, _mm_movehl_ps(c, c));
            _mm_cvtss_f32(_mm_add_ss(pairs, _mm_shuffle_ps::<YYYY>(pairs, pairs)))
        }
    }

    #[inline(always)]
    fn lane0(self) -> f32 {
        unsafe { _mm_cvtss_f32(self.elements) }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { _mm_add_ps(self.elements, rhs.elements) })
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { _mm_sub_ps(self.elements, rhs.elements) })
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { _mm_mul_ps(self.elements, rhs.elements) })
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { _mm_div_ps(self.elements, rhs.elements) })
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { _mm_and_ps(self.elements, rhs.elements) })
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::wrap(unsafe { _mm_or_ps(self.elements, rhs.elements) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(align(16))]
    struct AlignedSseData([f32; 4]);

    #[test]
    fn test_register_matches_memory_layout() {
        let data = AlignedSseData([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(data.0.as_ptr() as usize % SSE_ALIGNMENT, 0);

        let v = F32x4::wrap(unsafe { _mm_load_ps(data.0.as_ptr()) });
        assert_eq!(v.to_array(), data.0);
        assert_eq!(v.lane0(), 1.0);
    }

    #[test]
    fn test_shuffle_constants() {
        let v = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);

        assert_eq!(v.yzxw().to_array(), [2.0, 3.0, 1.0, 4.0]);
        assert_eq!(v.zxyw().to_array(), [3.0, 1.0, 2.0, 4.0]);

        let yyyy = F32x4::wrap(unsafe { _mm_shuffle_ps::<YYYY>(v.elements, v.elements) });
        assert_eq!(yyyy.to_array(), [2.0; 4]);
    }

    #[test]
    fn test_clear_w() {
        let v = F32x4::from_array([1.0, -2.0, 3.0, f32::NAN]).clear_w();

        assert_eq!(v.to_array(), [1.0, -2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_sum3_ignores_w() {
        let v = F32x4::from_array([1.0, 2.0, 3.0, 1000.0]);

        assert_eq!(v.sum3(), 6.0);
        assert_eq!(v.sum4(), 1006.0);
    }
}
