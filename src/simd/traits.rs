use std::ops::{Add, BitAnd, BitOr, Div, Mul, Sub};

/// Operations every 4 x f32 lane backend provides.
///
/// Lane order is `[x, y, z, w]`. Comparison methods return a lane mask (all bits
/// set for true, zero for false) stored in the same type so it can be combined
/// with `&` and `|`.
///
/// Everything except [`rsqrt_approx`](SimdLanes::rsqrt_approx) is exact IEEE-754
/// arithmetic and yields bit-identical results on every backend.
pub trait SimdLanes:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
{
    /// Native register type the lanes live in.
    type Register: Copy;

    fn from_array(lanes: [f32; 4]) -> Self;

    fn to_array(self) -> [f32; 4];

    /// Broadcasts `value` to all four lanes.
    fn splat(value: f32) -> Self;

    fn zero() -> Self;

    fn from_register(register: Self::Register) -> Self;

    fn to_register(self) -> Self::Register;

    /// Clears the sign bit of every lane.
    fn abs(self) -> Self;

    /// Approximate `1 / sqrt(x)` per lane, within [`crate::RSQRT_RELATIVE_ERROR`]
    /// for normal positive input.
    ///
    /// `±0` maps to `±inf`, `+inf` to `0` and negative or NaN input to NaN.
    /// Subnormal input may be flushed to zero.
    fn rsqrt_approx(self) -> Self;

    /// Lane mask of `self < rhs`.
    fn lt_mask(self, rhs: Self) -> Self;

    /// Lane mask of `self > rhs`.
    fn gt_mask(self, rhs: Self) -> Self;

    /// `true` if `self` is a mask with all four lanes set.
    fn all_lanes(self) -> bool;

    /// `[y, z, x, w]`
    fn yzxw(self) -> Self;

    /// `[z, x, y, w]`
    fn zxyw(self) -> Self;

    /// Replaces the `w` lane with `0.0`.
    fn clear_w(self) -> Self;

    /// `(x + y) + z`; the `w` lane is not read.
    fn sum3(self) -> f32;

    /// `(x + z) + (y + w)`
    fn sum4(self) -> f32;

    fn lane0(self) -> f32;
}
