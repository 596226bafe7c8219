//! Fixed-size `f32` vectors backed by a single 128-bit SIMD register.
//!
//! [`Vec3`] and [`Vec4`] store their components in a 16-byte aligned layout that
//! converts directly to the platform register (`__m128` on x86/x86_64 with SSE2,
//! `float32x4_t` on AArch64 with NEON). On any other target the same operations
//! run on a portable scalar backend. The backend is picked by `build.rs`, and the
//! `scalar` cargo feature forces the portable one.
//!
//! ```rust
//! use simdvec::{Vec3, Vec4};
//!
//! let n = Vec3::cross(Vec3::right(), Vec3::up());
//! assert_eq!(n, Vec3::forward());
//!
//! let p = Vec4::from((n, 1.0));
//! assert_eq!(p.truncate(), n);
//! ```

pub mod batch;
pub mod error;
mod ops;
pub mod simd;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use batch::SimdBatch;
pub use error::{Result, VectorError};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Absolute per-component tolerance used by every `==` on vector types.
pub const EPSILON: f32 = 1.0e-5;

/// Upper bound on the relative error of the approximate reciprocal square root
/// used by [`Vec4::magnitude`] and [`Vec4::normalized`], across all backends,
/// for normal (non-subnormal) squared lengths.
pub const RSQRT_RELATIVE_ERROR: f32 = 2.0e-3;

/// Slices at or below this length are processed sequentially by `par_*` batch ops.
pub const PARALLEL_SIMD_THRESHOLD: usize = 16_384;

/// Number of vectors handed to one rayon task.
pub const PARALLEL_CHUNK_SIZE: usize = 4_096;
