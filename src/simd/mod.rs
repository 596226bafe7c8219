//! 128-bit lane backends.
//!
//! Exactly one of `sse`, `neon` or `fallback` is set by `build.rs`, and the
//! matching [`F32x4`] / [`Register`] pair is re-exported here. The portable
//! [`scalar`] backend is always compiled so other backends can be checked
//! against it.

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

pub mod scalar;

pub mod traits;

pub use traits::SimdLanes;

#[cfg(sse)]
pub use sse::{F32x4, Register};

#[cfg(neon)]
pub use neon::{F32x4, Register};

#[cfg(fallback)]
pub use scalar::{F32x4, Register};

/// Name of the backend selected at build time.
pub const BACKEND: &str = if cfg!(sse) {
    "sse"
} else if cfg!(neon) {
    "neon"
} else {
    "scalar"
};
