//! Slice-level operations over [`Vec3`] and [`Vec4`].
//!
//! Every operation comes in a sequential and a `par_` flavour. The parallel
//! version splits the work into [`PARALLEL_CHUNK_SIZE`] chunks on the rayon
//! global pool, and simply runs the sequential version for slices at or below
//! [`PARALLEL_SIMD_THRESHOLD`]. Each element is computed independently, so both
//! produce identical results.
//!
//! Outputs are written into caller-provided buffers; nothing here allocates.
//!
//! ```rust
//! use simdvec::{SimdBatch, Vec3};
//!
//! let mut points = vec![Vec3::new(3.0, 0.0, 4.0); 8];
//! let mut lengths = vec![0.0f32; 8];
//!
//! points.magnitudes_into(&mut lengths).unwrap();
//! assert!(lengths.iter().all(|&l| l == 5.0));
//!
//! points.par_normalize_all();
//! assert_eq!(points[0], Vec3::new(0.6, 0.0, 0.8));
//! ```

use rayon::prelude::*;

use crate::error::{check_length, Result};
use crate::{Vec3, Vec4, PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};

pub trait SimdBatch<V> {
    /// Replaces every vector with its normalized form.
    fn normalize_all(&mut self);
    fn par_normalize_all(&mut self);

    /// Writes `self[i].dot(rhs[i])` to `out[i]`.
    ///
    /// # Errors
    ///
    /// [`VectorError::LengthError`](crate::VectorError::LengthError) if `rhs`
    /// or `out` is not as long as `self`.
    fn dot_into(&self, rhs: &[V], out: &mut [f32]) -> Result<()>;
    fn par_dot_into(&self, rhs: &[V], out: &mut [f32]) -> Result<()>;

    /// Writes `self[i].magnitude()` to `out[i]`.
    ///
    /// # Errors
    ///
    /// [`VectorError::LengthError`](crate::VectorError::LengthError) if `out`
    /// is not as long as `self`.
    fn magnitudes_into(&self, out: &mut [f32]) -> Result<()>;
    fn par_magnitudes_into(&self, out: &mut [f32]) -> Result<()>;
}

macro_rules! impl_simd_batch {
    ($ty:ty) => {
        impl SimdBatch<$ty> for [$ty] {
            #[inline(always)]
            fn normalize_all(&mut self) {
                self.iter_mut().for_each(|v| *v = v.normalized());
            }

            fn par_normalize_all(&mut self) {
                if self.len() <= PARALLEL_SIMD_THRESHOLD {
                    return self.normalize_all();
                }

                self.par_chunks_mut(PARALLEL_CHUNK_SIZE)
                    .for_each(|chunk| chunk.normalize_all());
            }

            #[inline(always)]
            fn dot_into(&self, rhs: &[$ty], out: &mut [f32]) -> Result<()> {
                check_length(self.len(), rhs.len(), "rhs must match lhs length")?;
                check_length(self.len(), out.len(), "out must match lhs length")?;

                out.iter_mut()
                    .zip(self.iter().zip(rhs.iter()))
                    .for_each(|(o, (a, b))| *o = a.dot(*b));

                Ok(())
            }

            fn par_dot_into(&self, rhs: &[$ty], out: &mut [f32]) -> Result<()> {
                if self.len() <= PARALLEL_SIMD_THRESHOLD {
                    return self.dot_into(rhs, out);
                }

                check_length(self.len(), rhs.len(), "rhs must match lhs length")?;
                check_length(self.len(), out.len(), "out must match lhs length")?;

                out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
                    .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
                    .zip(rhs.par_chunks(PARALLEL_CHUNK_SIZE))
                    .try_for_each(|((o, a), b)| a.dot_into(b, o))
            }

            #[inline(always)]
            fn magnitudes_into(&self, out: &mut [f32]) -> Result<()> {
                check_length(self.len(), out.len(), "out must match input length")?;

                out.iter_mut()
                    .zip(self.iter())
                    .for_each(|(o, v)| *o = v.magnitude());

                Ok(())
            }

            fn par_magnitudes_into(&self, out: &mut [f32]) -> Result<()> {
                if self.len() <= PARALLEL_SIMD_THRESHOLD {
                    return self.magnitudes_into(out);
                }

                check_length(self.len(), out.len(), "out must match input length")?;

                out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
                    .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
                    .try_for_each(|(o, v)| v.magnitudes_into(o))
            }
        }
    };
}

impl_simd_batch!(Vec3);
impl_simd_batch!(Vec4);
