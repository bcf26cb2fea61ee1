//! Mixing-matrix generation.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::params::{HASH_SIZE, MATRIX_DIM, MATRIX_SCALE};
use crate::prng::MatrixRng;

/// 64×64 matrix of normalized pseudo-random reals.
///
/// A pure function of the digest that seeds it; heap-backed so a reusable
/// hasher refills it in place instead of reallocating per attempt.
pub(crate) struct MixMatrix {
    rows: Vec<[f64; MATRIX_DIM]>,
}

impl MixMatrix {
    pub(crate) fn new() -> Self {
        Self {
            rows: vec![[0.0; MATRIX_DIM]; MATRIX_DIM],
        }
    }

    /// Refill every entry from a fresh generator seeded by `seed`.
    ///
    /// The generator is stateful, so the row-major ascending draw order is
    /// part of the digest definition.
    pub(crate) fn fill(&mut self, seed: &[u8; HASH_SIZE]) {
        let mut rng = MatrixRng::from_digest(seed);
        for row in self.rows.iter_mut() {
            for entry in row.iter_mut() {
                let low = (rng.next_u64() & 0xFFFF_FFFF) as u32;
                *entry = f64::from(low) / f64::from(u32::MAX) * MATRIX_SCALE;
            }
        }
    }

    #[inline(always)]
    pub(crate) fn rows(&self) -> &[[f64; MATRIX_DIM]] {
        &self.rows
    }
}
