//! Deterministic pseudo-random stream used for matrix derivation.
//!
//! A 256-bit-state mixer in the xoshiro family. The exact update sequence is
//! part of the hash definition: a correct-but-different variant would change
//! every digest, so no generator library is used here.

use crate::codec::read_u64_le;
use crate::params::HASH_SIZE;

/// Generator state: four 64-bit words, seeded once per hash computation from
/// the pass-1 digest and discarded after the matrix is filled.
pub(crate) struct MatrixRng {
    s0: u64,
    s1: u64,
    s2: u64,
    s3: u64,
}

impl MatrixRng {
    /// Seed the state with four consecutive little-endian words of a digest.
    pub(crate) fn from_digest(seed: &[u8; HASH_SIZE]) -> Self {
        Self {
            s0: read_u64_le(&seed[0..8]),
            s1: read_u64_le(&seed[8..16]),
            s2: read_u64_le(&seed[16..24]),
            s3: read_u64_le(&seed[24..32]),
        }
    }

    /// Draw the next 64-bit value, advancing the state.
    #[inline(always)]
    pub(crate) fn next_u64(&mut self) -> u64 {
        let result = self
            .s0
            .wrapping_add(self.s3)
            .rotate_left(23)
            .wrapping_add(self.s0);
        let t = self.s1 << 17;

        self.s2 ^= self.s0;
        self.s3 ^= self.s1;
        self.s1 ^= self.s2;
        self.s0 ^= self.s3;

        self.s2 ^= t;
        self.s3 = self.s3.rotate_left(45);

        result
    }
}
