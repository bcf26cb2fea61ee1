//! Core VortexHash implementation.
//!
//! The pipeline: BLAKE3 over the 80-byte header, a 64×64 pseudo-random
//! matrix derived from that digest, a history-dependent matrix/vector mixing
//! pass, and a second BLAKE3 over the 32-byte mixed intermediate.
//!
//! Everything in this module is pure IEEE-754 double-precision arithmetic
//! evaluated strictly left to right: no FMA, no reassociated reductions.

use crate::codec::{read_u32_be, read_u32_le};
use crate::matrix::MixMatrix;
use crate::nonlinear::{frac, safe_transform};
use crate::params::{
    HASH_SIZE, HEADER_SIZE, LANE_DIVIDER, LANE_MULTIPLIER, MATRIX_DIM, NONCE_OFFSET,
    SWITCH_GRANULARITY, SWITCH_THRESHOLD,
};

/// VortexHash hasher.
///
/// Owns the matrix buffer so repeated hashing (nonce scanning) does not
/// reallocate per attempt. No state carries over between calls; every hash
/// computation is independent.
pub struct VortexHash {
    matrix: MixMatrix,
}

impl VortexHash {
    /// Create a new hasher, allocating the 32 KiB matrix buffer.
    pub fn new() -> Self {
        Self {
            matrix: MixMatrix::new(),
        }
    }

    /// Compute the VortexHash digest of an 80-byte block header.
    ///
    /// Any input that is not exactly [`HEADER_SIZE`] bytes yields the
    /// all-zero digest: the function fails closed, and a zero digest never
    /// satisfies a difficulty target.
    pub fn hash(&mut self, header: &[u8]) -> [u8; HASH_SIZE] {
        if header.len() != HEADER_SIZE {
            return [0u8; HASH_SIZE];
        }

        // First pass over the full header seeds everything downstream.
        let first_pass: [u8; HASH_SIZE] = *blake3::hash(header).as_bytes();
        self.matrix.fill(&first_pass);

        // Bitcoin-style headers carry the nonce at offset 76, little-endian.
        let nonce = u64::from(read_u32_le(&header[NONCE_OFFSET..]));

        let mixed = mix(&self.matrix, &first_pass, nonce);
        *blake3::hash(&mixed).as_bytes()
    }
}

impl Default for VortexHash {
    fn default() -> Self {
        Self::new()
    }
}

/// Matrix/vector mixing pass: folds the matrix, the pass-1 digest and the
/// nonce into the 32-byte intermediate consumed by the final hash pass.
fn mix(matrix: &MixMatrix, digest: &[u8; HASH_SIZE], nonce: u64) -> [u8; HASH_SIZE] {
    let vector = nibble_vector(digest);
    let hash_xor = f64::from(xor_digest_words(digest));
    let nonce_mod = (nonce & 0xFF) as f64;

    let mut product = [0.0f64; MATRIX_DIM];
    // The switch scalar is recomputed from the running accumulator after
    // every column, so branch selection depends on accumulation history.
    // Hoisting it out of the inner loop changes the digest.
    let mut sw = 0.0f64;

    for (i, row) in matrix.rows().iter().enumerate() {
        for (j, &entry) in row.iter().enumerate() {
            let lane = f64::from(vector[j]);
            if sw <= SWITCH_THRESHOLD {
                let input = entry * hash_xor * lane + nonce_mod;
                product[i] += safe_transform(input) * lane * LANE_MULTIPLIER;
            } else {
                product[i] += entry * LANE_DIVIDER * lane;
            }
            sw = frac(product[i] / SWITCH_GRANULARITY);
        }
    }

    // Fold adjacent accumulator pairs into one byte each, then XOR with the
    // pass-1 digest.
    let mut result = [0u8; HASH_SIZE];
    for (k, out) in result.iter_mut().enumerate() {
        let pair = (product[2 * k] as u64).wrapping_add(product[2 * k + 1] as u64);
        *out = digest[k] ^ (pair & 0xFF) as u8;
    }
    result
}

/// Digest bytes split into 4-bit halves, high nibble before low, in byte
/// order.
pub(crate) fn nibble_vector(digest: &[u8; HASH_SIZE]) -> [u8; MATRIX_DIM] {
    let mut vector = [0u8; MATRIX_DIM];
    for (i, byte) in digest.iter().enumerate() {
        vector[2 * i] = byte >> 4;
        vector[2 * i + 1] = byte & 0x0F;
    }
    vector
}

/// XOR of the digest interpreted as eight big-endian 32-bit words.
#[inline(always)]
pub(crate) fn xor_digest_words(digest: &[u8; HASH_SIZE]) -> u32 {
    let mut acc = 0u32;
    for word in digest.chunks_exact(4) {
        acc ^= read_u32_be(word);
    }
    acc
}

/// Convenience function for single-shot hashing.
///
/// Creates a new hasher, computes the digest, and returns it. For nonce
/// scanning, prefer creating a [`VortexHash`] instance and reusing it to
/// avoid repeated matrix allocation.
pub fn hash(header: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = VortexHash::new();
    hasher.hash(header)
}

/// Check if a digest meets the required difficulty.
///
/// Difficulty is measured as the number of leading zero bits required.
/// For example, difficulty 16 requires the first 2 bytes to be zero.
///
/// # Example
///
/// ```rust
/// use vhash_core::meets_difficulty;
///
/// let digest: [u8; 32] = [
///     0x00, 0x00, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
///     0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
///     0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
///     0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
/// ];
/// assert!(meets_difficulty(&digest, 16)); // 16 leading zeros - pass
/// assert!(meets_difficulty(&digest, 20)); // 20 leading zeros - pass
/// assert!(!meets_difficulty(&digest, 21)); // only 20 zeros - fail
/// ```
#[inline(always)]
pub fn meets_difficulty(digest: &[u8; HASH_SIZE], difficulty: u32) -> bool {
    let mut zero_bits = 0u32;

    for byte in digest.iter() {
        if *byte == 0 {
            zero_bits += 8;
        } else {
            zero_bits += byte.leading_zeros();
            break;
        }
    }

    zero_bits >= difficulty
}
