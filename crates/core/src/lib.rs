//! # VortexHash Core Algorithm
//!
//! A floating-point matrix proof-of-work hash over Bitcoin-style 80-byte
//! block headers, consumed by mining and validation code to test whether a
//! header's digest satisfies a difficulty target.
//!
//! ## Pipeline
//!
//! 1. BLAKE3 over the full 80-byte header (pass 1)
//! 2. A 64×64 matrix of pseudo-random doubles derived from the pass-1 digest
//! 3. A matrix/vector mixing pass with history-dependent branch switching,
//!    folded into a 32-byte intermediate
//! 4. BLAKE3 over the intermediate (pass 2) → final 32-byte digest
//!
//! The numeric behavior of steps 2 and 3 is part of the hash definition:
//! a single rounding difference changes every digest. All transcendentals
//! therefore go through `libm` so every platform computes identical bits.
//!
//! ## Input Format
//!
//! ```text
//! input = header fields || nonce
//!         ^^^^^^^^^^^^^    ^^^^^
//!         bytes 0..76      bytes 76..80 (little-endian u32)
//! ```
//!
//! Inputs that are not exactly 80 bytes produce the all-zero digest, which
//! never satisfies a difficulty target.
//!
//! ## Example
//!
//! ```rust
//! use vhash_core::{VortexHash, hash, meets_difficulty};
//!
//! // Single-shot hashing
//! let header = [0u8; 80];
//! let digest = hash(&header);
//!
//! // Check difficulty (leading zero bits)
//! if meets_difficulty(&digest, 16) {
//!     println!("Found a digest with 16+ leading zero bits!");
//! }
//!
//! // Reusable hasher (avoids re-allocating the matrix per attempt)
//! let mut hasher = VortexHash::new();
//! let first = hasher.hash(&header);
//! let second = hasher.hash(&header);
//! assert_eq!(first, second);
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! vhash-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod codec;
mod matrix;
mod nonlinear;
mod params;
mod prng;
mod vhash;

#[cfg(feature = "std")]
mod ffi;

pub use params::*;
pub use vhash::{VortexHash, hash, meets_difficulty};

#[cfg(test)]
mod tests;
