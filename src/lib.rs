//! VortexHash Miner Library
//!
//! A proof-of-work mining front end for the VortexHash algorithm.
//!
//! # Overview
//!
//! VortexHash digests 80-byte Bitcoin-style block headers through a
//! floating-point matrix mixing pipeline; mining means scanning the 4-byte
//! nonce field at offset 76 until the digest clears a difficulty target.
//!
//! # Example
//!
//! ```rust
//! use vhash::{hash, meets_difficulty};
//! use vhash::header::set_nonce;
//!
//! let mut header = [0u8; 80];
//! set_nonce(&mut header, 12345);
//!
//! let digest = hash(&header);
//! if meets_difficulty(&digest, 16) {
//!     println!("Valid proof found!");
//! }
//! ```

// Re-export the core algorithm
pub use vhash_core as algorithm;

pub mod header;

// Convenience re-exports
pub use algorithm::{VortexHash, hash, meets_difficulty};
