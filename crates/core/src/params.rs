//! VortexHash algorithm parameters
//!
//! Every constant below is consensus-critical: changing any value changes
//! every digest the algorithm produces.

/// Block-header preimage size in bytes (version..nonce)
pub const HEADER_SIZE: usize = 80;

/// Byte offset of the 4-byte little-endian nonce within the header
pub const NONCE_OFFSET: usize = 76;

/// Digest size in bytes (both hash passes)
pub const HASH_SIZE: usize = 32;

/// Dimension of the mixing matrix and of the digest nibble vector
pub const MATRIX_DIM: usize = 64;

/// Scale applied to normalized generator draws when filling the matrix
pub const MATRIX_SCALE: f64 = 1_000_000.0;

/// Input scale feeding the transform selector's fractional factors
pub const TRANSFORM_SELECTOR_SCALE: f64 = 0.000001;

/// Guard band around the skipped points of the intermediate transform
pub const SINGULARITY_EPS: f64 = 1e-9;

/// Input floor at which the transform guard gives up and contributes zero
pub const SHRINK_FLOOR: f64 = 1e-13;

/// Switch values at or below this take the nonlinear branch of the mixer
pub const SWITCH_THRESHOLD: f64 = 0.02;

/// Granularity folding a running accumulator value into the switch scalar
pub const SWITCH_GRANULARITY: f64 = 1024.0;

/// Linear-branch attenuation of matrix entries
pub const LANE_DIVIDER: f64 = 0.0001;

/// Nonlinear-branch amplification of transformed values
pub const LANE_MULTIPLIER: f64 = 1234.0;

/// Algorithm version
pub const VERSION: u8 = 1;
