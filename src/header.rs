//! Block-header helpers for the miner layer.
//!
//! The algorithm operates on raw 80-byte Bitcoin-style headers; this module
//! handles hex decoding with strict length validation and access to the
//! nonce field.

use thiserror::Error;
use vhash_core::{HEADER_SIZE, NONCE_OFFSET};

/// Errors produced while decoding a block header.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The decoded header is not exactly 80 bytes.
    #[error("header must be 80 bytes, got {0}")]
    InvalidLength(usize),
    /// The input is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Decode a hex-encoded 80-byte block header.
pub fn decode_header(hex_str: &str) -> Result<[u8; HEADER_SIZE], HeaderError> {
    let bytes = hex::decode(hex_str.trim())?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| HeaderError::InvalidLength(len))
}

/// Read the nonce field (little-endian u32 at byte offset 76).
pub fn nonce(header: &[u8; HEADER_SIZE]) -> u32 {
    u32::from_le_bytes(header[NONCE_OFFSET..].try_into().unwrap())
}

/// Write the nonce field in place.
pub fn set_nonce(header: &mut [u8; HEADER_SIZE], nonce: u32) {
    header[NONCE_OFFSET..].copy_from_slice(&nonce.to_le_bytes());
}
