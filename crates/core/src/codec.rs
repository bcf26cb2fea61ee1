//! Fixed-width integer reads from byte buffers.
//!
//! All reads go through `from_le_bytes`/`from_be_bytes` on copied arrays, so
//! they depend on neither host endianness nor alignment. Callers guarantee
//! sufficient buffer length.

/// Read an 8-byte little-endian unsigned integer.
#[inline(always)]
pub(crate) fn read_u64_le(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(bytes[..8].try_into().unwrap())
}

/// Read a 4-byte little-endian unsigned integer.
#[inline(always)]
pub(crate) fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes(bytes[..4].try_into().unwrap())
}

/// Read a 4-byte big-endian unsigned integer.
#[inline(always)]
pub(crate) fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(bytes[..4].try_into().unwrap())
}
