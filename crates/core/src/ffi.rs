//! C FFI bindings for pool and miner integrations

use crate::VortexHash;
use crate::params::HASH_SIZE;
use core::slice;

/// Opaque hasher handle for FFI
pub struct VHasher {
    inner: VortexHash,
}

/// Create a new hasher instance
/// Returns a pointer to the hasher (caller must free with vhash_free)
#[unsafe(no_mangle)]
pub extern "C" fn vhash_new() -> *mut VHasher {
    let hasher = Box::new(VHasher {
        inner: VortexHash::new(),
    });
    Box::into_raw(hasher)
}

/// Free a hasher instance
#[unsafe(no_mangle)]
pub extern "C" fn vhash_free(hasher: *mut VHasher) {
    if !hasher.is_null() {
        unsafe {
            let _ = Box::from_raw(hasher);
        }
    }
}

/// Compute the digest of a block header
/// - hasher: pointer from vhash_new()
/// - input: pointer to the header bytes
/// - input_len: length of the header (anything but 80 yields a zero digest)
/// - output: pointer to a 32-byte buffer for the result
#[unsafe(no_mangle)]
pub extern "C" fn vhash_hash(
    hasher: *mut VHasher,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
) {
    if hasher.is_null() || input.is_null() || output.is_null() {
        return;
    }

    unsafe {
        let hasher = &mut *hasher;
        let input_slice = slice::from_raw_parts(input, input_len);
        let result = hasher.inner.hash(input_slice);

        let output_slice = slice::from_raw_parts_mut(output, HASH_SIZE);
        output_slice.copy_from_slice(&result);
    }
}

/// One-shot digest without a persistent handle, for plugin hosts that hash
/// a single header per call
#[unsafe(no_mangle)]
pub extern "C" fn vhash_hash_oneshot(input: *const u8, input_len: usize, output: *mut u8) {
    if input.is_null() || output.is_null() {
        return;
    }

    unsafe {
        let input_slice = slice::from_raw_parts(input, input_len);
        let result = crate::hash(input_slice);

        let output_slice = slice::from_raw_parts_mut(output, HASH_SIZE);
        output_slice.copy_from_slice(&result);
    }
}
