//! Tests for the VortexHash algorithm

use crate::matrix::MixMatrix;
use crate::nonlinear::{
    high_transform, intermediate_transform, medium_transform, safe_transform,
};
use crate::prng::MatrixRng;
use crate::vhash::{nibble_vector, xor_digest_words};
use crate::{
    HASH_SIZE, HEADER_SIZE, MATRIX_DIM, MATRIX_SCALE, NONCE_OFFSET, VortexHash, hash,
    meets_difficulty,
};

fn header_with_nonce(fill: u8, nonce: u32) -> [u8; HEADER_SIZE] {
    let mut header = [fill; HEADER_SIZE];
    header[NONCE_OFFSET..].copy_from_slice(&nonce.to_le_bytes());
    header
}

#[test]
fn test_basic_hash() {
    let header = header_with_nonce(0x42, 12345);
    let result = hash(&header);

    // Digest must be non-zero for a valid 80-byte header
    assert_ne!(result, [0u8; HASH_SIZE]);

    // Digest must be deterministic
    let result2 = hash(&header);
    assert_eq!(result, result2);
}

#[test]
fn test_length_gate_fails_closed() {
    // Anything but exactly 80 bytes yields the all-zero digest
    assert_eq!(hash(&[]), [0u8; HASH_SIZE]);
    assert_eq!(hash(&[0u8; 79]), [0u8; HASH_SIZE]);
    assert_eq!(hash(&[0u8; 81]), [0u8; HASH_SIZE]);
    assert_eq!(hash(&[0xFFu8; 160]), [0u8; HASH_SIZE]);

    // A zero digest never meets any positive difficulty
    assert!(!meets_difficulty(&hash(&[0u8; 79]), 1));
    assert_ne!(hash(&[0u8; HEADER_SIZE]), [0u8; HASH_SIZE]);
}

#[test]
fn test_nonce_sensitivity() {
    // Changing only bytes 76..80 must change the digest, across a sample of
    // 100 different headers
    let mut hasher = VortexHash::new();
    for i in 0u32..100 {
        let mut header = [0u8; HEADER_SIZE];
        for (k, byte) in header.iter_mut().enumerate() {
            *byte = (k as u8).wrapping_mul(7).wrapping_add(i as u8);
        }

        header[NONCE_OFFSET..].copy_from_slice(&i.to_le_bytes());
        let digest_a = hasher.hash(&header);

        header[NONCE_OFFSET..].copy_from_slice(&(i.wrapping_add(1)).to_le_bytes());
        let digest_b = hasher.hash(&header);

        assert_ne!(
            digest_a, digest_b,
            "nonce change did not affect digest for header {}",
            i
        );
    }
}

#[test]
fn test_avalanche_effect() {
    // Flipping a single input bit should change ~50% of output bits
    let mut hasher = VortexHash::new();
    for trial in 0u32..16 {
        let mut header = [0u8; HEADER_SIZE];
        for (k, byte) in header.iter_mut().enumerate() {
            *byte = (k as u8) ^ (trial as u8).wrapping_mul(0x1D);
        }
        let digest_a = hasher.hash(&header);

        let bit = (trial as usize * 41) % (HEADER_SIZE * 8);
        header[bit / 8] ^= 1 << (bit % 8);
        let digest_b = hasher.hash(&header);

        let mut diff_bits = 0;
        for k in 0..HASH_SIZE {
            diff_bits += (digest_a[k] ^ digest_b[k]).count_ones();
        }

        // Expect roughly 128 of 256 bits to differ; allow 35%-65%
        assert!(
            (90..=166).contains(&diff_bits),
            "avalanche trial {}: {} bits differ (expected ~128)",
            trial,
            diff_bits
        );
    }
}

#[test]
fn test_prng_reference_stream() {
    // First eight draws for the seed 00 01 02 .. 1f, pinned so the generator
    // can never drift. These are pure integer operations and must match on
    // every platform.
    let mut seed = [0u8; HASH_SIZE];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let expected: [u64; 8] = [
        0x171513110f151311,
        0xa2209f1d9c1e9d1b,
        0xe0d100f0a090c0b0,
        0xf4601386bb253984,
        0xf9bad1aa0181e716,
        0x56ee6ac1eb074678,
        0xa2c6016e965fd65b,
        0xa71aba53114eaae0,
    ];

    let mut rng = MatrixRng::from_digest(&seed);
    for (i, &want) in expected.iter().enumerate() {
        assert_eq!(rng.next_u64(), want, "draw {} diverged", i);
    }
}

#[test]
fn test_prng_repeating_seed() {
    let seed = [0x42u8; HASH_SIZE];
    let mut rng = MatrixRng::from_digest(&seed);

    assert_eq!(rng.next_u64(), 0x8484848484848484);
    assert_eq!(rng.next_u64(), 0x6363636363636363);
    assert_eq!(rng.next_u64(), 0x2424242424242424);
    assert_eq!(rng.next_u64(), 0xffffffbdbd77333b);
}

#[test]
fn test_matrix_reference_entries() {
    // Matrix entries are derived from integer draws by correctly-rounded
    // division and multiplication, so exact f64 comparison is portable.
    let mut seed = [0u8; HASH_SIZE];
    for (i, byte) in seed.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let mut matrix = MixMatrix::new();
    matrix.fill(&seed);
    let rows = matrix.rows();

    assert_eq!(rows[0][0], 58915.321030401465);
    assert_eq!(rows[0][1], 609842.1280295221);
    assert_eq!(rows[0][63], 947972.89323713);
    assert_eq!(rows[1][0], 132414.18919815082);
    assert_eq!(rows[63][63], 495584.8417001741);

    for row in rows {
        for &entry in row {
            assert!((0.0..=MATRIX_SCALE).contains(&entry));
        }
    }
}

#[test]
fn test_matrix_is_pure_function_of_seed() {
    let seed_a = [0xA5u8; HASH_SIZE];
    let seed_b = [0x5Au8; HASH_SIZE];

    let mut first = MixMatrix::new();
    let mut second = MixMatrix::new();

    first.fill(&seed_a);
    second.fill(&seed_a);
    assert_eq!(first.rows(), second.rows());

    // Refilling in place from another seed fully overwrites the buffer
    second.fill(&seed_b);
    assert_ne!(first.rows(), second.rows());
    second.fill(&seed_a);
    assert_eq!(first.rows(), second.rows());
}

#[test]
fn test_nibble_vector_layout() {
    let mut digest = [0u8; HASH_SIZE];
    for (i, byte) in digest.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(7).wrapping_add(3);
    }

    let vector = nibble_vector(&digest);
    assert_eq!(&vector[..8], &[0, 3, 0, 10, 1, 1, 1, 8]);

    // High nibble before low nibble, in byte order
    for i in 0..HASH_SIZE {
        assert_eq!(vector[2 * i], digest[i] >> 4);
        assert_eq!(vector[2 * i + 1], digest[i] & 0x0F);
    }
    assert_eq!(vector.len(), MATRIX_DIM);
}

#[test]
fn test_digest_word_xor() {
    let mut digest = [0u8; HASH_SIZE];
    for (i, byte) in digest.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(7).wrapping_add(3);
    }
    assert_eq!(xor_digest_words(&digest), 0xE0A06020);

    // The identity bytes 00..1f cancel pairwise across the eight words
    for (i, byte) in digest.iter_mut().enumerate() {
        *byte = i as u8;
    }
    assert_eq!(xor_digest_words(&digest), 0);
}

#[test]
fn test_safe_transform_terminates_on_pathological_input() {
    // Scaling cannot make a non-finite input finite; the guard must give up
    // with zero instead of looping
    assert_eq!(safe_transform(f64::NAN), 0.0);
    assert_eq!(safe_transform(f64::INFINITY), 0.0);
    assert_eq!(safe_transform(f64::NEG_INFINITY), 0.0);
}

#[test]
fn test_safe_transform_finite_inputs() {
    for x in [0.0, 1.0, -1.0, 42.5, -123456.789, 1.0e6, 5.0e307] {
        let value = safe_transform(x);
        assert!(value.is_finite(), "transform of {} not finite", x);
    }
}

#[test]
fn test_transform_bank() {
    // Medium: exp(sin x + cos x) is bounded by exp(±√2)
    for x in [0.0, 1.0, -2.5, 1000.0] {
        let m = medium_transform(x);
        assert!(m > 0.0 && m <= 4.2);
    }

    // Intermediate: sin² in [0, 1], zeroed inside the guard band
    assert_eq!(intermediate_transform(core::f64::consts::FRAC_PI_2), 0.0);
    assert_eq!(intermediate_transform(3.0 * core::f64::consts::PI / 2.0), 0.0);
    let s = intermediate_transform(1.0);
    assert!(s > 0.0 && s <= 1.0);

    // High: 1/sqrt(|x|+1) in (0, 1]
    assert_eq!(high_transform(0.0), 1.0);
    let h = high_transform(-1.0e12);
    assert!(h > 0.0 && h < 1.0e-5);
}

#[test]
fn test_hasher_reusability() {
    let mut hasher = VortexHash::new();

    let first = hasher.hash(&header_with_nonce(0x11, 1000));
    let second = hasher.hash(&header_with_nonce(0x22, 2000));
    assert_ne!(first, second);

    // Same input must still produce the same digest after reuse
    let first_again = hasher.hash(&header_with_nonce(0x11, 1000));
    assert_eq!(first, first_again);
}

#[test]
fn test_one_shot_matches_reusable() {
    let header = header_with_nonce(0x37, 0xDEADBEEF);
    let mut hasher = VortexHash::new();
    assert_eq!(hash(&header), hasher.hash(&header));
}

#[test]
fn test_difficulty_check() {
    let mut digest = [0xFFu8; HASH_SIZE];

    digest[0] = 0x00;
    assert!(meets_difficulty(&digest, 8));
    assert!(!meets_difficulty(&digest, 9));

    digest[1] = 0x00;
    assert!(meets_difficulty(&digest, 16));
    assert!(!meets_difficulty(&digest, 17));

    digest[0] = 0x0F;
    assert!(meets_difficulty(&digest, 4));
    assert!(!meets_difficulty(&digest, 5));

    // Difficulty zero is always met
    assert!(meets_difficulty(&[0xFFu8; HASH_SIZE], 0));
}

#[test]
fn test_known_vector() {
    // Fixed reference header: all-zero fields, nonce 0. The digest is pinned
    // by the vectors corpus; here it must at least be stable and non-zero.
    let header = [0u8; HEADER_SIZE];
    let result = hash(&header);

    assert_ne!(result, [0u8; HASH_SIZE]);
    assert_eq!(result, hash(&header));

    // Print for cross-platform comparison (run with --nocapture)
    #[cfg(feature = "std")]
    println!("\nReference digest (zero header, nonce 0): {}", hex::encode(result));
}
