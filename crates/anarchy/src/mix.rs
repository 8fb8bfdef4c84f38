//! Reversible mixing steps and the seeded `prng` built from them.

use crate::bits::{circular_shift, fold, rev_circular_shift};

/// Galois tap mask for x^32 + x^22 + x^2 + x + 1.
const LFSR_TAPS: u32 = 0x8020_0003;

const SCRAMBLE_KEY: u32 = 0x1F83_D9AB;
const SCRAMBLE_MUL_A: u32 = 0x9E37_79B1;
const SCRAMBLE_MUL_B: u32 = 0x85EB_CA77;
const SCRAMBLE_MUL_A_INV: u32 = mod_inverse(SCRAMBLE_MUL_A);
const SCRAMBLE_MUL_B_INV: u32 = mod_inverse(SCRAMBLE_MUL_B);
const SCRAMBLE_ROTATION: u32 = 7;

const _: () = assert!(SCRAMBLE_MUL_A.wrapping_mul(SCRAMBLE_MUL_A_INV) == 1);
const _: () = assert!(SCRAMBLE_MUL_B.wrapping_mul(SCRAMBLE_MUL_B_INV) == 1);

/// Multiplicative inverse of an odd `a` modulo 2^32 (Newton iteration; each
/// step doubles the number of correct low bits, starting from 3).
const fn mod_inverse(a: u32) -> u32 {
    let mut inverse = a;
    let mut step = 0;
    while step < 5 {
        inverse = inverse.wrapping_mul(2_u32.wrapping_sub(a.wrapping_mul(inverse)));
        step += 1;
    }
    inverse
}

/// Undoes `x ^= x >> shift`.
fn unxorshift_right(y: u32, shift: u32) -> u32 {
    let mut x = y;
    let mut recovered = shift;
    while recovered < 32 {
        x = y ^ (x >> shift);
        recovered += shift;
    }
    x
}

/// One Galois LFSR step. Zero is a fixed point; every nonzero state lies on
/// a single cycle of length 2^32 - 1.
pub fn lfsr(x: u32) -> u32 {
    let shifted = x >> 1;
    if x & 1 == 1 { shifted ^ LFSR_TAPS } else { shifted }
}

/// Inverse of [`lfsr`]: the top bit of the output records whether the taps
/// were applied.
pub fn rev_lfsr(x: u32) -> u32 {
    if x & 0x8000_0000 != 0 { ((x ^ LFSR_TAPS) << 1) | 1 } else { x << 1 }
}

/// Strong bijective scramble used to decorrelate neighbouring inputs.
pub fn scramble(x: u32) -> u32 {
    let mut r = x ^ SCRAMBLE_KEY;
    r = r.wrapping_mul(SCRAMBLE_MUL_A);
    r ^= r >> 16;
    r = circular_shift(r, SCRAMBLE_ROTATION);
    r = r.wrapping_mul(SCRAMBLE_MUL_B);
    r ^ (r >> 13)
}

/// Inverse of [`scramble`].
pub fn rev_scramble(x: u32) -> u32 {
    let mut r = unxorshift_right(x, 13);
    r = r.wrapping_mul(SCRAMBLE_MUL_B_INV);
    r = rev_circular_shift(r, SCRAMBLE_ROTATION);
    r = unxorshift_right(r, 16);
    r = r.wrapping_mul(SCRAMBLE_MUL_A_INV);
    r ^ SCRAMBLE_KEY
}

/// Seeded pseudo-random step. For a fixed `seed` this is a permutation of
/// `u32`, and [`rev_prng`] recovers `x` from the output.
pub fn prng(x: u32, seed: u32) -> u32 {
    let key = scramble(seed);
    let mut r = lfsr(x);
    r ^= key;
    r = fold(r, key >> 27);
    r = scramble(r);
    circular_shift(r, seed)
}

/// Inverse of [`prng`] under the same seed.
pub fn rev_prng(x: u32, seed: u32) -> u32 {
    let key = scramble(seed);
    let mut r = rev_circular_shift(x, seed);
    r = rev_scramble(r);
    r = fold(r, key >> 27);
    r ^= key;
    rev_lfsr(r)
}
