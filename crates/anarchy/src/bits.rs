//! Bit-level building blocks: masks, rotations, and folding.

/// Width of every word handled by this crate.
pub const ID_BITS: u32 = 32;

/// Mathematical modulo: the result is always in `[0, m)`, even for negative `a`.
pub fn posmod(a: i64, m: i64) -> i64 {
    debug_assert!(m > 0, "posmod needs a positive modulus, got {m}");
    a.rem_euclid(m)
}

/// Returns a word with the low `bits` bits set.
pub fn mask(bits: u32) -> u32 {
    if bits >= ID_BITS { u32::MAX } else { (1_u32 << bits) - 1 }
}

/// Isolates byte lane `byte_index` (0 is the least significant byte).
pub fn byte_mask(byte_index: u32) -> u32 {
    mask(8) << (8 * (byte_index % 4))
}

/// Rotates `x` right by `amount` bits, wrapping bits around the word.
pub fn circular_shift(x: u32, amount: u32) -> u32 {
    x.rotate_right(amount % ID_BITS)
}

/// Inverse of [`circular_shift`].
pub fn rev_circular_shift(x: u32, amount: u32) -> u32 {
    x.rotate_left(amount % ID_BITS)
}

/// Xors the low lane of `x` into the top of the word.
///
/// The lane width is `width mod 32`, clamped to the half of the word that
/// keeps the source and destination lanes disjoint. Because the source lane
/// is untouched, applying `fold` twice with the same width restores `x`.
pub fn fold(x: u32, width: u32) -> u32 {
    let width = width % ID_BITS;
    let lane = width.min(ID_BITS - width);
    if lane == 0 {
        return x;
    }
    x ^ ((x & mask(lane)) << (ID_BITS - lane))
}
