//! Seeded permutations of `[0, n)` computed one index at a time.
//!
//! A shuffle is a fixed pipeline of small invertible stages (spin,
//! interleave, flop), each keyed by a different derivation of the seed, so
//! the permuted position of any index can be found (or undone) without
//! materialising the whole cohort.

use crate::mix::{prng, scramble};

const SPIN_SALT_A: u32 = 0x2545_F491;
const SPIN_SALT_B: u32 = 0x9E6C_63D1;
const FLOP_SALT: u32 = 0x7FEB_352D;

fn scaled(x: u32, n: u32) -> u32 {
    ((u64::from(x) * u64::from(n)) >> 32) as u32
}

fn spin(index: u32, n: u32, offset: u32) -> u32 {
    ((u64::from(index) + u64::from(offset)) % u64::from(n)) as u32
}

fn rev_spin(index: u32, n: u32, offset: u32) -> u32 {
    spin(index, n, n - offset % n)
}

fn interleave(index: u32, n: u32) -> u32 {
    let half = n.div_ceil(2);
    if index < half { 2 * index } else { 2 * (index - half) + 1 }
}

fn rev_interleave(index: u32, n: u32) -> u32 {
    let half = n.div_ceil(2);
    if index % 2 == 0 { index / 2 } else { half + index / 2 }
}

/// Reverses `index` within its segment; an involution.
fn flop(index: u32, n: u32, segment: u32) -> u32 {
    let start = index - index % segment;
    let end = (start + segment).min(n);
    start + (end - 1 - index)
}

struct ShuffleKeys {
    spin_a: u32,
    spin_b: u32,
    segment: u32,
}

impl ShuffleKeys {
    fn derive(n: u32, seed: u32) -> Self {
        Self {
            spin_a: scaled(prng(seed, SPIN_SALT_A), n),
            spin_b: scaled(prng(seed, SPIN_SALT_B), n),
            segment: 2 + scaled(scramble(seed ^ FLOP_SALT), n.max(2) - 1),
        }
    }
}

/// Position of `index` after shuffling a cohort of `n` items with `seed`.
/// Indices outside `[0, n)` are returned unchanged.
pub fn cohort_shuffle(index: u32, n: u32, seed: u32) -> u32 {
    if index >= n {
        return index;
    }
    let keys = ShuffleKeys::derive(n, seed);
    let mut i = spin(index, n, keys.spin_a);
    i = interleave(i, n);
    i = flop(i, n, keys.segment);
    i = spin(i, n, keys.spin_b);
    interleave(i, n)
}

/// Inverse of [`cohort_shuffle`].
pub fn rev_cohort_shuffle(index: u32, n: u32, seed: u32) -> u32 {
    if index >= n {
        return index;
    }
    let keys = ShuffleKeys::derive(n, seed);
    let mut i = rev_interleave(index, n);
    i = rev_spin(i, n, keys.spin_b);
    i = flop(i, n, keys.segment);
    i = rev_interleave(i, n);
    rev_spin(i, n, keys.spin_a)
}
