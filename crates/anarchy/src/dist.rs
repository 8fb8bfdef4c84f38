//! Mapping raw words onto distributions.

use crate::mix::scramble;

const WORD_RANGE: f64 = 4_294_967_296.0;

/// Maps `x` uniformly onto `[0, 1)`.
pub fn udist(x: u32) -> f64 {
    f64::from(x) / WORD_RANGE
}

/// Maps `x` uniformly onto the integers in `[lo, hi)`; returns `lo` for an
/// empty range.
pub fn idist(x: u32, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = (i64::from(hi) - i64::from(lo)) as u64;
    let offset = (u64::from(x) * span) >> 32;
    (i64::from(lo) + offset as i64) as i32
}

/// Bernoulli draw that is true with probability `p`.
pub fn flip(p: f64, seed: u32) -> bool {
    udist(scramble(seed)) < p
}
