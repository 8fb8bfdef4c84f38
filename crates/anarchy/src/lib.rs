//! Reversible pseudo-random primitives on 32-bit words.
//!
//! Every mixing step in this crate is a bijection on `u32` with an exact
//! `rev_` counterpart, so any value produced from a seed can be traced back to
//! the input that produced it. Arithmetic always wraps at 2^32; results are
//! identical on every platform.

mod bits;
mod cohort;
mod dist;
mod mix;
mod stream;

pub use bits::{ID_BITS, byte_mask, circular_shift, fold, mask, posmod, rev_circular_shift};
pub use cohort::{cohort_shuffle, rev_cohort_shuffle};
pub use dist::{flip, idist, udist};
pub use mix::{lfsr, prng, rev_lfsr, rev_prng, rev_scramble, scramble};
pub use stream::RandomStream;
