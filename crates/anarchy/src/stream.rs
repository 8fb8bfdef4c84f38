//! A steppable random stream that can also be walked backwards.

use crate::dist::{flip, idist, udist};
use crate::mix::{prng, rev_prng};

/// Sequence of words produced by iterating [`prng`] under a fixed seed.
///
/// `next_u32` advances and returns the new state; `prev_u32` returns the
/// current state and steps back, so the two undo each other exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RandomStream {
    seed: u32,
    state: u32,
}

impl RandomStream {
    pub fn new(seed: u32) -> Self {
        Self { seed, state: seed }
    }

    /// Resumes a stream from a previously observed state.
    pub fn from_state(seed: u32, state: u32) -> Self {
        Self { seed, state }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = prng(self.state, self.seed);
        self.state
    }

    pub fn prev_u32(&mut self) -> u32 {
        let current = self.state;
        self.state = rev_prng(self.state, self.seed);
        current
    }

    pub fn next_unit(&mut self) -> f64 {
        udist(self.next_u32())
    }

    pub fn next_in_range(&mut self, lo: i32, hi: i32) -> i32 {
        idist(self.next_u32(), lo, hi)
    }

    pub fn next_flip(&mut self, p: f64) -> bool {
        flip(p, self.next_u32())
    }
}

impl Iterator for RandomStream {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
