use anarchy::{
    RandomStream, circular_shift, fold, lfsr, prng, rev_circular_shift, rev_lfsr, rev_prng,
    rev_scramble, scramble,
};
use proptest::prelude::*;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[test]
fn prng_inverse_holds_for_ten_thousand_random_pairs() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
    for _ in 0..10_000 {
        let x = rng.next_u32();
        let seed = rng.next_u32();
        assert_eq!(rev_prng(prng(x, seed), seed), x, "x={x:#x} seed={seed:#x}");
        assert_eq!(prng(rev_prng(x, seed), seed), x, "x={x:#x} seed={seed:#x}");
    }
}

#[test]
fn circular_shift_inverse_holds_for_every_rotation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..500 {
        let x = rng.next_u32();
        for amount in 0..32 {
            assert_eq!(rev_circular_shift(circular_shift(x, amount), amount), x);
        }
    }
}

#[test]
fn prng_has_no_collisions_on_a_dense_input_block() {
    let seed = 173;
    let mut outputs: Vec<u32> = (0..65_536).map(|x| prng(x, seed)).collect();
    outputs.sort_unstable();
    outputs.dedup();
    assert_eq!(outputs.len(), 65_536);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1024))]
    #[test]
    fn fold_is_self_inverse(x in any::<u32>(), width in 1_u32..18) {
        prop_assert_eq!(fold(fold(x, width), width), x);
    }

    #[test]
    fn scramble_and_lfsr_round_trip(x in any::<u32>()) {
        prop_assert_eq!(rev_scramble(scramble(x)), x);
        prop_assert_eq!(rev_lfsr(lfsr(x)), x);
    }

    #[test]
    fn streams_walk_back_to_their_origin(seed in any::<u32>(), steps in 1_usize..64) {
        let mut stream = RandomStream::new(seed);
        for _ in 0..steps {
            stream.next_u32();
        }
        for _ in 0..steps {
            stream.prev_u32();
        }
        prop_assert_eq!(stream.state(), seed);
    }
}
