//! Seed derivation for supertiles and their cells.
//!
//! The salts below fix the content of every world ever generated. Changing
//! any of them changes all content for all existing seeds.

use anarchy::prng;

use crate::types::{SubPos, SuperPos};

const MIX_SCALE: u32 = 0x2C1B_3C6D;

const SUPERTILE_X_SALT: u32 = 0x6A09_E667;
const SUPERTILE_Y_SALT: u32 = 0xBB67_AE85;
const CELL_X_SALT: u32 = 0x3C6E_F373;
const CELL_Y_SALT: u32 = 0xA54F_F53B;
pub(super) const PRIMARY_DOMAIN_SALT: u32 = 0x510E_527F;
pub(super) const SECONDARY_DOMAIN_SALT: u32 = 0x9B05_688D;
pub(super) const DOMAIN_MIX_SALT: u32 = 0x5BE0_CD19;

/// Folds one coordinate into a running seed.
pub fn mix_seed(seed: u32, value: i32, salt: u32) -> u32 {
    let scaled = (value as u32).wrapping_mul(MIX_SCALE).wrapping_add(salt);
    prng(seed ^ scaled, salt)
}

pub fn derive_supertile_seed(seed: u32, sgp: SuperPos) -> u32 {
    mix_seed(mix_seed(seed, sgp.x, SUPERTILE_X_SALT), sgp.y, SUPERTILE_Y_SALT)
}

pub fn derive_cell_seed(supertile_seed: u32, sub: SubPos) -> u32 {
    mix_seed(mix_seed(supertile_seed, sub.x, CELL_X_SALT), sub.y, CELL_Y_SALT)
}
