//! Supertile and ultratile addressing.
//!
//! A supertile is the 37-tile hexagon of radius 3 inscribed in a 7x7 box of
//! interior slots. Supertiles tile the plane on the lattice spanned by (7,4)
//! and (3,7):
//!
//! `gp = (7*sx + 3*sy + ix, 4*sx + 7*sy + iy)`
//!
//! so supertile (0,0) covers the hexagon centred on tile (3,3).

use crate::config::GridLayout;
use crate::types::{
    GridPos, SubPos, SuperDirection, SuperPos, SupertileAddress, UltraAddress, UltraPos,
};

/// Side of the interior bounding box.
pub const SUPERTILE_SIZE: i32 = 7;
/// Number of valid interior slots.
pub const SUPERTILE_CELLS: usize = 37;

const RADIUS: i32 = SUPERTILE_SIZE / 2;
const BASIS_A: (i64, i64) = (7, 4);
const BASIS_B: (i64, i64) = (3, 7);
const DETERMINANT: i64 = BASIS_A.0 * BASIS_B.1 - BASIS_A.1 * BASIS_B.0;

const _: () = assert!(DETERMINANT == SUPERTILE_CELLS as i64);

const fn valid_slot(x: i32, y: i32) -> bool {
    let in_box = x >= 0 && x < SUPERTILE_SIZE && y >= 0 && y < SUPERTILE_SIZE;
    in_box && x <= RADIUS + y && x >= y - RADIUS
}

const fn build_cell_table() -> [SubPos; SUPERTILE_CELLS] {
    let mut cells = [SubPos { x: 0, y: 0 }; SUPERTILE_CELLS];
    let mut next = 0;
    let mut x = 0;
    while x < SUPERTILE_SIZE {
        let mut y = 0;
        while y < SUPERTILE_SIZE {
            if valid_slot(x, y) {
                cells[next] = SubPos { x, y };
                next += 1;
            }
            y += 1;
        }
        x += 1;
    }
    assert!(next == SUPERTILE_CELLS);
    cells
}

const fn build_slot_table() -> [i8; (SUPERTILE_SIZE * SUPERTILE_SIZE) as usize] {
    let mut slots = [-1_i8; (SUPERTILE_SIZE * SUPERTILE_SIZE) as usize];
    let mut index = 0;
    while index < SUPERTILE_CELLS {
        let cell = CELLS[index];
        slots[(cell.x * SUPERTILE_SIZE + cell.y) as usize] = index as i8;
        index += 1;
    }
    slots
}

/// Valid interior slots in cell order (lexicographic on `(x, y)`).
pub const CELLS: [SubPos; SUPERTILE_CELLS] = build_cell_table();
const SLOT_TO_CELL: [i8; (SUPERTILE_SIZE * SUPERTILE_SIZE) as usize] = build_slot_table();

/// Whether `sub` lies inside the 37-slot hexagonal footprint.
pub fn is_valid_subindex(sub: SubPos) -> bool {
    valid_slot(sub.x, sub.y)
}

/// Dense 0..37 index of a valid interior slot.
pub fn cell_index(sub: SubPos) -> Option<usize> {
    if !is_valid_subindex(sub) {
        return None;
    }
    usize::try_from(SLOT_TO_CELL[(sub.x * SUPERTILE_SIZE + sub.y) as usize]).ok()
}

pub fn cell_sub(index: usize) -> Option<SubPos> {
    CELLS.get(index).copied()
}

fn round_div(numerator: i64, denominator: i64) -> i64 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

/// Splits a tile coordinate into its owning supertile and interior slot.
///
/// Unskewing the centre-relative coordinate and rounding lands on the owning
/// supertile except near four boundary wedges, where the interior remainder
/// falls outside the footprint and the supertile is shifted by one step.
pub fn gp_to_sgp(gp: GridPos) -> SupertileAddress {
    let px = i64::from(gp.x) - i64::from(RADIUS);
    let py = i64::from(gp.y) - i64::from(RADIUS);
    let mut sx = round_div(BASIS_B.1 * px - BASIS_B.0 * py, DETERMINANT);
    let mut sy = round_div(BASIS_A.0 * py - BASIS_A.1 * px, DETERMINANT);

    let (ix, iy) = interior_remainder(gp, sx, sy);
    let last = i64::from(SUPERTILE_SIZE - 1);
    if ix < 0 && iy < 0 {
        sx -= 1;
    } else if iy < 0 {
        sy -= 1;
    } else if ix > last && iy > last {
        sx += 1;
    } else if iy > last {
        sy += 1;
    }

    let (ix, iy) = interior_remainder(gp, sx, sy);
    debug_assert!(valid_slot(ix as i32, iy as i32), "unresolved boundary case at {gp:?}");
    SupertileAddress {
        sgp: SuperPos { x: sx as i32, y: sy as i32 },
        sub: SubPos { x: ix as i32, y: iy as i32 },
    }
}

fn interior_remainder(gp: GridPos, sx: i64, sy: i64) -> (i64, i64) {
    (
        i64::from(gp.x) - BASIS_A.0 * sx - BASIS_B.0 * sy,
        i64::from(gp.y) - BASIS_A.1 * sx - BASIS_B.1 * sy,
    )
}

/// Inverse of [`gp_to_sgp`].
pub fn sgp_to_gp(address: SupertileAddress) -> GridPos {
    let (sx, sy) = (i64::from(address.sgp.x), i64::from(address.sgp.y));
    GridPos {
        x: (BASIS_A.0 * sx + BASIS_B.0 * sy + i64::from(address.sub.x)) as i32,
        y: (BASIS_A.1 * sx + BASIS_B.1 * sy + i64::from(address.sub.y)) as i32,
    }
}

/// The tile at the centre of a supertile.
pub fn supertile_center(sgp: SuperPos) -> GridPos {
    sgp_to_gp(SupertileAddress { sgp, sub: SubPos { x: RADIUS, y: RADIUS } })
}

/// All tiles of a supertile, in cell order.
pub fn supertile_tiles(sgp: SuperPos) -> impl Iterator<Item = GridPos> {
    CELLS.into_iter().map(move |sub| sgp_to_gp(SupertileAddress { sgp, sub }))
}

pub fn supergrid_neighbor(sgp: SuperPos, direction: SuperDirection) -> SuperPos {
    let (dx, dy) = direction.delta();
    SuperPos { x: sgp.x.wrapping_add(dx), y: sgp.y.wrapping_add(dy) }
}

/// Splits a supertile coordinate into its ultratile and in-block offset.
pub fn sgp_to_ugp(sgp: SuperPos, layout: &GridLayout) -> UltraAddress {
    let size = layout.ultratile_size;
    UltraAddress {
        ugp: UltraPos { x: sgp.x.div_euclid(size), y: sgp.y.div_euclid(size) },
        offset: SuperPos { x: sgp.x.rem_euclid(size), y: sgp.y.rem_euclid(size) },
    }
}

/// Inverse of [`sgp_to_ugp`].
pub fn ugp_to_sgp(address: UltraAddress, layout: &GridLayout) -> SuperPos {
    let size = layout.ultratile_size;
    SuperPos {
        x: address.ugp.x.wrapping_mul(size).wrapping_add(address.offset.x),
        y: address.ugp.y.wrapping_mul(size).wrapping_add(address.offset.y),
    }
}
