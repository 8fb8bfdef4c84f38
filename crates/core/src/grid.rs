//! Unit hex-tile geometry: neighbours, distance, and world-space mapping.
//!
//! Tiles are flat-topped hexes. Axial `x` runs east (bending south), axial
//! `y` runs north, and `z = x - y` completes the cube coordinate triple.

use crate::config::Geometry;
use crate::types::{Direction, GridPos, WorldPos};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

pub fn neighbor(gp: GridPos, direction: Direction) -> GridPos {
    let (dx, dy) = direction.delta();
    gp.offset(dx, dy)
}

pub fn neighbors(gp: GridPos) -> [GridPos; 6] {
    Direction::ALL.map(|direction| neighbor(gp, direction))
}

/// Hex distance: the largest absolute difference along the three cube axes.
pub fn grid_distance(a: GridPos, b: GridPos) -> u64 {
    let dx = (i64::from(a.x) - i64::from(b.x)).unsigned_abs();
    let dy = (i64::from(a.y) - i64::from(b.y)).unsigned_abs();
    let dz = (a.z() - b.z()).unsigned_abs();
    dx.max(dy).max(dz)
}

/// Centre of a tile in world space.
pub fn world_pos(gp: GridPos, geometry: &Geometry) -> WorldPos {
    let x = f64::from(gp.x);
    let y = f64::from(gp.y);
    WorldPos {
        x: 1.5 * geometry.cell_size * x,
        y: SQRT_3 * geometry.cell_size * (y - x / 2.0),
    }
}

/// The tile containing a world-space point.
pub fn grid_pos(wp: WorldPos, geometry: &Geometry) -> GridPos {
    let fx = wp.x / (1.5 * geometry.cell_size);
    let fy = wp.y / (SQRT_3 * geometry.cell_size) + fx / 2.0;
    cube_round(fx, fy)
}

/// Rounds a fractional axial coordinate to the nearest tile by rounding the
/// cube triple `(x, -y, y - x)` and repairing the worst-rounded component.
fn cube_round(fx: f64, fy: f64) -> GridPos {
    let (a, b, c) = (fx, -fy, fy - fx);
    let (mut ra, mut rb, rc) = (a.round(), b.round(), c.round());
    let (da, db, dc) = ((ra - a).abs(), (rb - b).abs(), (rc - c).abs());
    if da > db && da > dc {
        ra = -rb - rc;
    } else if db > dc {
        rb = -ra - rc;
    }
    GridPos { x: ra as i32, y: -rb as i32 }
}
