//! Ring and spiral enumeration of tiles around a centre.
//!
//! Ring `r > 0` holds `6r` tiles. Index `i` lies on edge `i / r`, which
//! starts at the corner `r * dir(edge)` and walks `i mod r` steps along
//! `dir(edge + 2)`; edges are visited clockwise from north. Spiral indices
//! number rings consecutively: 0 is the centre and ring `r` starts at
//! `1 + 3r(r - 1)`.

use crate::config::Geometry;
use crate::grid::{grid_distance, world_pos};
use crate::types::{Direction, GridPos, RingPos};

pub fn ring_size(radius: u32) -> u64 {
    if radius == 0 { 1 } else { 6 * u64::from(radius) }
}

/// Unwrapped offset of ring position `rp` from its centre.
fn ring_offset(rp: RingPos) -> (i64, i64) {
    if rp.radius == 0 {
        return (0, 0);
    }
    let radius = i64::from(rp.radius);
    let index = (rp.index % ring_size(rp.radius)) as i64;
    let edge = Direction::from_index(index / radius);
    let along = index % radius;
    let (cx, cy) = edge.delta();
    let (wx, wy) = edge.rotate(2).delta();
    let x = i64::from(cx) * radius + i64::from(wx) * along;
    let y = i64::from(cy) * radius + i64::from(wy) * along;
    (x, y)
}

/// Tile at ring position `rp` around the origin. Positions beyond the `i32`
/// plane wrap.
pub fn rp_to_gp(rp: RingPos) -> GridPos {
    let (x, y) = ring_offset(rp);
    GridPos { x: x as i32, y: y as i32 }
}

pub fn rp_to_gp_around(center: GridPos, rp: RingPos) -> GridPos {
    let offset = rp_to_gp(rp);
    center.offset(offset.x, offset.y)
}

/// Ring position of `gp` relative to the origin.
///
/// The edge is estimated from the tile's world-space bearing and the
/// position along it from the distance to that edge's corner. Near corners
/// the bearing can pick the adjacent edge, so the estimate is confirmed by a
/// linear search of `geometry.ring_leeway` indices either side. A miss is
/// logged and returns `None`; it means the leeway or geometry is wrong.
pub fn gp_to_rp(gp: GridPos, geometry: &Geometry) -> Option<RingPos> {
    let radius = grid_distance(GridPos::ORIGIN, gp);
    if radius == 0 {
        return Some(RingPos { radius: 0, index: 0 });
    }
    // |x|, |y| and |x - y| are all below 2^32 on the i32 plane.
    let radius = u32::try_from(radius).ok()?;
    let center = world_pos(gp, &Geometry { cell_size: 1.0, ..*geometry });
    let bearing = center.y.atan2(center.x).to_degrees();
    let clockwise_from_north = (90.0 - bearing).rem_euclid(360.0);
    let edge = ((clockwise_from_north / 60.0) as i64).min(5);
    let (cx, cy) = Direction::from_index(edge).delta();
    let dx = i64::from(gp.x) - i64::from(cx) * i64::from(radius);
    let dy = i64::from(gp.y) - i64::from(cy) * i64::from(radius);
    let along = dx.abs().max(dy.abs()).max((dx - dy).abs());
    let estimate = edge * i64::from(radius) + along;
    search_ring_index(gp, radius, estimate, geometry.ring_leeway)
}

/// Scans outward from `estimate` for the index on ring `radius` that lands
/// on `gp`.
pub fn search_ring_index(gp: GridPos, radius: u32, estimate: i64, leeway: u32) -> Option<RingPos> {
    let size = ring_size(radius) as i64;
    let target = (i64::from(gp.x), i64::from(gp.y));
    for distance in 0..=i64::from(leeway) {
        for candidate in [estimate.saturating_add(distance), estimate.saturating_sub(distance)] {
            let rp = RingPos { radius, index: candidate.rem_euclid(size) as u64 };
            if ring_offset(rp) == target {
                return Some(rp);
            }
        }
    }
    log::warn!(
        "could not resolve ring index for {gp:?} on ring {radius}: \
         no match within {leeway} of estimate {estimate}"
    );
    None
}

pub fn gp_to_rp_around(center: GridPos, gp: GridPos, geometry: &Geometry) -> Option<RingPos> {
    gp_to_rp(gp.offset(center.x.wrapping_neg(), center.y.wrapping_neg()), geometry)
}

/// Spiral index of `rp`, or `None` once the ring starts past `u64::MAX`
/// (radius above roughly 2.48e9).
pub fn rp_to_spiral(rp: RingPos) -> Option<u64> {
    if rp.radius == 0 {
        return Some(0);
    }
    let start = ring_start(u64::from(rp.radius));
    u64::try_from(start + u128::from(rp.index % ring_size(rp.radius))).ok()
}

fn ring_start(radius: u64) -> u128 {
    let radius = u128::from(radius);
    if radius == 0 { 0 } else { 1 + 3 * radius * (radius - 1) }
}

/// Ring position of spiral index `spiral`. Every `u64` lands on a ring whose
/// radius fits in `u32`.
pub fn spiral_to_rp(spiral: u64) -> RingPos {
    if spiral == 0 {
        return RingPos { radius: 0, index: 0 };
    }
    let target = u128::from(spiral);
    let estimate = (3.0 + (12.0 * spiral as f64 - 3.0).sqrt()) / 6.0;
    let mut radius = (estimate as u64).max(1);
    while ring_start(radius) > target {
        radius -= 1;
    }
    while ring_start(radius + 1) <= target {
        radius += 1;
    }
    RingPos { radius: radius as u32, index: (target - ring_start(radius)) as u64 }
}

pub fn spiral_to_gp(center: GridPos, spiral: u64) -> GridPos {
    rp_to_gp_around(center, spiral_to_rp(spiral))
}

pub fn gp_to_spiral(center: GridPos, gp: GridPos, geometry: &Geometry) -> Option<u64> {
    gp_to_rp_around(center, gp, geometry).and_then(rp_to_spiral)
}

/// Tiles of ring `radius` around `center`, clockwise from north.
pub fn ring(center: GridPos, radius: u32) -> impl Iterator<Item = GridPos> {
    (0..ring_size(radius)).map(move |index| rp_to_gp_around(center, RingPos { radius, index }))
}

/// All tiles within `radius` of `center`, ring by ring.
pub fn spiral(center: GridPos, radius: u32) -> impl Iterator<Item = GridPos> {
    (0..=radius).flat_map(move |r| ring(center, r))
}
