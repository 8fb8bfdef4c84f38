//! Assignment sockets shared between neighbouring supertiles.
//!
//! Every supertile edge is shared by two supertiles. The supertile that sees
//! the edge in one of the first three supergrid directions owns it; the
//! other names the same socket through the opposite direction. Anything
//! that derives content from a socket must canonicalise the address first
//! so both neighbours agree.

use crate::config::{EDGE_SOCKETS, GridLayout};
use crate::supergrid::supergrid_neighbor;
use crate::types::{RegionAddr, RegionPos, Socket, SocketAddr, SuperDirection, SuperPos};

/// The same socket named from the other supertile that shares it. Centre
/// sockets are their own alternate.
pub fn supergrid_alternate(address: SocketAddr) -> SocketAddr {
    match address.socket {
        Socket::Edge(direction) => SocketAddr {
            sgp: supergrid_neighbor(address.sgp, direction),
            socket: Socket::Edge(direction.opposite()),
        },
        Socket::Center => address,
    }
}

/// The owning supertile's name for a socket.
pub fn canonical_sgapos(address: SocketAddr) -> SocketAddr {
    match address.socket {
        Socket::Edge(direction) if !direction.is_canonical() => supergrid_alternate(address),
        _ => address,
    }
}

fn rotate_edge(address: SocketAddr, steps: i64) -> SocketAddr {
    match address.socket {
        Socket::Edge(direction) => canonical_sgapos(SocketAddr {
            sgp: address.sgp,
            socket: Socket::Edge(direction.rotate(steps)),
        }),
        Socket::Center => address,
    }
}

/// The edge clockwise of this one around the same supertile, canonicalised.
pub fn next_edge(address: SocketAddr) -> SocketAddr {
    rotate_edge(address, 1)
}

/// The edge counter-clockwise of this one around the same supertile,
/// canonicalised.
pub fn prev_edge(address: SocketAddr) -> SocketAddr {
    rotate_edge(address, -1)
}

/// Edge sockets touching this one: its two flanking edges on each of the
/// two supertiles that share it. Centre sockets touch no edges.
pub fn supergrid_asg_neighbors(address: SocketAddr) -> Vec<SocketAddr> {
    match address.socket {
        Socket::Edge(_) => {
            let alternate = supergrid_alternate(address);
            vec![next_edge(address), prev_edge(address), next_edge(alternate), prev_edge(alternate)]
        }
        Socket::Center => Vec::new(),
    }
}

/// Canonical sockets owned by one supertile under `layout`.
pub fn owned_sockets(sgp: SuperPos, layout: &GridLayout) -> impl Iterator<Item = SocketAddr> {
    let center = layout.has_center_socket().then_some(SocketAddr::new(sgp, Socket::Center));
    SuperDirection::ALL
        .into_iter()
        .filter(|direction| direction.is_canonical())
        .map(move |direction| SocketAddr::new(sgp, Socket::Edge(direction)))
        .chain(center)
}

/// Position of a canonical socket within its supertile's socket block.
fn socket_slot(socket: Socket) -> u64 {
    match socket {
        Socket::Edge(direction) => direction.index() as u64,
        Socket::Center => u64::from(EDGE_SOCKETS),
    }
}

/// Flattens a socket into its assignment region and in-region index.
///
/// The address is canonicalised first, so both names of a shared edge map to
/// the same index.
pub fn sgap_to_arp(address: SocketAddr, layout: &GridLayout) -> RegionAddr {
    let canonical = canonical_sgapos(address);
    debug_assert!(
        canonical.socket != Socket::Center || layout.has_center_socket(),
        "centre socket addressed under a layout without one"
    );
    let side = layout.region_side();
    let (sx, sy) = (canonical.sgp.x, canonical.sgp.y);
    let rx = u64::from(sx.rem_euclid(side).unsigned_abs());
    let ry = u64::from(sy.rem_euclid(side).unsigned_abs());
    let supertile = ry * u64::from(side.unsigned_abs()) + rx;
    let index = supertile * u64::from(layout.sockets_per_supertile) + socket_slot(canonical.socket);
    RegionAddr {
        region: RegionPos { x: sx.div_euclid(side), y: sy.div_euclid(side) },
        index: index as u32,
    }
}

/// Inverse of [`sgap_to_arp`]; always yields the canonical address.
pub fn arp_to_sgap(address: RegionAddr, layout: &GridLayout) -> SocketAddr {
    let side = layout.region_side();
    let sockets = u32::from(layout.sockets_per_supertile);
    let slot = address.index % sockets;
    let supertile = address.index / sockets;
    let rx = (supertile % side as u32) as i32;
    let ry = (supertile / side as u32) as i32;
    let socket = if slot < u32::from(EDGE_SOCKETS) {
        Socket::Edge(SuperDirection::from_index(i64::from(slot)))
    } else {
        Socket::Center
    };
    SocketAddr {
        sgp: SuperPos {
            x: address.region.x.wrapping_mul(side).wrapping_add(rx),
            y: address.region.y.wrapping_mul(side).wrapping_add(ry),
        },
        socket,
    }
}
