use serde::{Deserialize, Serialize};

/// Axial coordinate of one hex tile. The implied third axis is `z = x - y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn z(self) -> i64 {
        i64::from(self.x) - i64::from(self.y)
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.wrapping_add(dx), y: self.y.wrapping_add(dy) }
    }
}

/// Continuous Cartesian position in world space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
}

/// Coordinate of a supertile on the coarse lattice spanned by (7,4) and (3,7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SuperPos {
    pub x: i32,
    pub y: i32,
}

impl SuperPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Interior slot of a tile inside its supertile's 7x7 bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubPos {
    pub x: i32,
    pub y: i32,
}

impl SubPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A tile expressed as its owning supertile plus interior slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SupertileAddress {
    pub sgp: SuperPos,
    pub sub: SubPos,
}

/// Coordinate of a square block of supertiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UltraPos {
    pub x: i32,
    pub y: i32,
}

/// A supertile expressed as its ultratile plus a non-negative in-block offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UltraAddress {
    pub ugp: UltraPos,
    pub offset: SuperPos,
}

/// Ring distance from a centre plus clockwise index within that ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RingPos {
    pub radius: u32,
    pub index: u64,
}

/// The six neighbour directions of the tile grid, clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Direction {
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    /// Rotates clockwise by `steps` (negative steps rotate counter-clockwise).
    pub fn rotate(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }

    pub fn opposite(self) -> Self {
        self.rotate(3)
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::NorthEast => (1, 1),
            Self::SouthEast => (1, 0),
            Self::South => (0, -1),
            Self::SouthWest => (-1, -1),
            Self::NorthWest => (-1, 0),
        }
    }
}

/// The six neighbour directions of the supertile lattice, clockwise.
///
/// The supertile lattice is rotated relative to the tile grid, so its
/// directions are a separate set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuperDirection {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl SuperDirection {
    pub const ALL: [Self; 6] = [
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    pub fn rotate(self, steps: i64) -> Self {
        Self::from_index(self.index() as i64 + steps)
    }

    pub fn opposite(self) -> Self {
        self.rotate(3)
    }

    /// The three directions whose edge sockets a supertile owns.
    pub fn is_canonical(self) -> bool {
        self.index() < 3
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::NorthEast => (0, 1),
            Self::East => (1, 0),
            Self::SouthEast => (1, -1),
            Self::SouthWest => (0, -1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, 1),
        }
    }
}

/// One assignment socket of a supertile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Socket {
    /// The edge shared with the neighbour in this direction.
    Edge(SuperDirection),
    /// Interior socket owned by the supertile alone; only present in
    /// four-socket layouts.
    Center,
}

/// A socket named from the perspective of one supertile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SocketAddr {
    pub sgp: SuperPos,
    pub socket: Socket,
}

impl SocketAddr {
    pub const fn new(sgp: SuperPos, socket: Socket) -> Self {
        Self { sgp, socket }
    }
}

/// Coordinate of one assignment region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionPos {
    pub x: i32,
    pub y: i32,
}

/// A socket flattened into its assignment region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionAddr {
    pub region: RegionPos,
    pub index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_in_both_directions() {
        assert_eq!(Direction::North.rotate(1), Direction::NorthEast);
        assert_eq!(Direction::North.rotate(-1), Direction::NorthWest);
        assert_eq!(Direction::SouthWest.rotate(8), Direction::North);
        assert_eq!(SuperDirection::East.rotate(-7), SuperDirection::NorthEast);
    }

    #[test]
    fn opposite_directions_cancel() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
        for direction in SuperDirection::ALL {
            let (dx, dy) = direction.delta();
            let (ox, oy) = direction.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_ne!(direction.is_canonical(), direction.opposite().is_canonical());
        }
    }
}
