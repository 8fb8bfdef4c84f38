//! Infinite hierarchical hex world: coordinate transforms between tiles,
//! supertiles, ultratiles and assignment regions, plus deterministic
//! supertile content seeded through the reversible `anarchy` primitives.
//!
//! Everything here is a pure function of its arguments. The root seed and
//! structural configuration are passed in explicitly; nothing is cached.

pub mod config;
pub mod generate;
pub mod grid;
pub mod rings;
pub mod sockets;
pub mod supergrid;
pub mod types;

pub use config::{ConfigError, Geometry, GridLayout, WorldConfig};
pub use generate::{
    Cell, Domain, SupertileContent, SupertileGenerator, Vocabulary, WeightedTable,
    generate_supertile, generate_tile,
};
pub use types::*;
