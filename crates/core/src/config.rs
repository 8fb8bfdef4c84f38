//! Structural constants and world configuration.
//!
//! Every layout-dependent function takes a `&GridLayout` that has already
//! passed validation; validation happens once, when the configuration is
//! built or loaded, never per call.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generate::Vocabulary;

pub const DEFAULT_ULTRATILE_SIZE: i32 = 12;
pub const DEFAULT_SOCKETS_PER_SUPERTILE: u8 = 3;
pub const DEFAULT_REGION_ULTRATILES: i32 = 1000;
pub const DEFAULT_CELL_SIZE: f64 = 1.0;
pub const DEFAULT_RING_LEEWAY: u32 = 3;

/// Upper bound on sockets addressable inside one assignment region.
pub const MAX_REGION_SOCKETS: u64 = 600_000_000;

/// Edge sockets a supertile owns: half of its six shared edges.
pub const EDGE_SOCKETS: u8 = 3;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
    InvalidUltratileSize(i32),
    InvalidSocketCount(u8),
    InvalidRegionSize(i32),
    RegionTooLarge { sockets: u64 },
    InvalidCellSize(f64),
    EmptyVocabulary,
    EmptyDomain { name: String },
    ZeroTotalWeight { name: String },
    InvalidMixChance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(message) => write!(f, "invalid config: {message}"),
            Self::InvalidUltratileSize(size) => {
                write!(f, "ultratile size must be at least 1, got {size}")
            }
            Self::InvalidSocketCount(count) => write!(
                f,
                "sockets per supertile must be {EDGE_SOCKETS} (edges) \
                 or {} (edges and centre), got {count}",
                EDGE_SOCKETS + 1
            ),
            Self::InvalidRegionSize(size) => {
                write!(f, "assignment region must span at least 1 ultratile, got {size}")
            }
            Self::RegionTooLarge { sockets } => write!(
                f,
                "assignment region holds {sockets} sockets, \
                 more than the limit of {MAX_REGION_SOCKETS}"
            ),
            Self::InvalidCellSize(size) => {
                write!(f, "cell size must be positive and finite, got {size}")
            }
            Self::EmptyVocabulary => write!(f, "vocabulary has no domains"),
            Self::EmptyDomain { name } => write!(f, "domain '{name}' has no glyphs"),
            Self::ZeroTotalWeight { name } => {
                write!(f, "domain '{name}' has zero total weight and no smoothing")
            }
            Self::InvalidMixChance(p) => write!(f, "mix chance must be within [0, 1], got {p}"),
        }
    }
}

impl Error for ConfigError {}

/// Structural constants of the supertile hierarchy above the fixed 37-cell
/// supertile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Side of the square block of supertiles forming one ultratile.
    pub ultratile_size: i32,
    /// 3 for edge sockets only, 4 to add a centre socket.
    pub sockets_per_supertile: u8,
    /// Side of an assignment region, in ultratiles.
    pub region_ultratiles: i32,
}

const fn region_sockets(ultratile_size: i32, sockets: u8, region_ultratiles: i32) -> u64 {
    let side = ultratile_size as u64 * region_ultratiles as u64;
    side * side * sockets as u64
}

// The default region must stay valid whether or not the centre socket is on.
const _: () = assert!(
    region_sockets(DEFAULT_ULTRATILE_SIZE, EDGE_SOCKETS + 1, DEFAULT_REGION_ULTRATILES)
        <= MAX_REGION_SOCKETS
);

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            ultratile_size: DEFAULT_ULTRATILE_SIZE,
            sockets_per_supertile: DEFAULT_SOCKETS_PER_SUPERTILE,
            region_ultratiles: DEFAULT_REGION_ULTRATILES,
        }
    }
}

impl GridLayout {
    pub fn new(
        ultratile_size: i32,
        sockets_per_supertile: u8,
        region_ultratiles: i32,
    ) -> Result<Self, ConfigError> {
        let layout = Self { ultratile_size, sockets_per_supertile, region_ultratiles };
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ultratile_size < 1 {
            return Err(ConfigError::InvalidUltratileSize(self.ultratile_size));
        }
        if self.sockets_per_supertile != EDGE_SOCKETS
            && self.sockets_per_supertile != EDGE_SOCKETS + 1
        {
            return Err(ConfigError::InvalidSocketCount(self.sockets_per_supertile));
        }
        if self.region_ultratiles < 1 {
            return Err(ConfigError::InvalidRegionSize(self.region_ultratiles));
        }
        let sockets = self.region_capacity();
        if sockets > MAX_REGION_SOCKETS {
            return Err(ConfigError::RegionTooLarge { sockets });
        }
        Ok(())
    }

    pub fn has_center_socket(&self) -> bool {
        self.sockets_per_supertile > EDGE_SOCKETS
    }

    /// Side of an assignment region, in supertiles.
    pub fn region_side(&self) -> i32 {
        self.ultratile_size * self.region_ultratiles
    }

    pub fn region_capacity(&self) -> u64 {
        region_sockets(self.ultratile_size, self.sockets_per_supertile, self.region_ultratiles)
    }
}

/// Continuous-space parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Circumradius of one hex tile in world units.
    pub cell_size: f64,
    /// Half-width of the linear search window used to resolve ring indices.
    pub ring_leeway: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { cell_size: DEFAULT_CELL_SIZE, ring_leeway: DEFAULT_RING_LEEWAY }
    }
}

impl Geometry {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

/// Everything needed to generate a world: the root seed plus structure and
/// content parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub seed: u32,
    pub layout: GridLayout,
    pub geometry: Geometry,
    pub vocabulary: Vocabulary,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            layout: GridLayout::default(),
            geometry: Geometry::default(),
            vocabulary: Vocabulary::english(),
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        self.geometry.validate()?;
        self.vocabulary.validate()
    }

    /// Parses and validates a TOML document; omitted fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!(
            "loaded world config from {}: seed={} layout={:?} domains={}",
            path.display(),
            config.seed,
            config.layout,
            config.vocabulary.domains.len()
        );
        Ok(config)
    }
}
