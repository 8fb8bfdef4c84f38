//! Generated supertile content.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::supergrid::cell_index;
use crate::types::{SubPos, SuperPos};

/// Content of the 37 cells of one supertile, as parallel arrays in cell
/// order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupertileContent {
    pub sgp: SuperPos,
    pub glyphs: Vec<String>,
    pub colors: Vec<String>,
    /// Index into the generating vocabulary's domains.
    pub domains: Vec<usize>,
}

/// Content of a single tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub glyph: String,
    pub color: String,
    pub domain: usize,
}

impl SupertileContent {
    pub fn cell(&self, index: usize) -> Option<Cell> {
        Some(Cell {
            glyph: self.glyphs.get(index)?.clone(),
            color: self.colors.get(index)?.clone(),
            domain: *self.domains.get(index)?,
        })
    }

    pub fn cell_at(&self, sub: SubPos) -> Option<Cell> {
        cell_index(sub).and_then(|index| self.cell(index))
    }

    pub fn glyph_at(&self, sub: SubPos) -> Option<&str> {
        cell_index(sub).and_then(|index| self.glyphs.get(index)).map(String::as_str)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.sgp.x.to_le_bytes());
        bytes.extend(self.sgp.y.to_le_bytes());
        for text in self.glyphs.iter().chain(&self.colors) {
            bytes.extend((text.len() as u32).to_le_bytes());
            bytes.extend(text.as_bytes());
        }
        for domain in &self.domains {
            bytes.extend((*domain as u32).to_le_bytes());
        }
        bytes
    }

    /// Stable 64-bit digest of the content, for determinism checks.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
