//! Weighted glyph tables with Laplace smoothing.

use serde::{Deserialize, Serialize};

/// One symbol and its relative weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedGlyph {
    pub glyph: String,
    pub weight: u32,
}

/// Discrete distribution over glyphs. `smoothing` is added to every weight
/// so that zero-weight glyphs stay reachable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedTable {
    pub entries: Vec<WeightedGlyph>,
    #[serde(default)]
    pub smoothing: u32,
}

/// English letter frequencies in hundredths of a percent.
const ENGLISH_LETTERS: [(&str, u32); 26] = [
    ("a", 817),
    ("b", 149),
    ("c", 278),
    ("d", 425),
    ("e", 1270),
    ("f", 223),
    ("g", 202),
    ("h", 609),
    ("i", 697),
    ("j", 15),
    ("k", 77),
    ("l", 403),
    ("m", 241),
    ("n", 675),
    ("o", 751),
    ("p", 193),
    ("q", 10),
    ("r", 599),
    ("s", 633),
    ("t", 906),
    ("u", 276),
    ("v", 98),
    ("w", 236),
    ("x", 15),
    ("y", 197),
    ("z", 7),
];

const ENGLISH_SMOOTHING: u32 = 5;

impl WeightedTable {
    pub fn new<G: Into<String>>(
        entries: impl IntoIterator<Item = (G, u32)>,
        smoothing: u32,
    ) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(glyph, weight)| WeightedGlyph { glyph: glyph.into(), weight })
                .collect(),
            smoothing,
        }
    }

    pub fn english_letters() -> Self {
        Self::new(ENGLISH_LETTERS, ENGLISH_SMOOTHING)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.weight) + u64::from(self.smoothing)).sum()
    }

    /// Probability of drawing entry `index`.
    pub fn probability(&self, index: usize) -> f64 {
        let total = self.total_weight();
        match self.entries.get(index) {
            Some(entry) if total > 0 => {
                (u64::from(entry.weight) + u64::from(self.smoothing)) as f64 / total as f64
            }
            _ => 0.0,
        }
    }

    /// Index of the entry selected by `seed`: the first entry whose
    /// cumulative weight exceeds `seed` scaled onto `[0, total)`.
    ///
    /// Returns `None` only for a table with zero total weight.
    pub fn sample_index(&self, seed: u32) -> Option<usize> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let draw = ((u128::from(seed) * u128::from(total)) >> 32) as u64;
        let mut cumulative = 0_u64;
        for (index, entry) in self.entries.iter().enumerate() {
            cumulative += u64::from(entry.weight) + u64::from(self.smoothing);
            if cumulative > draw {
                return Some(index);
            }
        }
        None
    }

    pub fn sample(&self, seed: u32) -> Option<&str> {
        self.sample_index(seed).map(|index| self.entries[index].glyph.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_table_is_complete() {
        let table = WeightedTable::english_letters();
        assert_eq!(table.len(), 26);
        assert_eq!(table.total_weight(), 10_002 + 26 * 5);
    }

    #[test]
    fn extreme_seeds_select_first_and_last_entries() {
        let table = WeightedTable::english_letters();
        assert_eq!(table.sample(0), Some("a"));
        assert_eq!(table.sample(u32::MAX), Some("z"));
    }

    #[test]
    fn smoothing_keeps_zero_weights_reachable() {
        let table = WeightedTable::new([("common", 1000), ("rare", 0)], 1);
        assert!(table.probability(1) > 0.0);
        assert_eq!(table.sample(u32::MAX), Some("rare"));

        let unsmoothed = WeightedTable::new([("common", 1000), ("rare", 0)], 0);
        assert_eq!(unsmoothed.probability(1), 0.0);
        assert_eq!(unsmoothed.sample(u32::MAX), Some("common"));
    }

    #[test]
    fn zero_weight_table_draws_nothing() {
        let table = WeightedTable::new([("a", 0), ("b", 0)], 0);
        assert_eq!(table.sample_index(12345), None);
        assert_eq!(WeightedTable::new(Vec::<(String, u32)>::new(), 3).sample(1), None);
    }

    #[test]
    fn draw_boundaries_follow_cumulative_weights() {
        let table = WeightedTable::new([("x", 1), ("y", 1), ("z", 2)], 0);
        assert_eq!(table.sample(0x3FFF_FFFF), Some("x"));
        assert_eq!(table.sample(0x4000_0000), Some("y"));
        assert_eq!(table.sample(0x7FFF_FFFF), Some("y"));
        assert_eq!(table.sample(0x8000_0000), Some("z"));
    }
}
