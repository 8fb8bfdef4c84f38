//! Content vocabularies: the domains a supertile's glyphs are drawn from.

use serde::{Deserialize, Serialize};

use super::weighted::WeightedTable;
use crate::config::ConfigError;

pub const DEFAULT_MIX_CHANCE: f64 = 0.25;

/// A themed sub-vocabulary with its own glyph distribution and colour tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DomainRecord", into = "DomainRecord")]
pub struct Domain {
    pub name: String,
    pub color: String,
    pub table: WeightedTable,
}

/// On-disk shape of a domain: glyphs as an ordered list of `[glyph, weight]`
/// pairs, since entry order is part of the sampling contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct DomainRecord {
    name: String,
    color: String,
    #[serde(default)]
    smoothing: u32,
    glyphs: Vec<(String, u32)>,
}

impl From<DomainRecord> for Domain {
    fn from(record: DomainRecord) -> Self {
        Self {
            name: record.name,
            color: record.color,
            table: WeightedTable::new(record.glyphs, record.smoothing),
        }
    }
}

impl From<Domain> for DomainRecord {
    fn from(domain: Domain) -> Self {
        Self {
            name: domain.name,
            color: domain.color,
            smoothing: domain.table.smoothing,
            glyphs: domain
                .table
                .entries
                .into_iter()
                .map(|entry| (entry.glyph, entry.weight))
                .collect(),
        }
    }
}

impl Domain {
    pub fn new(name: impl Into<String>, color: impl Into<String>, table: WeightedTable) -> Self {
        Self { name: name.into(), color: color.into(), table }
    }
}

/// Ordered set of domains plus the chance that a cell uses its supertile's
/// secondary domain instead of the primary one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub domains: Vec<Domain>,
    pub mix_chance: f64,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::english()
    }
}

impl Vocabulary {
    pub fn new(domains: Vec<Domain>, mix_chance: f64) -> Result<Self, ConfigError> {
        let vocabulary = Self { domains, mix_chance };
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    pub fn english() -> Self {
        Self {
            domains: vec![Domain::new("english", "white", WeightedTable::english_letters())],
            mix_chance: DEFAULT_MIX_CHANCE,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domains.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        if !(0.0..=1.0).contains(&self.mix_chance) {
            return Err(ConfigError::InvalidMixChance(self.mix_chance));
        }
        for domain in &self.domains {
            if domain.table.is_empty() {
                return Err(ConfigError::EmptyDomain { name: domain.name.clone() });
            }
            if domain.table.total_weight() == 0 {
                return Err(ConfigError::ZeroTotalWeight { name: domain.name.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_vocabulary_is_valid() {
        assert!(Vocabulary::english().validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_vocabularies() {
        assert!(matches!(Vocabulary::new(Vec::new(), 0.1), Err(ConfigError::EmptyVocabulary)));

        let empty =
            Domain::new("void", "black", WeightedTable::new(Vec::<(String, u32)>::new(), 1));
        assert!(matches!(
            Vocabulary::new(vec![empty], 0.1),
            Err(ConfigError::EmptyDomain { name }) if name == "void"
        ));

        let silent = Domain::new("silent", "grey", WeightedTable::new([("a", 0)], 0));
        assert!(matches!(
            Vocabulary::new(vec![silent], 0.1),
            Err(ConfigError::ZeroTotalWeight { .. })
        ));

        let english = || vec![Domain::new("e", "w", WeightedTable::english_letters())];
        assert!(matches!(
            Vocabulary::new(english(), 1.5),
            Err(ConfigError::InvalidMixChance(_))
        ));
        assert!(Vocabulary::new(english(), f64::NAN).is_err());
    }

    #[test]
    fn domains_parse_from_ordered_glyph_lists() {
        let text = r#"
            mix_chance = 0.5

            [[domains]]
            name = "runes"
            color = "gold"
            smoothing = 2
            glyphs = [["ᚠ", 3], ["ᚢ", 0], ["ᚦ", 7]]
        "#;
        let vocabulary: Vocabulary = toml::from_str(text).expect("vocabulary should parse");
        assert_eq!(vocabulary.mix_chance, 0.5);
        let runes = &vocabulary.domains[0];
        assert_eq!(runes.color, "gold");
        assert_eq!(runes.table.smoothing, 2);
        let glyphs: Vec<&str> =
            runes.table.entries.iter().map(|entry| entry.glyph.as_str()).collect();
        assert_eq!(glyphs, ["ᚠ", "ᚢ", "ᚦ"]);
    }
}
