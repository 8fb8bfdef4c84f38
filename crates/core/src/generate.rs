//! Deterministic supertile content generation.
//!
//! Content is a pure function of `(seed, vocabulary, sgp)`: nothing is cached
//! and no supertile depends on any other having been generated.

mod model;
mod seed;
mod vocabulary;
mod weighted;

pub use model::{Cell, SupertileContent};
pub use seed::{derive_cell_seed, derive_supertile_seed, mix_seed};
pub use vocabulary::{DEFAULT_MIX_CHANCE, Domain, Vocabulary};
pub use weighted::{WeightedGlyph, WeightedTable};

use anarchy::{flip, idist, prng};

use crate::supergrid::{CELLS, SUPERTILE_CELLS, gp_to_sgp};
use crate::types::{GridPos, SubPos, SuperPos};
use seed::{DOMAIN_MIX_SALT, PRIMARY_DOMAIN_SALT, SECONDARY_DOMAIN_SALT};

pub struct SupertileGenerator<'a> {
    seed: u32,
    vocabulary: &'a Vocabulary,
}

impl<'a> SupertileGenerator<'a> {
    /// `vocabulary` must have passed [`Vocabulary::validate`].
    pub fn new(seed: u32, vocabulary: &'a Vocabulary) -> Self {
        debug_assert!(vocabulary.validate().is_ok(), "generator given an invalid vocabulary");
        Self { seed, vocabulary }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn generate(&self, sgp: SuperPos) -> SupertileContent {
        let plan = self.plan(sgp);
        let mut content = SupertileContent {
            sgp,
            glyphs: Vec::with_capacity(SUPERTILE_CELLS),
            colors: Vec::with_capacity(SUPERTILE_CELLS),
            domains: Vec::with_capacity(SUPERTILE_CELLS),
        };
        for sub in CELLS {
            let cell = self.cell(&plan, sub);
            content.glyphs.push(cell.glyph);
            content.colors.push(cell.color);
            content.domains.push(cell.domain);
        }
        content
    }

    /// Content of one tile. Identical to extracting the tile from its
    /// supertile's full content, without generating the other 36 cells.
    pub fn generate_tile(&self, gp: GridPos) -> Cell {
        let address = gp_to_sgp(gp);
        self.cell(&self.plan(address.sgp), address.sub)
    }

    fn plan(&self, sgp: SuperPos) -> SupertilePlan {
        let seed = derive_supertile_seed(self.seed, sgp);
        let domain_count = self.vocabulary.domains.len() as i32;
        SupertilePlan {
            seed,
            primary: idist(prng(seed, PRIMARY_DOMAIN_SALT), 0, domain_count) as usize,
            secondary: idist(prng(seed, SECONDARY_DOMAIN_SALT), 0, domain_count) as usize,
        }
    }

    fn cell(&self, plan: &SupertilePlan, sub: SubPos) -> Cell {
        let cell_seed = derive_cell_seed(plan.seed, sub);
        let domain_index = if flip(self.vocabulary.mix_chance, prng(cell_seed, DOMAIN_MIX_SALT)) {
            plan.secondary
        } else {
            plan.primary
        };
        let domain = &self.vocabulary.domains[domain_index];
        Cell {
            glyph: domain.table.sample(cell_seed).unwrap_or_default().to_string(),
            color: domain.color.clone(),
            domain: domain_index,
        }
    }
}

/// Per-supertile draws shared by all of its cells.
struct SupertilePlan {
    seed: u32,
    primary: usize,
    secondary: usize,
}

pub fn generate_supertile(seed: u32, vocabulary: &Vocabulary, sgp: SuperPos) -> SupertileContent {
    SupertileGenerator::new(seed, vocabulary).generate(sgp)
}

pub fn generate_tile(seed: u32, vocabulary: &Vocabulary, gp: GridPos) -> Cell {
    SupertileGenerator::new(seed, vocabulary).generate_tile(gp)
}
