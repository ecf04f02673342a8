mod canonical;
pub mod router;
mod table;

pub use canonical::canonicalize;
pub use router::city_router;

use std::collections::HashMap;

use table::CITY_ALIASES;

/// Maps free-text city names onto a single canonical form.
///
/// The reverse index (alias -> canonical name) is derived once from the
/// compiled-in alias table at construction and never mutated afterwards, so a
/// single instance can be shared across request handlers without
/// coordination. Construct one at startup and hand it out behind an `Arc`
/// rather than rebuilding the index per lookup.
pub struct CityNormalizer {
    index: HashMap<String, &'static str>,
    collisions: Vec<AliasCollision>,
}

/// An alias that appeared under more than one canonical city in the table.
///
/// Construction resolves these last-write-wins, matching table order, but
/// records the overwrite so the hosting service can surface it. A collision
/// is a data-authoring hazard in the literal table, not a runtime failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    pub alias: String,
    pub kept: &'static str,
    pub discarded: &'static str,
}

impl CityNormalizer {
    /// Builds the reverse index from the compiled-in table.
    ///
    /// Every alias is inserted under its canonicalized form, and every
    /// canonical name is additionally registered as an alias of itself, so
    /// `normalize(c) == Some(c)` holds for all canonical names even where
    /// the table does not restate them.
    pub fn new() -> Self {
        let mut index = HashMap::new();
        let mut collisions = Vec::new();

        for &(canonical, aliases) in CITY_ALIASES {
            register(&mut index, &mut collisions, canonical, canonical);
            for alias in aliases {
                register(&mut index, &mut collisions, alias, canonical);
            }
        }

        Self { index, collisions }
    }

    /// Resolves a raw name to its canonical city, or `None` when no mapping
    /// is known. `None` is a normal outcome, not an error: blank input and
    /// unregistered names both land here.
    ///
    /// Pure function of the immutable table; never panics for any input.
    pub fn normalize(&self, raw: &str) -> Option<&'static str> {
        if raw.trim().is_empty() {
            return None;
        }
        self.index.get(canonicalize(raw).as_str()).copied()
    }

    /// Aliases that were overwritten during index construction. Empty for a
    /// well-authored table.
    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    /// Number of distinct alias keys in the reverse index.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Canonical names in table order.
    pub fn canonical_names(&self) -> impl Iterator<Item = &'static str> {
        CITY_ALIASES.iter().map(|&(canonical, _)| canonical)
    }

    /// Canonical names paired with the number of aliases authored for each,
    /// in table order.
    pub fn catalog(&self) -> impl Iterator<Item = (&'static str, usize)> {
        CITY_ALIASES
            .iter()
            .map(|&(canonical, aliases)| (canonical, aliases.len()))
    }
}

impl Default for CityNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn register(
    index: &mut HashMap<String, &'static str>,
    collisions: &mut Vec<AliasCollision>,
    alias: &str,
    canonical: &'static str,
) {
    let key = canonicalize(alias);
    if let Some(previous) = index.insert(key.clone(), canonical) {
        if previous != canonical {
            collisions.push(AliasCollision {
                alias: key,
                kept: canonical,
                discarded: previous,
            });
        }
    }
}
