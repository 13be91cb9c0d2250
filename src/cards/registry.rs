//! District registry: definitions plus copy counts.
//!
//! The registry is the fixed manifest of a match. `instantiate` turns it
//! into the card arena exactly once at setup; after that the set of cards
//! never changes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{DistrictCategory, DistrictDefinition, DistrictKind};
use super::instance::{CardId, CardInstance};

/// Registry of district definitions and how many copies of each exist.
///
/// ```
/// use rust_citadels::cards::{DistrictCategory, DistrictRegistry};
///
/// let mut registry = DistrictRegistry::new();
/// let tavern = registry.register("tavern", "Tavern", DistrictCategory::Trade, 1, 3);
///
/// assert_eq!(registry.get(tavern).map(|d| d.cost), Some(1));
/// assert_eq!(registry.manifest_size(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictRegistry {
    /// Indexed by `DistrictKind`.
    definitions: Vec<DistrictDefinition>,
    copies: Vec<u8>,
    by_slug: FxHashMap<String, DistrictKind>,
}

impl DistrictRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard manifest: fifteen classic districts in several copies
    /// plus five unique districts.
    #[must_use]
    pub fn standard() -> Self {
        use DistrictCategory::{Military, Noble, Religious, Trade, Unique};

        let mut registry = Self::new();
        for (slug, name, category, cost, copies) in [
            ("palace", "Palace", Noble, 5, 2),
            ("castle", "Castle", Noble, 4, 3),
            ("manor", "Manor", Noble, 3, 4),
            ("temple", "Temple", Religious, 2, 3),
            ("church", "Church", Religious, 3, 3),
            ("monastery", "Monastery", Religious, 3, 2),
            ("cathedral", "Cathedral", Religious, 5, 2),
            ("tavern", "Tavern", Trade, 1, 4),
            ("market", "Market", Trade, 2, 3),
            ("trading_post", "Trading Post", Trade, 2, 3),
            ("harbor", "Harbor", Trade, 4, 2),
            ("watchtower", "Watchtower", Military, 1, 3),
            ("prison", "Prison", Military, 2, 3),
            ("barracks", "Barracks", Military, 3, 2),
            ("fortress", "Fortress", Military, 5, 2),
            ("haunted_quarter", "Haunted Quarter", Unique, 2, 1),
            ("keep", "Keep", Unique, 3, 1),
            ("laboratory", "Laboratory", Unique, 5, 1),
            ("library", "Library", Unique, 6, 1),
            ("observatory", "Observatory", Unique, 4, 1),
        ] {
            registry.register(slug, name, category, cost, copies);
        }
        registry
    }

    /// Register a district with `copies` physical cards.
    ///
    /// Panics if the slug is already registered.
    pub fn register(
        &mut self,
        slug: &str,
        name: &str,
        category: DistrictCategory,
        cost: u32,
        copies: u8,
    ) -> DistrictKind {
        if self.by_slug.contains_key(slug) {
            panic!("District {slug:?} already registered");
        }
        let kind = DistrictKind::new(self.definitions.len() as u16);
        self.definitions
            .push(DistrictDefinition::new(kind, slug, name, category, cost));
        self.copies.push(copies);
        self.by_slug.insert(slug.to_string(), kind);
        kind
    }

    #[must_use]
    pub fn get(&self, kind: DistrictKind) -> Option<&DistrictDefinition> {
        self.definitions.get(usize::from(kind.raw()))
    }

    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&DistrictDefinition> {
        self.by_slug.get(slug).and_then(|&kind| self.get(kind))
    }

    /// Number of distinct districts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Total number of physical cards.
    #[must_use]
    pub fn manifest_size(&self) -> usize {
        self.copies.iter().map(|&c| usize::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DistrictDefinition> {
        self.definitions.iter()
    }

    /// Build the card arena: one instance per copy, ids assigned densely in
    /// registration order.
    #[must_use]
    pub fn instantiate(&self) -> Vec<CardInstance> {
        self.definitions
            .iter()
            .zip(&self.copies)
            .flat_map(|(def, &copies)| std::iter::repeat(def.kind).take(usize::from(copies)))
            .enumerate()
            .map(|(i, kind)| CardInstance::new(CardId::new(i as u32), kind))
            .collect()
    }
}
