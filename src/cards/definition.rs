//! District definitions - static card data.
//!
//! `DistrictDefinition` holds the immutable properties shared by every copy
//! of a district (name, category, cost). Individual copies are
//! `CardInstance`s in the match arena.

use serde::{Deserialize, Serialize};

/// Identifier for a district definition ("Palace", "Tavern", ...).
///
/// This identifies the kind of district, not a specific copy in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DistrictKind(pub u16);

impl DistrictKind {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for DistrictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "District({})", self.0)
    }
}

/// District category. Role income and the diversity bonus key off it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictCategory {
    Noble,
    Religious,
    Trade,
    Military,
    Unique,
}

impl DistrictCategory {
    pub const ALL: [DistrictCategory; 5] = [
        DistrictCategory::Noble,
        DistrictCategory::Religious,
        DistrictCategory::Trade,
        DistrictCategory::Military,
        DistrictCategory::Unique,
    ];
}

/// Static district definition.
///
/// ```
/// use rust_citadels::cards::{DistrictCategory, DistrictDefinition, DistrictKind};
///
/// let palace = DistrictDefinition::new(DistrictKind::new(0), "palace", "Palace", DistrictCategory::Noble, 5);
/// assert_eq!(palace.cost, 5);
/// assert_eq!(palace.demolition_fee(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictDefinition {
    pub kind: DistrictKind,

    /// Stable lowercase key ("trading_post").
    pub slug: String,

    /// Display name.
    pub name: String,

    pub category: DistrictCategory,

    /// Coins needed to build it.
    pub cost: u32,
}

impl DistrictDefinition {
    #[must_use]
    pub fn new(
        kind: DistrictKind,
        slug: impl Into<String>,
        name: impl Into<String>,
        category: DistrictCategory,
        cost: u32,
    ) -> Self {
        Self {
            kind,
            slug: slug.into(),
            name: name.into(),
            category,
            cost,
        }
    }

    /// What the Warlord pays to destroy a built copy: `max(0, cost - 1)`.
    #[must_use]
    pub fn demolition_fee(&self) -> u32 {
        self.cost.saturating_sub(1)
    }
}
