//! Card instances - one entry per physical card in the match.
//!
//! Instances are created once from the manifest when the match starts and
//! are never created or destroyed afterwards. `CardId` is a stable index
//! into the arena; where a card currently lies is tracked by the
//! `ZoneManager`, not by the instance.

use serde::{Deserialize, Serialize};

use super::definition::DistrictKind;

/// Stable identifier of one physical district card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position in the card arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single copy of a district.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    pub id: CardId,
    pub kind: DistrictKind,
}

impl CardInstance {
    #[must_use]
    pub const fn new(id: CardId, kind: DistrictKind) -> Self {
        Self { id, kind }
    }
}
