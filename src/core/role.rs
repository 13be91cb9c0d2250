//! The fixed roster of eight roles.
//!
//! Roles are drafted once per round and act in rank order. Ability
//! dispatch matches on this enum, so a new role cannot be added without
//! every resolver being updated.

use serde::{Deserialize, Serialize};

/// One of the eight fixed identities, ranked 1-8 by turn priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Assassin = 1,
    Thief = 2,
    Magician = 3,
    King = 4,
    Bishop = 5,
    Merchant = 6,
    Architect = 7,
    Warlord = 8,
}

impl Role {
    /// Every role in turn order.
    pub const ALL: [Role; 8] = [
        Role::Assassin,
        Role::Thief,
        Role::Magician,
        Role::King,
        Role::Bishop,
        Role::Merchant,
        Role::Architect,
        Role::Warlord,
    ];

    /// Turn priority (1 = first to act).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Look up a role by rank.
    ///
    /// ```
    /// use rust_citadels::core::Role;
    ///
    /// assert_eq!(Role::from_rank(4), Some(Role::King));
    /// assert_eq!(Role::from_rank(9), None);
    /// ```
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Role> {
        Role::ALL.get(usize::from(rank).checked_sub(1)?).copied()
    }

    /// The role acting after this one, or `None` after the Warlord.
    #[must_use]
    pub fn next(self) -> Option<Role> {
        Role::from_rank(self.rank() + 1)
    }

    /// Whether the ability is limited to one use per turn. The income
    /// roles and the Architect may use theirs again.
    #[must_use]
    pub const fn ability_once_per_turn(self) -> bool {
        match self {
            Role::Assassin | Role::Thief | Role::Magician | Role::Warlord => true,
            Role::King | Role::Bishop | Role::Merchant | Role::Architect => false,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Assassin => "Assassin",
            Role::Thief => "Thief",
            Role::Magician => "Magician",
            Role::King => "King",
            Role::Bishop => "Bishop",
            Role::Merchant => "Merchant",
            Role::Architect => "Architect",
            Role::Warlord => "Warlord",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Role::Assassin => "🗡️",
            Role::Thief => "🦹",
            Role::Magician => "🧙",
            Role::King => "👑",
            Role::Bishop => "⛪",
            Role::Merchant => "💰",
            Role::Architect => "🏗️",
            Role::Warlord => "⚔️",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.rank())
    }
}
