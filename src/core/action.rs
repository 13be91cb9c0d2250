//! Action representation.
//!
//! The six requests a player can submit, plus the record kept in the match
//! history for every action that was accepted.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::role::Role;
use crate::cards::CardId;

/// A player request.
///
/// ```
/// use rust_citadels::core::{AbilityPayload, Action, Role};
///
/// let pick = Action::SelectRole { role: Role::Bishop };
/// let kill = Action::UseAbility(AbilityPayload::TargetRole(Role::King));
/// assert_ne!(pick, kill);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Claim a role during drafting.
    SelectRole { role: Role },
    /// Gain coins instead of drawing.
    TakeCoins,
    /// `keep: None` draws two cards into the pending buffer;
    /// `keep: Some(i)` keeps card `i` and returns the other.
    DrawCards { keep: Option<usize> },
    BuildDistrict { card: CardId },
    UseAbility(AbilityPayload),
    EndTurn,
}

impl Action {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectRole { .. } => "select_role",
            Action::TakeCoins => "take_coins",
            Action::DrawCards { .. } => "draw_cards",
            Action::BuildDistrict { .. } => "build_district",
            Action::UseAbility(_) => "use_ability",
            Action::EndTurn => "end_turn",
        }
    }
}

/// Argument of a role ability.
///
/// Which shape is valid depends on the caller's role; a mismatch is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityPayload {
    /// No target (income abilities, Warlord without demolition).
    #[default]
    None,
    /// Assassin and Thief.
    TargetRole(Role),
    /// Magician hand swap.
    TargetPlayer(PlayerId),
    /// Magician exchange with the deck. SmallVec optimizes for typical hand sizes.
    Exchange(SmallVec<[CardId; 4]>),
    /// Warlord demolition.
    TargetDistrict(CardId),
}

/// An accepted action with ordering metadata.
///
/// Used for the match history (replay and debugging).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,

    pub action: Action,

    /// Round the action was taken in (starts at 1).
    pub round: u32,

    /// Match-wide sequence number.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
