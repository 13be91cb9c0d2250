//! Per-player redacted views.
//!
//! A `PlayerView` is what one seat is allowed to know: its own hand and
//! pending draw, everyone's coins and cities, other hand sizes, and the
//! roles that have been revealed so far. The face-down removed role never
//! appears. Roles are revealed as the role pointer reaches them, and all of
//! them once the match is over.

use serde::{Deserialize, Serialize};

use super::error::SnapshotError;
use super::player::PlayerId;
use super::role::Role;
use super::state::{MatchState, Phase};
use crate::cards::{CardId, DistrictCategory};
use crate::rules::scoring::MatchOutcome;

/// A district card as shown to a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictCardView {
    pub id: CardId,
    pub slug: String,
    pub name: String,
    pub category: DistrictCategory,
    pub cost: u32,
}

/// Public information about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub player: PlayerId,
    pub coins: u32,
    /// `None` while the role is still hidden from the viewer.
    pub role: Option<Role>,
    pub hand_size: usize,
    pub pending_size: usize,
    pub city: Vec<DistrictCardView>,
    pub has_crown: bool,
}

/// Everything one player may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub round: u32,
    pub phase: Phase,
    pub current_role: Role,
    pub turn_owner: Option<PlayerId>,
    pub is_my_turn: bool,
    pub crown_holder: PlayerId,
    pub assassinated: Option<Role>,
    pub stolen: Option<Role>,

    /// The six roles open this round.
    pub selectable: Vec<Role>,
    /// Roles the viewer may still claim. Only filled on the viewer's
    /// drafting turn.
    pub claimable: Vec<Role>,
    /// The face-up role nobody may pick.
    pub unavailable: Role,

    pub deck_size: usize,
    pub hand: Vec<DistrictCardView>,
    pub pending: Vec<DistrictCardView>,
    pub seats: Vec<SeatView>,
    pub outcome: Option<MatchOutcome>,
}

impl PlayerView {
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl MatchState {
    /// The redacted view for `viewer`, or `None` for an unknown seat.
    #[must_use]
    pub fn view_for(&self, viewer: PlayerId) -> Option<PlayerView> {
        if !self.has_player(viewer) {
            return None;
        }

        let turn_owner = self.turn_owner();
        let is_my_turn = turn_owner == Some(viewer);

        let claimable = if self.phase() == Phase::Drafting && is_my_turn {
            self.pool()
                .selectable()
                .iter()
                .copied()
                .filter(|&role| self.holder_of(role).is_none())
                .collect()
        } else {
            Vec::new()
        };

        let seats = self
            .player_ids()
            .map(|player| SeatView {
                player,
                coins: self.coins(player),
                role: self.role_of(player).filter(|&role| self.role_revealed(viewer, player, role)),
                hand_size: self.hand(player).len(),
                pending_size: self.pending(player).len(),
                city: self.card_views(self.city(player).iter().copied()),
                has_crown: self.crown_holder() == player,
            })
            .collect();

        Some(PlayerView {
            viewer,
            round: self.round(),
            phase: self.phase(),
            current_role: self.current_role(),
            turn_owner,
            is_my_turn,
            crown_holder: self.crown_holder(),
            assassinated: self.assassinated(),
            stolen: self.stolen(),
            selectable: self.pool().selectable().to_vec(),
            claimable,
            unavailable: self.pool().unavailable(),
            deck_size: self.deck_len(),
            hand: self.card_views(self.hand(viewer).iter().copied()),
            pending: self.card_views(self.pending(viewer).iter().copied()),
            seats,
            outcome: self.outcome().cloned(),
        })
    }

    fn role_revealed(&self, viewer: PlayerId, holder: PlayerId, role: Role) -> bool {
        viewer == holder
            || self.is_finished()
            || (self.phase() == Phase::Playing && self.current_role() >= role)
    }

    fn card_views(&self, cards: impl Iterator<Item = CardId>) -> Vec<DistrictCardView> {
        cards
            .filter_map(|id| {
                self.definition(id).map(|def| DistrictCardView {
                    id,
                    slug: def.slug.clone(),
                    name: def.name.clone(),
                    category: def.category,
                    cost: def.cost,
                })
            })
            .collect()
    }
}
