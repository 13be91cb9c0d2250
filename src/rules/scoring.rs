//! End-of-round scoring and win detection.
//!
//! The match ends when a round closes with at least one city at the win
//! length. Every player is then scored:
//!
//! - the summed build cost of their city;
//! - +3 when the city holds all five district categories;
//! - +4 for the first player to complete a city, +2 for any other player
//!   whose city is complete.

use serde::{Deserialize, Serialize};

use crate::cards::DistrictCategory;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::MatchState;

/// Bonus for a city covering every district category.
pub const DIVERSITY_BONUS: u32 = 3;

/// Bonus for the first player to complete a city.
pub const FIRST_COMPLETE_BONUS: u32 = 4;

/// Bonus for every other completed city.
pub const COMPLETE_BONUS: u32 = 2;

/// Result of a completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Shared victory on an unbreakable tie.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Final scores and result, reported once to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub scores: PlayerMap<u32>,
    pub result: GameResult,
}

/// Whether a player's city has reached the win length.
#[must_use]
pub fn has_completed_city(state: &MatchState, player: PlayerId) -> bool {
    state.city(player).len() >= state.config().districts_to_win
}

/// A player's score as it stands now.
#[must_use]
pub fn score_player(state: &MatchState, player: PlayerId) -> u32 {
    let mut score: u32 = state
        .city(player)
        .iter()
        .filter_map(|&card| state.definition(card))
        .map(|def| def.cost)
        .sum();

    if DistrictCategory::ALL
        .into_iter()
        .all(|category| state.count_in_city(player, category) > 0)
    {
        score += DIVERSITY_BONUS;
    }

    if state.first_completer() == Some(player) {
        score += FIRST_COMPLETE_BONUS;
    } else if has_completed_city(state, player) {
        score += COMPLETE_BONUS;
    }

    score
}

/// Score the match if a round just closed with a completed city.
///
/// Returns `None` while nobody has reached the win length.
#[must_use]
pub fn evaluate(state: &MatchState) -> Option<MatchOutcome> {
    if !state.player_ids().any(|p| has_completed_city(state, p)) {
        return None;
    }

    let scores = PlayerMap::new(state.player_count(), |p| score_player(state, p));

    // Highest score, then highest role rank held this round.
    let key = |p: PlayerId| (scores[p], state.role_of(p).map_or(0, |r| r.rank()));
    let best = state.player_ids().map(key).max()?;
    let mut leaders: Vec<PlayerId> = state.player_ids().filter(|&p| key(p) == best).collect();

    let result = if leaders.len() == 1 {
        GameResult::Winner(leaders.remove(0))
    } else {
        GameResult::Winners(leaders)
    };

    Some(MatchOutcome { scores, result })
}
