//! Turn control: who may act, and the single advance routine.
//!
//! `advance` is the only way the role pointer moves. Manual end-turn and
//! the auto-advance tick both call it, and it never rejects: callers check
//! preconditions first. Deferred effects are applied to the role that is
//! finishing, before the pointer moves:
//!
//! - theft: the stolen role's holder loses all coins to the Thief, unless
//!   that role was assassinated;
//! - crown: a living King takes the crown as their turn ends; an
//!   assassinated King's holder takes it only when the round wraps.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::pool::RoundPool;
use super::scoring;
use crate::core::player::PlayerId;
use crate::core::role::Role;
use crate::core::state::{MatchState, Phase};
use crate::zones::Zone;

/// What an `advance` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// The pointer moved to the next role in the same round.
    NextRole(Role),
    /// The round wrapped; drafting for this round number begins.
    NewRound(u32),
    /// The round wrapped and the match is over.
    MatchFinished,
}

impl MatchState {
    /// Drafting priority: the crown holder, then everyone else in
    /// registration order.
    ///
    /// Recomputed from the crown on every call rather than rotating a seat
    /// pointer.
    pub fn drafting_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        let crown = self.crown_holder;
        std::iter::once(crown).chain(self.player_ids().filter(move |&p| p != crown))
    }

    /// The single player allowed to act right now, if any.
    #[must_use]
    pub fn turn_owner(&self) -> Option<PlayerId> {
        if self.is_finished() {
            return None;
        }
        match self.phase {
            Phase::Drafting => self.drafting_order().find(|&p| self.players[p].role.is_none()),
            Phase::Playing => {
                if self.assassinated == Some(self.current_role) {
                    None
                } else {
                    self.holder_of(self.current_role)
                }
            }
        }
    }

    #[must_use]
    pub fn is_turn_owner(&self, player: PlayerId) -> bool {
        self.turn_owner() == Some(player)
    }

    /// Apply the finishing role's deferred effects.
    fn settle_finishing_role(&mut self, finishing: Role) {
        if self.assassinated == Some(finishing) {
            return;
        }
        let Some(holder) = self.holder_of(finishing) else {
            return;
        };

        if self.stolen == Some(finishing) {
            if let Some(thief) = self.holder_of(Role::Thief) {
                let loot = std::mem::take(&mut self.players[holder].coins);
                self.players[thief].coins += loot;
                info!(victim = %holder, thief = %thief, loot, "Theft resolved");
            }
        }

        if finishing == Role::King {
            self.crown_holder = holder;
            debug!(player = %holder, "Crown taken by King");
        }
    }

    /// Return any unresolved draw-two buffers to the deck bottom.
    fn return_pending_draws(&mut self) {
        for player in self.players.player_ids() {
            let pending: Vec<_> = self.zones.cards(Zone::Pending(player)).iter().copied().collect();
            self.zones.return_to_bottom(&pending);
        }
    }

    /// Close the round: deferred crown, scoring, and either finish or reset
    /// for the next draft.
    fn finish_round(&mut self) -> Advance {
        if self.assassinated == Some(Role::King) {
            if let Some(king) = self.holder_of(Role::King) {
                self.crown_holder = king;
                info!(player = %king, "Crown passes to assassinated King's holder");
            }
        }

        if let Some(outcome) = scoring::evaluate(self) {
            info!(round = self.round, result = ?outcome.result, "Match completed");
            self.outcome = Some(outcome);
            return Advance::MatchFinished;
        }

        self.phase = Phase::Drafting;
        self.current_role = Role::Assassin;
        self.assassinated = None;
        self.stolen = None;
        for (_, state) in self.players.iter_mut() {
            state.role = None;
        }
        self.pool = RoundPool::draft(&mut self.rng);
        self.round += 1;

        info!(round = self.round, crown = %self.crown_holder, "Advancing to next round");
        Advance::NewRound(self.round)
    }
}

/// End the current role's turn and move the pointer.
///
/// Shared by manual end-turn and the auto-advance tick. Never rejects.
pub fn advance(state: &mut MatchState, now_ms: u64) -> Advance {
    let finishing = state.current_role;

    state.settle_finishing_role(finishing);
    state.return_pending_draws();
    for (_, player) in state.players.iter_mut() {
        player.reset_turn();
    }

    let result = match finishing.next() {
        Some(next) => {
            state.current_role = next;
            debug!(role = %next, "Transition: next role");
            Advance::NextRole(next)
        }
        None => state.finish_round(),
    };

    state.last_change_ms = now_ms;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MatchConfig;
    use crate::rules::test_support::{assign_roles, build_into_city, new_match, new_match_with};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_drafting_order_starts_at_crown() {
        let mut state = new_match(3, 1);
        state.crown_holder = P1;

        let order: Vec<_> = state.drafting_order().collect();
        assert_eq!(order, vec![P1, P0, P2]);

        assert!(state.is_turn_owner(P1));
        state.players[P1].role = Some(Role::King);
        assert!(state.is_turn_owner(P0));
        assert!(!state.is_turn_owner(P1));
        state.players[P0].role = Some(Role::Thief);
        assert!(state.is_turn_owner(P2));
    }

    #[test]
    fn test_playing_owner_is_current_role_holder() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Thief), (P1, Role::King)]);

        state.current_role = Role::Thief;
        assert_eq!(state.turn_owner(), Some(P0));

        state.current_role = Role::Magician;
        assert_eq!(state.turn_owner(), None);

        state.current_role = Role::King;
        state.assassinated = Some(Role::King);
        assert_eq!(state.turn_owner(), None);
    }

    #[test]
    fn test_theft_transfers_when_victim_finishes() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Thief), (P1, Role::Merchant)]);
        state.players[P0].coins = 1;
        state.players[P1].coins = 6;
        state.stolen = Some(Role::Merchant);
        state.current_role = Role::Merchant;

        advance(&mut state, 10);

        assert_eq!(state.coins(P0), 7);
        assert_eq!(state.coins(P1), 0);
        assert_eq!(state.current_role(), Role::Architect);
    }

    #[test]
    fn test_assassination_pre_empts_theft() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Thief), (P1, Role::Bishop)]);
        state.players[P1].coins = 5;
        state.stolen = Some(Role::Bishop);
        state.assassinated = Some(Role::Bishop);
        state.current_role = Role::Bishop;

        advance(&mut state, 10);

        assert_eq!(state.coins(P1), 5);
        assert_eq!(state.coins(P0), 2);
    }

    #[test]
    fn test_king_takes_crown_when_turn_ends() {
        let mut state = new_match(2, 1);
        state.crown_holder = P0;
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        state.current_role = Role::King;

        advance(&mut state, 10);

        assert_eq!(state.crown_holder(), P1);
    }

    #[test]
    fn test_assassinated_king_gets_crown_at_round_end() {
        let mut state = new_match(2, 1);
        state.crown_holder = P0;
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        state.assassinated = Some(Role::King);
        state.current_role = Role::King;

        advance(&mut state, 10);
        assert_eq!(state.crown_holder(), P0);

        state.current_role = Role::Warlord;
        assert_eq!(advance(&mut state, 20), Advance::NewRound(2));
        assert_eq!(state.crown_holder(), P1);
    }

    #[test]
    fn test_wraparound_resets_round() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::Warlord)]);
        state.assassinated = Some(Role::Merchant);
        state.stolen = Some(Role::Warlord);
        state.current_role = Role::Warlord;
        let coins = state.coins(P1);

        let result = advance(&mut state, 55);

        assert_eq!(result, Advance::NewRound(2));
        assert_eq!(state.phase(), Phase::Drafting);
        assert_eq!(state.current_role(), Role::Assassin);
        assert_eq!(state.assassinated(), None);
        assert_eq!(state.stolen(), None);
        assert_eq!(state.role_of(P0), None);
        assert_eq!(state.role_of(P1), None);
        assert_eq!(state.last_change_ms(), 55);
        // No Thief held this round, so nothing moves.
        assert_eq!(state.coins(P1), coins);
    }

    #[test]
    fn test_advance_resets_turn_counters_and_pending() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        state.players[P0].builds_this_turn = 1;
        state.players[P0].ability_used = true;
        state.players[P0].gathered = true;
        state.zones.draw(Zone::Pending(P0), 2);
        let deck = state.deck_len();

        advance(&mut state, 10);

        assert_eq!(state.player(P0).builds_this_turn, 0);
        assert!(!state.player(P0).ability_used);
        assert!(!state.player(P0).gathered);
        assert!(state.pending(P0).is_empty());
        assert_eq!(state.deck_len(), deck + 2);
    }

    #[test]
    fn test_round_end_with_completed_city_finishes_match() {
        let mut state = new_match_with(MatchConfig::new(2).with_seed(1).with_districts_to_win(2));
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::Warlord)]);
        build_into_city(&mut state, P1, "tavern");
        build_into_city(&mut state, P1, "market");
        state.current_role = Role::Warlord;

        assert_eq!(advance(&mut state, 10), Advance::MatchFinished);
        assert!(state.is_finished());
        assert_eq!(state.turn_owner(), None);
        assert!(state.outcome().unwrap().result.is_winner(P1));
    }
}
