//! Fixtures for rules unit tests.
//!
//! Helpers move cards with the zone manager so every fixture state still
//! satisfies card conservation.

use crate::cards::CardId;
use crate::core::config::MatchConfig;
use crate::core::player::PlayerId;
use crate::core::role::Role;
use crate::core::state::{MatchState, Phase};
use crate::zones::{Zone, ZonePosition};

pub const START_MS: u64 = 1_000;

pub fn new_match(players: usize, seed: u64) -> MatchState {
    new_match_with(MatchConfig::new(players).with_seed(seed))
}

pub fn new_match_with(config: MatchConfig) -> MatchState {
    MatchState::new(config, START_MS).expect("valid test config")
}

/// Hand out roles and enter the playing phase at the Assassin.
pub fn assign_roles(state: &mut MatchState, roles: &[(PlayerId, Role)]) {
    for &(player, role) in roles {
        state.players[player].role = Some(role);
    }
    state.phase = Phase::Playing;
    state.current_role = Role::Assassin;
}

/// Put the role pointer on `role` as if earlier turns had passed.
pub fn start_turn(state: &mut MatchState, role: Role) {
    state.phase = Phase::Playing;
    state.current_role = role;
}

/// Find a copy of `slug` outside any city and move it to the bottom of the
/// player's hand.
pub fn give_card(state: &mut MatchState, player: PlayerId, slug: &str) -> CardId {
    let kind = state
        .districts()
        .by_slug(slug)
        .unwrap_or_else(|| panic!("unknown district {slug}"))
        .kind;

    let card = (0..state.manifest_size() as u32)
        .map(CardId::new)
        .filter(|&c| state.card(c).is_some_and(|inst| inst.kind == kind))
        .find(|&c| {
            matches!(
                state.zones.zone_of(c),
                Some(Zone::Deck | Zone::Hand(_) | Zone::Pending(_))
            )
        })
        .unwrap_or_else(|| panic!("no free copy of {slug}"));

    state.zones.move_to(card, Zone::Hand(player), ZonePosition::Bottom);
    card
}

/// Place a copy of `slug` straight into the player's city.
pub fn build_into_city(state: &mut MatchState, player: PlayerId, slug: &str) -> CardId {
    let card = give_card(state, player, slug);
    state.zones.move_to(card, Zone::City(player), ZonePosition::Bottom);
    card
}

/// Move every card out of a player's hand to the deck bottom.
pub fn empty_hand(state: &mut MatchState, player: PlayerId) {
    let hand: Vec<_> = state.hand(player).iter().copied().collect();
    state.zones.return_to_bottom(&hand);
}

/// Card conservation across every zone.
pub fn assert_conserved(state: &MatchState) {
    let mut seen: Vec<CardId> = state.zones().deck().iter().copied().collect();
    for player in state.player_ids() {
        seen.extend(state.hand(player).iter().copied());
        seen.extend(state.city(player).iter().copied());
        seen.extend(state.pending(player).iter().copied());
    }
    seen.sort_unstable();
    let expected: Vec<CardId> = (0..state.manifest_size() as u32).map(CardId::new).collect();
    assert_eq!(seen, expected, "cards were created, lost or duplicated");
}
