//! A scripted player and invariant checks, built on the public API only.

use std::collections::HashSet;

use rust_citadels::rules;
use rust_citadels::{
    AbilityPayload, Action, CardId, DistrictCategory, MatchState, Phase, PlayerId, Role,
};

/// Time the driver lets pass between its own actions.
pub const STEP_MS: u64 = 10;

/// A legal action for the current turn owner, chosen greedily: claim the
/// lowest open role, use income abilities, gather, build the cheapest
/// affordable district, then end the turn.
pub fn greedy_action(state: &MatchState, player: PlayerId) -> Action {
    if state.phase() == Phase::Drafting {
        let view = state.view_for(player).expect("seated player");
        return Action::SelectRole { role: view.claimable[0] };
    }

    let seat = state.player(player);

    if !state.pending(player).is_empty() {
        return Action::DrawCards { keep: Some(0) };
    }

    if !seat.ability_used {
        if let Some(payload) = greedy_ability(state, player) {
            return Action::UseAbility(payload);
        }
    }

    let buildable = buildable_cards(state, player);

    if !seat.gathered {
        if buildable.is_empty() && state.deck_len() > 0 {
            return Action::DrawCards { keep: None };
        }
        return Action::TakeCoins;
    }

    if seat.builds_this_turn < state.build_cap(player) {
        let cheapest = buildable
            .into_iter()
            .filter(|&(_, cost)| cost <= seat.coins)
            .min_by_key(|&(card, cost)| (cost, card));
        if let Some((card, _)) = cheapest {
            return Action::BuildDistrict { card };
        }
    }

    Action::EndTurn
}

fn greedy_ability(state: &MatchState, player: PlayerId) -> Option<AbilityPayload> {
    match state.role_of(player)? {
        Role::Assassin => Some(AbilityPayload::TargetRole(Role::Warlord)),
        Role::Thief => Some(AbilityPayload::TargetRole(Role::Merchant)),
        Role::Magician => None,
        Role::King | Role::Bishop | Role::Merchant | Role::Architect => Some(AbilityPayload::None),
        Role::Warlord => {
            let military = state
                .city(player)
                .iter()
                .filter_map(|&c| state.definition(c))
                .any(|d| d.category == DistrictCategory::Military);
            military.then_some(AbilityPayload::None)
        }
    }
}

/// Hand cards with their cost.
pub fn buildable_cards(state: &MatchState, player: PlayerId) -> Vec<(CardId, u32)> {
    state
        .hand(player)
        .iter()
        .filter_map(|&c| state.definition(c).map(|d| (c, d.cost)))
        .collect()
}

/// Drive the match with `greedy_action` and the timer. Panics if the
/// scripted player is ever rejected.
///
/// Returns the number of steps taken, stopping early after `max_steps`.
pub fn play_out(state: &mut MatchState, now: &mut u64, max_steps: usize) -> usize {
    for step in 0..max_steps {
        if state.is_finished() {
            return step;
        }
        step_once(state, now);
        assert_invariants(state);
    }
    max_steps
}

/// One greedy action, or one timer poll when nobody can act.
pub fn step_once(state: &mut MatchState, now: &mut u64) {
    match state.turn_owner() {
        Some(player) => {
            *now += STEP_MS;
            let action = greedy_action(state, player);
            if let Err(err) = rules::apply(state, player, &action, *now) {
                panic!("scripted {action:?} by {player} rejected: {err}");
            }
        }
        None => {
            *now += state.config().grace_period_ms;
            assert!(rules::tick(state, *now).is_some(), "stalled turn did not advance");
        }
    }
}

/// Structural invariants that must hold in every reachable state.
pub fn assert_invariants(state: &MatchState) {
    // Card conservation.
    let mut cards: Vec<CardId> = state.zones().deck().iter().copied().collect();
    for player in state.player_ids() {
        cards.extend(state.hand(player).iter().copied());
        cards.extend(state.city(player).iter().copied());
        cards.extend(state.pending(player).iter().copied());
    }
    cards.sort_unstable();
    let manifest: Vec<CardId> = (0..state.manifest_size() as u32).map(CardId::new).collect();
    assert_eq!(cards, manifest, "card conservation violated");

    // Role exclusivity.
    let held: Vec<Role> = state.player_ids().filter_map(|p| state.role_of(p)).collect();
    let distinct: HashSet<_> = held.iter().collect();
    assert_eq!(held.len(), distinct.len(), "role held twice: {held:?}");

    // Single turn owner.
    let owners = state.player_ids().filter(|&p| state.is_turn_owner(p)).count();
    assert!(owners <= 1, "{owners} turn owners");

    // Phase agrees with role assignment.
    let all_assigned = held.len() == state.player_count();
    assert_eq!(state.phase() == Phase::Drafting, !all_assigned);

    // Build budget.
    for player in state.player_ids() {
        assert!(state.player(player).builds_this_turn <= state.build_cap(player));
    }

    // Pool shape.
    let pool = state.pool();
    assert_eq!(pool.selectable().len(), 6);
    assert!(pool.is_selectable(Role::King));
    assert!(!pool.is_selectable(pool.removed()));
    assert!(!pool.is_selectable(pool.unavailable()));
    assert_ne!(pool.removed(), pool.unavailable());

    // Held roles come from this round's pool.
    for role in held {
        assert!(pool.is_selectable(role), "{role} held but not selectable");
    }
}
