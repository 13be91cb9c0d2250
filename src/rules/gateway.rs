//! Action gateway.
//!
//! `apply` is the entry point for every player request. Each handler runs
//! all of its checks before the first mutation, so a rejected action leaves
//! the state exactly as it was. Accepted actions are appended to the
//! history.

use tracing::info;

use super::abilities;
use super::turn::{advance, Advance};
use crate::cards::CardId;
use crate::core::action::{AbilityPayload, Action};
use crate::core::error::{ensure, InvalidAction, Rejection};
use crate::core::player::PlayerId;
use crate::core::role::Role;
use crate::core::state::{MatchState, Phase};
use crate::zones::{Zone, ZonePosition};

/// Cards drawn by the first step of a draw.
pub const DRAW_COUNT: usize = 2;

/// Validate and apply one action.
///
/// Returns the turn transition when the action ended the turn.
///
/// ```
/// use rust_citadels::core::{Action, MatchConfig, MatchState, Role};
/// use rust_citadels::rules::apply;
///
/// let mut state = MatchState::new(MatchConfig::new(2).with_seed(5), 0).unwrap();
/// let first = state.turn_owner().unwrap();
///
/// apply(&mut state, first, &Action::SelectRole { role: Role::King }, 10).unwrap();
/// assert_eq!(state.role_of(first), Some(Role::King));
///
/// // Drafting again is someone else's turn.
/// assert!(apply(&mut state, first, &Action::SelectRole { role: Role::King }, 11).is_err());
/// ```
pub fn apply(
    state: &mut MatchState,
    player: PlayerId,
    action: &Action,
    now_ms: u64,
) -> Result<Option<Advance>, InvalidAction> {
    ensure(!state.is_finished(), Rejection::MatchFinished)?;
    ensure(state.has_player(player), Rejection::UnknownPlayer)?;

    match action {
        Action::SelectRole { role } => select_role(state, player, *role, now_ms)?,
        Action::TakeCoins => take_coins(state, player)?,
        Action::DrawCards { keep: None } => draw_cards(state, player)?,
        Action::DrawCards { keep: Some(index) } => keep_card(state, player, *index)?,
        Action::BuildDistrict { card } => build_district(state, player, *card, now_ms)?,
        Action::UseAbility(payload) => use_ability(state, player, payload)?,
        Action::EndTurn => {
            ensure_acting(state, player)?;
            state.record(player, action.clone());
            return Ok(Some(advance(state, now_ms)));
        }
    }

    state.record(player, action.clone());
    Ok(None)
}

/// Playing phase, and the caller owns the turn.
fn ensure_acting(state: &MatchState, player: PlayerId) -> Result<(), InvalidAction> {
    ensure(state.phase() == Phase::Playing, Rejection::WrongPhase)?;
    ensure(state.is_turn_owner(player), Rejection::NotTurnOwner)
}

fn select_role(state: &mut MatchState, player: PlayerId, role: Role, now_ms: u64) -> Result<(), InvalidAction> {
    ensure(state.phase() == Phase::Drafting, Rejection::WrongPhase)?;
    ensure(state.is_turn_owner(player), Rejection::NotTurnOwner)?;
    ensure(
        state.pool().is_selectable(role) && state.holder_of(role).is_none(),
        Rejection::RoleUnavailable,
    )?;

    state.player_mut(player).role = Some(role);

    if state.player_ids().all(|p| state.role_of(p).is_some()) {
        state.phase = Phase::Playing;
        state.current_role = Role::Assassin;
        state.last_change_ms = now_ms;
        info!(round = state.round(), "Drafting complete");
    }
    Ok(())
}

fn take_coins(state: &mut MatchState, player: PlayerId) -> Result<(), InvalidAction> {
    ensure_acting(state, player)?;
    ensure(!state.player(player).gathered, Rejection::AlreadyGathered)?;

    let amount = state.config().coins_per_take;
    let seat = state.player_mut(player);
    seat.coins += amount;
    seat.gathered = true;
    Ok(())
}

/// First step of a draw: up to two cards into the pending buffer.
fn draw_cards(state: &mut MatchState, player: PlayerId) -> Result<(), InvalidAction> {
    ensure_acting(state, player)?;
    ensure(!state.player(player).gathered, Rejection::AlreadyGathered)?;
    ensure(state.pending(player).is_empty(), Rejection::AlreadyGathered)?;
    ensure(state.deck_len() > 0, Rejection::DeckEmpty)?;

    state.zones.draw(Zone::Pending(player), DRAW_COUNT);
    state.player_mut(player).gathered = true;
    Ok(())
}

/// Second step of a draw: keep one pending card, return the rest.
fn keep_card(state: &mut MatchState, player: PlayerId, index: usize) -> Result<(), InvalidAction> {
    ensure_acting(state, player)?;
    let pending: Vec<CardId> = state.pending(player).iter().copied().collect();
    ensure(!pending.is_empty(), Rejection::NoPendingDraw)?;
    let kept = *pending.get(index).ok_or(Rejection::DrawIndexOutOfRange)?;

    state.zones.move_to(kept, Zone::Hand(player), ZonePosition::Bottom);
    let rest: Vec<CardId> = pending.into_iter().filter(|&c| c != kept).collect();
    state.zones.return_to_bottom(&rest);
    Ok(())
}

fn build_district(state: &mut MatchState, player: PlayerId, card: CardId, now_ms: u64) -> Result<(), InvalidAction> {
    ensure_acting(state, player)?;
    ensure(state.zones.is_in(card, Zone::Hand(player)), Rejection::CardNotInHand)?;
    let cost = state.definition(card).map(|def| def.cost).ok_or(Rejection::CardNotInHand)?;
    ensure(state.coins(player) >= cost, Rejection::InsufficientCoins)?;
    let cap = state.build_cap(player);
    ensure(state.player(player).builds_this_turn < cap, Rejection::BuildCapReached)?;

    let seat = state.player_mut(player);
    seat.coins -= cost;
    seat.builds_this_turn += 1;
    let at_cap = seat.builds_this_turn == cap;
    state.zones.move_to(card, Zone::City(player), ZonePosition::Bottom);

    // Reaching the cap arms the auto-advance grace window.
    if at_cap {
        state.last_change_ms = now_ms;
    }

    if state.first_completer().is_none() && state.city(player).len() >= state.config().districts_to_win {
        state.first_completer = Some(player);
        info!(player = %player, round = state.round(), "City completed");
    }
    Ok(())
}

fn use_ability(state: &mut MatchState, player: PlayerId, payload: &AbilityPayload) -> Result<(), InvalidAction> {
    ensure_acting(state, player)?;
    let role = state.role_of(player).ok_or(Rejection::NoRole)?;
    if role.ability_once_per_turn() {
        ensure(!state.player(player).ability_used, Rejection::AbilityAlreadyUsed)?;
    }
    abilities::resolve(state, player, payload)
}
