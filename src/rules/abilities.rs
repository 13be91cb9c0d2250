//! Role abilities.
//!
//! One rule per role, dispatched on the caller's role. Each rule checks its
//! whole payload before touching the state, so a rejection leaves nothing
//! half applied. The gateway has already checked phase, turn ownership and
//! the once-per-turn flag for the roles that have one.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{CardId, DistrictCategory};
use crate::core::action::AbilityPayload;
use crate::core::error::{ensure, InvalidAction, Rejection};
use crate::core::player::PlayerId;
use crate::core::role::Role;
use crate::core::state::MatchState;
use crate::zones::{Zone, ZonePosition};

/// Cards drawn by the Architect.
pub const ARCHITECT_DRAW: usize = 2;

/// Resolve `player`'s role ability and mark it used.
pub(crate) fn resolve(
    state: &mut MatchState,
    player: PlayerId,
    payload: &AbilityPayload,
) -> Result<(), InvalidAction> {
    let role = state.role_of(player).ok_or(Rejection::NoRole)?;

    match role {
        Role::Assassin => assassinate(state, payload)?,
        Role::Thief => steal(state, payload)?,
        Role::Magician => conjure(state, player, payload)?,
        Role::King => crown(state, player, payload)?,
        Role::Bishop => collect(state, player, payload, DistrictCategory::Religious, 0)?,
        Role::Merchant => collect(state, player, payload, DistrictCategory::Trade, 1)?,
        Role::Architect => plan(state, player, payload)?,
        Role::Warlord => raze(state, player, payload)?,
    }

    state.player_mut(player).ability_used = true;
    debug!(player = %player, role = %role, "Ability resolved");
    Ok(())
}

fn assassinate(state: &mut MatchState, payload: &AbilityPayload) -> Result<(), InvalidAction> {
    let AbilityPayload::TargetRole(target) = *payload else {
        return Err(Rejection::PayloadMismatch.into());
    };
    ensure(target != Role::Assassin, Rejection::InvalidTarget)?;

    state.assassinated = Some(target);
    Ok(())
}

fn steal(state: &mut MatchState, payload: &AbilityPayload) -> Result<(), InvalidAction> {
    let AbilityPayload::TargetRole(target) = *payload else {
        return Err(Rejection::PayloadMismatch.into());
    };
    ensure(target.rank() >= Role::Magician.rank(), Rejection::InvalidTarget)?;
    ensure(state.assassinated != Some(target), Rejection::InvalidTarget)?;

    state.stolen = Some(target);
    Ok(())
}

/// Magician: swap hands with another player, or exchange own cards with
/// the deck.
fn conjure(
    state: &mut MatchState,
    player: PlayerId,
    payload: &AbilityPayload,
) -> Result<(), InvalidAction> {
    match payload {
        AbilityPayload::TargetPlayer(target) => {
            let target = *target;
            ensure(state.has_player(target) && target != player, Rejection::InvalidTarget)?;

            state.zones.swap_hands(player, target);
            Ok(())
        }
        AbilityPayload::Exchange(cards) => {
            ensure(!cards.is_empty(), Rejection::NothingToDo)?;
            let mut seen: SmallVec<[CardId; 4]> = SmallVec::new();
            for &card in cards {
                ensure(!seen.contains(&card), Rejection::InvalidTarget)?;
                ensure(state.zones.is_in(card, Zone::Hand(player)), Rejection::CardNotInHand)?;
                seen.push(card);
            }

            state.zones.return_to_bottom(cards);
            state.zones.draw(Zone::Hand(player), cards.len());
            Ok(())
        }
        _ => Err(Rejection::PayloadMismatch.into()),
    }
}

fn crown(state: &mut MatchState, player: PlayerId, payload: &AbilityPayload) -> Result<(), InvalidAction> {
    ensure(*payload == AbilityPayload::None, Rejection::PayloadMismatch)?;

    state.crown_holder = player;
    let income = state.count_in_city(player, DistrictCategory::Noble);
    state.player_mut(player).coins += income;
    Ok(())
}

/// Income abilities: `base` coins plus one per district of `category`.
fn collect(
    state: &mut MatchState,
    player: PlayerId,
    payload: &AbilityPayload,
    category: DistrictCategory,
    base: u32,
) -> Result<(), InvalidAction> {
    ensure(*payload == AbilityPayload::None, Rejection::PayloadMismatch)?;

    let income = base + state.count_in_city(player, category);
    state.player_mut(player).coins += income;
    Ok(())
}

fn plan(state: &mut MatchState, player: PlayerId, payload: &AbilityPayload) -> Result<(), InvalidAction> {
    ensure(*payload == AbilityPayload::None, Rejection::PayloadMismatch)?;

    state.zones.draw(Zone::Hand(player), ARCHITECT_DRAW);
    Ok(())
}

/// Warlord: military income, then an optional demolition paid from the
/// updated balance.
fn raze(state: &mut MatchState, player: PlayerId, payload: &AbilityPayload) -> Result<(), InvalidAction> {
    let income = state.count_in_city(player, DistrictCategory::Military);

    match *payload {
        AbilityPayload::None => {
            ensure(income > 0, Rejection::NothingToDo)?;
            state.player_mut(player).coins += income;
            Ok(())
        }
        AbilityPayload::TargetDistrict(card) => {
            let Some(Zone::City(owner)) = state.zones.zone_of(card) else {
                return Err(Rejection::InvalidTarget.into());
            };
            ensure(!is_protected(state, owner), Rejection::ProtectedDistrict)?;

            let fee = state
                .definition(card)
                .map(|def| def.demolition_fee())
                .ok_or(Rejection::InvalidTarget)?;
            let funds = state.coins(player) + income;
            ensure(funds >= fee, Rejection::InsufficientCoins)?;

            state.player_mut(player).coins = funds - fee;
            state.zones.move_to(card, Zone::Deck, ZonePosition::Bottom);
            debug!(warlord = %player, owner = %owner, card = %card, fee, "District destroyed");
            Ok(())
        }
        _ => Err(Rejection::PayloadMismatch.into()),
    }
}

/// A city is out of the Warlord's reach once complete, or while its owner
/// is a living Bishop.
fn is_protected(state: &MatchState, owner: PlayerId) -> bool {
    let complete = state.city(owner).len() >= state.config().districts_to_win;
    let bishop = state.role_of(owner) == Some(Role::Bishop) && state.assassinated() != Some(Role::Bishop);
    complete || bishop
}
