//! Auto-advance by polling.
//!
//! The host calls `tick` on a fixed cadence. Whether to force an advance is
//! derived only from the stored state and the current time, so a restored
//! checkpoint behaves exactly like the live match. An advance stamps the
//! change time, which closes the window: repeated ticks inside one grace
//! period advance at most once.

use tracing::info;

use super::turn::{advance, Advance};
use crate::core::state::{MatchState, Phase};

/// Whether the current role's turn is stalled and its grace period is over.
///
/// A turn stalls when nobody can act in it (the role is unheld or its
/// holder was assassinated) or when the holder has used their whole build
/// budget.
#[must_use]
pub fn should_auto_advance(state: &MatchState, now_ms: u64) -> bool {
    if state.is_finished() || state.phase() != Phase::Playing {
        return false;
    }
    if now_ms.saturating_sub(state.last_change_ms()) < state.config().grace_period_ms {
        return false;
    }

    match state.turn_owner() {
        None => true,
        Some(owner) => state.player(owner).builds_this_turn >= state.build_cap(owner),
    }
}

/// Poll the timer; advances at most once.
pub fn tick(state: &mut MatchState, now_ms: u64) -> Option<Advance> {
    if !should_auto_advance(state, now_ms) {
        return None;
    }

    let role = state.current_role();
    let idle_ms = now_ms.saturating_sub(state.last_change_ms());
    let result = advance(state, now_ms);
    info!(role = %role, idle_ms, ?result, "Auto-advanced stalled turn");
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::config::DEFAULT_GRACE_PERIOD_MS;
    use crate::core::player::PlayerId;
    use crate::core::role::Role;
    use crate::rules::gateway::apply;
    use crate::rules::test_support::{assign_roles, give_card, new_match, start_turn, START_MS};

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const GRACE: u64 = DEFAULT_GRACE_PERIOD_MS;

    #[test]
    fn test_unheld_role_advances_after_grace() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        start_turn(&mut state, Role::Thief);

        assert_eq!(tick(&mut state, START_MS + GRACE - 1), None);
        assert_eq!(tick(&mut state, START_MS + GRACE), Some(Advance::NextRole(Role::Magician)));
        assert_eq!(state.last_change_ms(), START_MS + GRACE);
    }

    #[test]
    fn test_hundred_ticks_advance_once() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        start_turn(&mut state, Role::Thief);
        let first = START_MS + GRACE;

        let advances = (0..100u64)
            .filter(|&i| tick(&mut state, first + i).is_some())
            .count();

        assert_eq!(advances, 1);
        assert_eq!(state.current_role(), Role::Magician);
    }

    #[test]
    fn test_active_holder_is_not_hurried() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);

        assert!(!should_auto_advance(&state, START_MS + 10 * GRACE));
        assert_eq!(tick(&mut state, START_MS + 10 * GRACE), None);
        assert_eq!(state.current_role(), Role::Assassin);
    }

    #[test]
    fn test_holder_at_build_cap_is_advanced() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        let card = give_card(&mut state, P0, "tavern");
        apply(&mut state, P0, &Action::BuildDistrict { card }, START_MS + 500).unwrap();

        assert_eq!(tick(&mut state, START_MS + 500 + GRACE - 1), None);
        assert_eq!(
            tick(&mut state, START_MS + 500 + GRACE),
            Some(Advance::NextRole(Role::Thief))
        );
    }

    #[test]
    fn test_assassinated_role_is_skipped() {
        let mut state = new_match(2, 1);
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        state.assassinated = Some(Role::King);
        start_turn(&mut state, Role::King);

        assert!(should_auto_advance(&state, START_MS + GRACE));
    }

    #[test]
    fn test_no_ticks_while_drafting() {
        let mut state = new_match(2, 1);
        assert_eq!(tick(&mut state, START_MS + 100 * GRACE), None);
    }

    #[test]
    fn test_custom_grace_period() {
        use crate::core::config::MatchConfig;
        use crate::rules::test_support::new_match_with;

        let mut state = new_match_with(MatchConfig::new(2).with_seed(1).with_grace_period_ms(50));
        assign_roles(&mut state, &[(P0, Role::Assassin), (P1, Role::King)]);
        start_turn(&mut state, Role::Thief);

        assert!(tick(&mut state, START_MS + 50).is_some());
    }
}
