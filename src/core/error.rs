//! Error types.
//!
//! Every validation failure in the action path is an `InvalidAction`. The
//! `reason` names the rule that failed so hosts can log it, but callers are
//! expected to treat all of them the same way: the action was rejected and
//! nothing changed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which rule rejected an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    MatchFinished,
    UnknownPlayer,
    WrongPhase,
    NotTurnOwner,
    RoleUnavailable,
    NoRole,
    AlreadyGathered,
    NoPendingDraw,
    DeckEmpty,
    DrawIndexOutOfRange,
    CardNotInHand,
    InsufficientCoins,
    BuildCapReached,
    AbilityAlreadyUsed,
    InvalidTarget,
    ProtectedDistrict,
    PayloadMismatch,
    NothingToDo,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rejection::MatchFinished => "match is finished",
            Rejection::UnknownPlayer => "unknown player",
            Rejection::WrongPhase => "wrong phase",
            Rejection::NotTurnOwner => "not your turn",
            Rejection::RoleUnavailable => "role is not selectable",
            Rejection::NoRole => "no role assigned",
            Rejection::AlreadyGathered => "resources already gathered this turn",
            Rejection::NoPendingDraw => "no pending draw",
            Rejection::DeckEmpty => "deck is empty",
            Rejection::DrawIndexOutOfRange => "draw index out of range",
            Rejection::CardNotInHand => "card not in hand",
            Rejection::InsufficientCoins => "insufficient coins",
            Rejection::BuildCapReached => "build limit reached",
            Rejection::AbilityAlreadyUsed => "ability already used",
            Rejection::InvalidTarget => "invalid target",
            Rejection::ProtectedDistrict => "district is protected",
            Rejection::PayloadMismatch => "payload does not fit this role",
            Rejection::NothingToDo => "ability has no effect",
        };
        f.write_str(text)
    }
}

/// A rejected action. The state is untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[error("invalid action: {reason}")]
pub struct InvalidAction {
    pub reason: Rejection,
}

impl From<Rejection> for InvalidAction {
    fn from(reason: Rejection) -> Self {
        Self { reason }
    }
}

/// Fail with `reason` unless `condition` holds.
pub(crate) fn ensure(condition: bool, reason: Rejection) -> Result<(), InvalidAction> {
    if condition {
        Ok(())
    } else {
        Err(reason.into())
    }
}

/// Match configuration that cannot produce a playable match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count {0} outside supported range {min}..={max}", min = crate::core::config::MIN_PLAYERS, max = crate::core::config::MAX_PLAYERS)]
    PlayerCount(usize),
    #[error("districts_to_win must be at least 1")]
    ZeroWinLength,
    #[error("build caps must satisfy 1 <= base ({base}) <= architect ({architect})")]
    BuildCaps { base: u8, architect: u8 },
    #[error("dealing {needed} cards needs more than the {available} in the manifest")]
    NotEnoughCards { needed: usize, available: usize },
}

/// Snapshot encoding failures.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_converts_into_invalid_action() {
        let err: InvalidAction = Rejection::NotTurnOwner.into();
        assert_eq!(err.reason, Rejection::NotTurnOwner);
        assert_eq!(err.to_string(), "invalid action: not your turn");
    }

    #[test]
    fn test_ensure() {
        assert!(ensure(true, Rejection::WrongPhase).is_ok());
        assert_eq!(
            ensure(false, Rejection::WrongPhase),
            Err(InvalidAction { reason: Rejection::WrongPhase })
        );
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::PlayerCount(9).to_string(),
            "player count 9 outside supported range 2..=4"
        );
    }
}
