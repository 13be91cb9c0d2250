//! Per-round character pool.
//!
//! Each round one non-King role is removed face down and one more non-King
//! role is shown face up but cannot be picked. Players therefore know six
//! roles may be in play but never exactly which ones were taken.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::rng::GameRng;
use crate::core::role::Role;

/// Number of roles open for drafting each round.
pub const SELECTABLE_ROLES: usize = 6;

/// The outcome of one round's draft setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPool {
    selectable: SmallVec<[Role; SELECTABLE_ROLES]>,
    removed: Role,
    unavailable: Role,
}

impl RoundPool {
    /// Draw a fresh pool.
    ///
    /// ```
    /// use rust_citadels::core::{GameRng, Role};
    /// use rust_citadels::rules::RoundPool;
    ///
    /// let pool = RoundPool::draft(&mut GameRng::new(3));
    /// assert_eq!(pool.selectable().len(), 6);
    /// assert!(pool.is_selectable(Role::King));
    /// ```
    pub fn draft(rng: &mut GameRng) -> Self {
        let mut candidates: SmallVec<[Role; 7]> =
            Role::ALL.into_iter().filter(|&r| r != Role::King).collect();

        let removed = candidates.remove(rng.pick_index(candidates.len()));
        let unavailable = candidates.remove(rng.pick_index(candidates.len()));

        let selectable = Role::ALL
            .into_iter()
            .filter(|&r| r != removed && r != unavailable)
            .collect();

        Self {
            selectable,
            removed,
            unavailable,
        }
    }

    /// Roles open for drafting, in rank order.
    #[must_use]
    pub fn selectable(&self) -> &[Role] {
        &self.selectable
    }

    #[must_use]
    pub fn is_selectable(&self, role: Role) -> bool {
        self.selectable.contains(&role)
    }

    /// The face-down role. Hidden from players.
    #[must_use]
    pub fn removed(&self) -> Role {
        self.removed
    }

    /// The face-up role nobody may pick.
    #[must_use]
    pub fn unavailable(&self) -> Role {
        self.unavailable
    }
}
