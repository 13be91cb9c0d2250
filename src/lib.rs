//! # rust-citadels
//!
//! A deterministic rules engine for a role-drafting city-building card
//! game in the style of Citadels.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One `MatchState` value is passed into every rules
//!    function. There is no global game object.
//!
//! 2. **Closed Roles**: The eight roles are an enum and ability dispatch is
//!    an exhaustive match, so adding a role breaks every site that must
//!    handle it.
//!
//! 3. **Card Conservation**: Cards are created once from the manifest and
//!    only ever move between zones through the `ZoneManager`.
//!
//! 4. **Polling Time**: Auto-advance is derived from the stored change
//!    timestamp on every tick. Replays and restored checkpoints behave
//!    identically.
//!
//! ## Modules
//!
//! - `core`: Players, roles, state, actions, errors, RNG, configuration, views
//! - `cards`: District definitions, instances and the manifest registry
//! - `zones`: Deck, hands, cities and pending draws
//! - `rules`: Drafting, turns, abilities, the action gateway, timer, scoring
//! - `host`: The `MatchHost` seam and `MatchSession`
//!
//! ## Example
//!
//! ```
//! use rust_citadels::{Action, MatchConfig, MatchState};
//! use rust_citadels::rules;
//!
//! let mut state = MatchState::new(MatchConfig::new(3).with_seed(1), 0).unwrap();
//!
//! // Draft: each turn owner claims the first open role.
//! while let Some(player) = state.turn_owner() {
//!     if state.phase() != rust_citadels::Phase::Drafting {
//!         break;
//!     }
//!     let role = state.view_for(player).unwrap().claimable[0];
//!     rules::apply(&mut state, player, &Action::SelectRole { role }, 0).unwrap();
//! }
//! assert_eq!(state.phase(), rust_citadels::Phase::Playing);
//! ```

pub mod cards;
pub mod core;
pub mod host;
pub mod rules;
pub mod zones;

pub use crate::core::{
    AbilityPayload, Action, ActionRecord, ConfigError, GameRng, GameRngState, InvalidAction, MatchConfig,
    MatchState, Phase, PlayerId, PlayerMap, PlayerState, PlayerView, Rejection, Role, SnapshotError,
};

pub use crate::cards::{CardId, CardInstance, DistrictCategory, DistrictDefinition, DistrictKind, DistrictRegistry};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::rules::{Advance, GameResult, MatchOutcome, RoundPool};

pub use crate::host::{MatchHost, MatchSession};
