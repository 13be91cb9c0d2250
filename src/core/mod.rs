//! Core match types: players, roles, state, actions, RNG, configuration.
//!
//! The rules in `crate::rules` operate on these types; nothing here
//! decides whether an action is legal.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod role;
pub mod state;
pub mod view;

pub use action::{AbilityPayload, Action, ActionRecord};
pub use config::{MatchConfig, DEFAULT_GRACE_PERIOD_MS, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, InvalidAction, Rejection, SnapshotError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use role::Role;
pub use state::{MatchState, Phase, PlayerState};
pub use view::{DistrictCardView, PlayerView, SeatView};
