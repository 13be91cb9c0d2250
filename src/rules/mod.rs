//! Match rules.
//!
//! Every function here takes the `MatchState` it works on explicitly:
//! - `pool`: the per-round character draft
//! - `turn`: turn ownership and the single `advance` routine
//! - `abilities`: one resolution rule per role
//! - `gateway`: validation and application of player actions
//! - `timer`: polling auto-advance for stalled turns
//! - `scoring`: end-of-round scoring and win detection

pub mod abilities;
pub mod gateway;
pub mod pool;
pub mod scoring;
pub mod timer;
pub mod turn;

#[cfg(test)]
pub(crate) mod test_support;

pub use gateway::apply;
pub use pool::RoundPool;
pub use scoring::{GameResult, MatchOutcome};
pub use timer::{should_auto_advance, tick};
pub use turn::{advance, Advance};
