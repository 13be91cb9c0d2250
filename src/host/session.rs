//! A match bound to its host.

use tracing::{debug, info};

use crate::core::action::Action;
use crate::core::config::MatchConfig;
use crate::core::error::{ConfigError, InvalidAction};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::MatchState;
use crate::rules::{self, Advance};

/// Services the surrounding platform provides.
///
/// Implementations must be cheap to call; the session invokes them inline
/// after every change.
pub trait MatchHost {
    /// Current time in milliseconds. Only differences matter.
    fn now_ms(&self) -> u64;

    /// Called with the new state after every accepted action or advancing
    /// tick.
    fn broadcast(&mut self, state: &MatchState);

    /// Called once, when the match finishes.
    fn report_scores(&mut self, scores: &PlayerMap<u32>);
}

/// One running match and the host it talks to.
#[derive(Debug)]
pub struct MatchSession<H: MatchHost> {
    state: MatchState,
    host: H,
    scores_reported: bool,
}

impl<H: MatchHost> MatchSession<H> {
    /// Set up a match and broadcast the initial state.
    pub fn new(config: MatchConfig, mut host: H) -> Result<Self, ConfigError> {
        let state = MatchState::new(config, host.now_ms())?;
        info!(
            players = state.player_count(),
            seed = state.config().seed,
            crown = %state.crown_holder(),
            "Match created"
        );
        host.broadcast(&state);
        Ok(Self {
            state,
            host,
            scores_reported: false,
        })
    }

    /// Resume from a checkpoint. Scores are reported again only if the
    /// checkpoint was taken before the match finished.
    pub fn resume(state: MatchState, host: H) -> Self {
        let scores_reported = state.is_finished();
        Self {
            state,
            host,
            scores_reported,
        }
    }

    /// Submit a player action. On rejection nothing changes and nothing is
    /// broadcast.
    pub fn submit(&mut self, player: PlayerId, action: Action) -> Result<(), InvalidAction> {
        let now = self.host.now_ms();
        match rules::apply(&mut self.state, player, &action, now) {
            Ok(advance) => {
                debug!(player = %player, action = action.name(), ?advance, "Action accepted");
                self.after_change(advance);
                Ok(())
            }
            Err(err) => {
                debug!(player = %player, action = action.name(), reason = %err.reason, "Action rejected");
                Err(err)
            }
        }
    }

    /// Poll the auto-advance timer. Returns whether the turn moved.
    pub fn tick(&mut self) -> bool {
        let now = self.host.now_ms();
        match rules::tick(&mut self.state, now) {
            Some(advance) => {
                self.after_change(Some(advance));
                true
            }
            None => false,
        }
    }

    fn after_change(&mut self, advance: Option<Advance>) {
        if let Some(Advance::NewRound(round)) = advance {
            debug!(round, "Drafting opened");
        }
        self.host.broadcast(&self.state);

        if !self.scores_reported {
            if let Some(outcome) = self.state.outcome() {
                self.host.report_scores(&outcome.scores);
                self.scores_reported = true;
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Tear down the session, keeping the final state.
    pub fn into_state(self) -> MatchState {
        self.state
    }
}
