//! Match configuration.
//!
//! Hosts build a `MatchConfig` at setup and hand it to `MatchState::new`.
//! Defaults reproduce the standard table rules; tests and variants
//! override individual values through the builder methods.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest players a match supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a match supports.
pub const MAX_PLAYERS: usize = 4;

/// Idle time after which a stalled turn is force-advanced.
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 3_000;

/// Complete match configuration.
///
/// ```
/// use rust_citadels::core::MatchConfig;
///
/// let config = MatchConfig::new(3)
///     .with_seed(7)
///     .with_districts_to_win(6);
///
/// assert_eq!(config.player_count, 3);
/// assert_eq!(config.districts_to_win, 6);
/// assert!(config.validate(46).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Seed for the match RNG (deck shuffle, crown, drafts).
    pub seed: u64,

    pub starting_coins: u32,

    pub starting_hand_size: usize,

    /// Coins granted by the take-coins action.
    pub coins_per_take: u32,

    /// City size that ends the match at the close of the round.
    pub districts_to_win: usize,

    pub grace_period_ms: u64,

    /// Builds allowed per turn without the Architect.
    pub base_build_cap: u8,

    /// Builds allowed per turn while holding the Architect.
    pub architect_build_cap: u8,
}

impl MatchConfig {
    /// Create a configuration with standard rules.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: 0,
            starting_coins: 2,
            starting_hand_size: 4,
            coins_per_take: 2,
            districts_to_win: 7,
            grace_period_ms: DEFAULT_GRACE_PERIOD_MS,
            base_build_cap: 1,
            architect_build_cap: 3,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_districts_to_win(mut self, count: usize) -> Self {
        self.districts_to_win = count;
        self
    }

    #[must_use]
    pub fn with_grace_period_ms(mut self, grace_ms: u64) -> Self {
        self.grace_period_ms = grace_ms;
        self
    }

    /// Check the configuration against a manifest of `manifest_size` cards.
    pub fn validate(&self, manifest_size: usize) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.districts_to_win == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        if self.base_build_cap == 0 || self.base_build_cap > self.architect_build_cap {
            return Err(ConfigError::BuildCaps {
                base: self.base_build_cap,
                architect: self.architect_build_cap,
            });
        }
        let needed = self.starting_hand_size * self.player_count;
        if needed > manifest_size {
            return Err(ConfigError::NotEnoughCards {
                needed,
                available: manifest_size,
            });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(MIN_PLAYERS)
    }
}
