//! Canonical match state.
//!
//! ## MatchState
//!
//! The single authoritative value every handler receives by reference:
//! - Configuration and the district manifest
//! - Card arena and zone lists (deck, hands, cities, pending draws)
//! - Per-player coins, role and per-turn counters
//! - Phase, role pointer, crown, round markers and the last-change stamp
//! - Accepted action history and, once finished, the outcome
//!
//! There is no ambient game object; the host owns a `MatchState` and passes
//! it into the rules functions.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::MatchConfig;
use super::error::{ConfigError, SnapshotError};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use super::role::Role;
use crate::cards::{CardId, CardInstance, DistrictCategory, DistrictDefinition, DistrictRegistry};
use crate::rules::pool::RoundPool;
use crate::rules::scoring::MatchOutcome;
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// Top-level phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players are claiming roles.
    Drafting,
    /// Roles act in rank order.
    Playing,
}

/// Per-player scalar state. Cards live in the `ZoneManager`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub coins: u32,

    /// Role claimed this round.
    pub role: Option<Role>,

    /// Districts built during the current turn.
    pub builds_this_turn: u8,

    /// Used the role ability this turn. Only blocks roles whose ability
    /// is once per turn.
    pub ability_used: bool,

    /// Took coins or drew cards this turn.
    pub gathered: bool,
}

impl PlayerState {
    fn new(coins: u32) -> Self {
        Self {
            coins,
            ..Self::default()
        }
    }

    /// Clear the per-turn counters.
    pub(crate) fn reset_turn(&mut self) {
        self.builds_this_turn = 0;
        self.ability_used = false;
        self.gathered = false;
    }
}

/// Full match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,
    districts: DistrictRegistry,
    arena: Vec<CardInstance>,

    pub(crate) zones: ZoneManager,
    pub(crate) players: PlayerMap<PlayerState>,

    pub(crate) phase: Phase,
    pub(crate) current_role: Role,
    pub(crate) crown_holder: PlayerId,
    pub(crate) last_change_ms: u64,
    pub(crate) assassinated: Option<Role>,
    pub(crate) stolen: Option<Role>,
    pub(crate) pool: RoundPool,

    /// Round number (starts at 1).
    pub(crate) round: u32,
    /// First player whose city reached the win length.
    pub(crate) first_completer: Option<PlayerId>,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) next_sequence: u32,
    pub(crate) outcome: Option<MatchOutcome>,

    pub(crate) rng: GameRng,
}

impl MatchState {
    /// Set up a match with the standard manifest.
    ///
    /// Shuffles the deck, deals starting hands, picks a random crown
    /// holder and drafts the first round's pool.
    pub fn new(config: MatchConfig, now_ms: u64) -> Result<Self, ConfigError> {
        Self::with_registry(config, DistrictRegistry::standard(), now_ms)
    }

    /// Set up a match with a custom manifest.
    pub fn with_registry(
        config: MatchConfig,
        districts: DistrictRegistry,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        config.validate(districts.manifest_size())?;

        let player_count = config.player_count;
        let mut rng = GameRng::new(config.seed);
        let arena = districts.instantiate();

        let mut zones = ZoneManager::new(player_count);
        for card in &arena {
            zones.place(card.id, Zone::Deck, ZonePosition::Bottom);
        }
        zones.shuffle_deck(&mut rng);
        for player in PlayerId::all(player_count) {
            zones.draw(Zone::Hand(player), config.starting_hand_size);
        }

        let crown_holder = PlayerId::new(rng.pick_index(player_count) as u8);
        let pool = RoundPool::draft(&mut rng);
        let players = PlayerMap::new(player_count, |_| PlayerState::new(config.starting_coins));

        Ok(Self {
            config,
            districts,
            arena,
            zones,
            players,
            phase: Phase::Drafting,
            current_role: Role::Assassin,
            crown_holder,
            last_change_ms: now_ms,
            assassinated: None,
            stolen: None,
            pool,
            round: 1,
            first_completer: None,
            history: Vector::new(),
            next_sequence: 0,
            outcome: None,
            rng,
        })
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn districts(&self) -> &DistrictRegistry {
        &self.districts
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// All seats in registration order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.players.contains(player)
    }

    // === Round state ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The role pointer.
    #[must_use]
    pub fn current_role(&self) -> Role {
        self.current_role
    }

    #[must_use]
    pub fn crown_holder(&self) -> PlayerId {
        self.crown_holder
    }

    #[must_use]
    pub fn last_change_ms(&self) -> u64 {
        self.last_change_ms
    }

    #[must_use]
    pub fn assassinated(&self) -> Option<Role> {
        self.assassinated
    }

    #[must_use]
    pub fn stolen(&self) -> Option<Role> {
        self.stolen
    }

    #[must_use]
    pub fn pool(&self) -> &RoundPool {
        &self.pool
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn first_completer(&self) -> Option<PlayerId> {
        self.first_completer
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    #[must_use]
    pub fn coins(&self, player: PlayerId) -> u32 {
        self.players[player].coins
    }

    #[must_use]
    pub fn role_of(&self, player: PlayerId) -> Option<Role> {
        self.players[player].role
    }

    /// The player holding `role` this round, if anyone.
    #[must_use]
    pub fn holder_of(&self, role: Role) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, state)| state.role == Some(role))
            .map(|(id, _)| id)
    }

    /// Builds allowed this turn: raised while holding the Architect.
    #[must_use]
    pub fn build_cap(&self, player: PlayerId) -> u8 {
        match self.players[player].role {
            Some(Role::Architect) => self.config.architect_build_cap,
            _ => self.config.base_build_cap,
        }
    }

    // === Cards ===

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<CardId> {
        self.zones.cards(Zone::Hand(player))
    }

    #[must_use]
    pub fn city(&self, player: PlayerId) -> &Vector<CardId> {
        self.zones.cards(Zone::City(player))
    }

    #[must_use]
    pub fn pending(&self, player: PlayerId) -> &Vector<CardId> {
        self.zones.cards(Zone::Pending(player))
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.zones.len(Zone::Deck)
    }

    /// Size of the fixed manifest. Cards across all zones always sum to this.
    #[must_use]
    pub fn manifest_size(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn card(&self, card: CardId) -> Option<&CardInstance> {
        self.arena.get(card.index())
    }

    /// Definition of the district a card is a copy of.
    #[must_use]
    pub fn definition(&self, card: CardId) -> Option<&DistrictDefinition> {
        self.card(card).and_then(|c| self.districts.get(c.kind))
    }

    /// Built districts of `category` in a player's city.
    #[must_use]
    pub fn count_in_city(&self, player: PlayerId, category: DistrictCategory) -> u32 {
        self.city(player)
            .iter()
            .filter_map(|&card| self.definition(card))
            .filter(|def| def.category == category)
            .count() as u32
    }

    // === Snapshots ===

    /// Encode the whole state for checkpointing.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a state encoded by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    // === Internal ===

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// Append an accepted action to the history.
    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.round, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(players: usize, seed: u64) -> MatchState {
        MatchState::new(MatchConfig::new(players).with_seed(seed), 1_000).unwrap()
    }

    #[test]
    fn test_setup_deals_starting_hands() {
        let state = state(4, 42);

        assert_eq!(state.player_count(), 4);
        assert_eq!(state.phase(), Phase::Drafting);
        assert_eq!(state.current_role(), Role::Assassin);
        assert_eq!(state.round(), 1);
        assert_eq!(state.last_change_ms(), 1_000);

        for player in state.player_ids() {
            assert_eq!(state.coins(player), 2);
            assert_eq!(state.hand(player).len(), 4);
            assert!(state.city(player).is_empty());
            assert_eq!(state.role_of(player), None);
        }
        assert_eq!(state.deck_len(), 46 - 16);
        assert_eq!(state.zones().total_cards(), state.manifest_size());
    }

    #[test]
    fn test_setup_rejects_bad_config() {
        let err = MatchState::new(MatchConfig::new(6), 0).unwrap_err();
        assert_eq!(err, ConfigError::PlayerCount(6));
    }

    #[test]
    fn test_same_seed_same_setup() {
        let a = state(3, 9);
        let b = state(3, 9);

        assert_eq!(a.deck_len(), b.deck_len());
        assert_eq!(a.zones().deck(), b.zones().deck());
        assert_eq!(a.crown_holder(), b.crown_holder());
        assert_eq!(a.pool(), b.pool());
        for player in a.player_ids() {
            assert_eq!(a.hand(player), b.hand(player));
        }
    }

    #[test]
    fn test_build_cap_follows_role() {
        let mut state = state(2, 1);
        let p0 = PlayerId::new(0);

        assert_eq!(state.build_cap(p0), 1);
        state.player_mut(p0).role = Some(Role::Architect);
        assert_eq!(state.build_cap(p0), 3);
        assert_eq!(state.holder_of(Role::Architect), Some(p0));
        assert_eq!(state.holder_of(Role::King), None);
    }

    #[test]
    fn test_definition_lookup() {
        let state = state(2, 1);
        let card = state.hand(PlayerId::new(0))[0];

        let def = state.definition(card).unwrap();
        assert_eq!(state.districts().get(def.kind), Some(def));
        assert!(state.definition(CardId::new(9_999)).is_none());
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut state = state(3, 5);
        state.record(PlayerId::new(1), Action::TakeCoins);

        let bytes = state.to_bytes().unwrap();
        let restored = MatchState::from_bytes(&bytes).unwrap();

        assert_eq!(restored.crown_holder(), state.crown_holder());
        assert_eq!(restored.zones().deck(), state.zones().deck());
        assert_eq!(restored.history(), state.history());
        assert_eq!(restored.rng.state(), state.rng.state());
        assert!(MatchState::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }
}
