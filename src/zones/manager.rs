//! Zone manager for card locations and movement.
//!
//! Every card in the arena is in exactly one zone at all times: the shared
//! deck, or one player's hand, city or pending draw buffer. All movement
//! goes through `move_to`, which removes the card from its old ordered list
//! before appending it to the new one, so the multiset of cards across all
//! zones never changes after setup.
//!
//! The deck is ordered front = top. Draws take from the front; returned
//! cards go to the back.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;

/// Where a card currently lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand(PlayerId),
    City(PlayerId),
    /// Cards drawn by the first step of draw-two-keep-one.
    Pending(PlayerId),
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Front of the list (top of the deck).
    Top,
    /// Back of the list (bottom of the deck, newest in a hand or city).
    Bottom,
}

/// Tracks the location and order of every card.
///
/// ```
/// use rust_citadels::cards::CardId;
/// use rust_citadels::core::PlayerId;
/// use rust_citadels::zones::{Zone, ZoneManager, ZonePosition};
///
/// let mut zones = ZoneManager::new(2);
/// for i in 0..4 {
///     zones.place(CardId::new(i), Zone::Deck, ZonePosition::Bottom);
/// }
///
/// let drawn = zones.draw(Zone::Hand(PlayerId::new(0)), 3);
/// assert_eq!(drawn, vec![CardId::new(0), CardId::new(1), CardId::new(2)]);
///
/// zones.return_to_bottom(&[CardId::new(1)]);
/// assert_eq!(zones.deck().iter().copied().collect::<Vec<_>>(), vec![CardId::new(3), CardId::new(1)]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneManager {
    locations: FxHashMap<CardId, Zone>,
    deck: Vector<CardId>,
    hands: PlayerMap<Vector<CardId>>,
    cities: PlayerMap<Vector<CardId>>,
    pending: PlayerMap<Vector<CardId>>,
}

impl ZoneManager {
    /// Create empty zones for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            locations: FxHashMap::default(),
            deck: Vector::new(),
            hands: PlayerMap::with_default(player_count),
            cities: PlayerMap::with_default(player_count),
            pending: PlayerMap::with_default(player_count),
        }
    }

    fn list(&self, zone: Zone) -> &Vector<CardId> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand(p) => &self.hands[p],
            Zone::City(p) => &self.cities[p],
            Zone::Pending(p) => &self.pending[p],
        }
    }

    fn list_mut(&mut self, zone: Zone) -> &mut Vector<CardId> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand(p) => &mut self.hands[p],
            Zone::City(p) => &mut self.cities[p],
            Zone::Pending(p) => &mut self.pending[p],
        }
    }

    fn insert(&mut self, card: CardId, zone: Zone, position: ZonePosition) {
        self.locations.insert(card, zone);
        let list = self.list_mut(zone);
        match position {
            ZonePosition::Top => list.push_front(card),
            ZonePosition::Bottom => list.push_back(card),
        }
    }

    /// Place a new card during setup.
    ///
    /// Panics if the card is already tracked.
    pub fn place(&mut self, card: CardId, zone: Zone, position: ZonePosition) {
        if self.locations.contains_key(&card) {
            panic!("{card} already exists in zone manager");
        }
        self.insert(card, zone, position);
    }

    /// Move a card to another zone.
    ///
    /// Returns the old zone, or `None` if the card isn't tracked.
    pub fn move_to(&mut self, card: CardId, zone: Zone, position: ZonePosition) -> Option<Zone> {
        let old = self.locations.get(&card).copied()?;
        let list = self.list_mut(old);
        if let Some(idx) = list.index_of(&card) {
            list.remove(idx);
        }
        self.insert(card, zone, position);
        Some(old)
    }

    /// The zone a card is in.
    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    #[must_use]
    pub fn is_in(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &Vector<CardId> {
        self.list(zone)
    }

    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.list(zone).len()
    }

    // === Deck ===

    #[must_use]
    pub fn deck(&self) -> &Vector<CardId> {
        &self.deck
    }

    /// Move up to `count` cards from the top of the deck into `dest`.
    ///
    /// Returns fewer than `count` when the deck runs out.
    pub fn draw(&mut self, dest: Zone, count: usize) -> Vec<CardId> {
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            let Some(card) = self.deck.pop_front() else {
                break;
            };
            self.insert(card, dest, ZonePosition::Bottom);
            drawn.push(card);
        }
        drawn
    }

    /// Move cards, in order, to the bottom of the deck.
    pub fn return_to_bottom(&mut self, cards: &[CardId]) {
        for &card in cards {
            self.move_to(card, Zone::Deck, ZonePosition::Bottom);
        }
    }

    /// Shuffle the deck. Only used at setup.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardId> = self.deck.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.deck = cards.into_iter().collect();
    }

    // === Players ===

    /// Exchange two players' entire hands.
    pub fn swap_hands(&mut self, a: PlayerId, b: PlayerId) {
        if a == b {
            return;
        }
        let hand_a = std::mem::take(&mut self.hands[a]);
        let hand_b = std::mem::replace(&mut self.hands[b], hand_a);
        self.hands[a] = hand_b;

        for &card in &self.hands[a] {
            self.locations.insert(card, Zone::Hand(a));
        }
        for &card in &self.hands[b] {
            self.locations.insert(card, Zone::Hand(b));
        }
    }

    /// Total cards tracked, summed over every zone list.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let per_player = |map: &PlayerMap<Vector<CardId>>| map.values().map(Vector::len).sum::<usize>();
        self.deck.len() + per_player(&self.hands) + per_player(&self.cities) + per_player(&self.pending)
    }
}
