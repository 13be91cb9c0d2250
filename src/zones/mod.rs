//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, or a player's hand, city or pending draw buffer
//! - `ZonePosition`: Top or bottom insertion
//! - `ZoneManager`: Card location tracking, movement and deck operations

pub mod manager;

pub use manager::{Zone, ZoneManager, ZonePosition};
