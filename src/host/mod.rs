//! Host integration.
//!
//! The engine itself has no clock, transport or score storage. A host
//! supplies them through `MatchHost`, and `MatchSession` serializes player
//! actions and timer ticks into the one mutation stream the rules expect.

pub mod session;

pub use session::{MatchHost, MatchSession};
