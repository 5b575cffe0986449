//! Shared card zones: the draw pile and the face-up market.
//!
//! Per-player zones (hand and city) live on [`crate::player::Player`].
//!
//! ## Key Types
//!
//! - `Deck`: Shuffled draw pile, top = end of sequence
//! - `Market`: Face-up cards bought by index and refilled from the deck
//! - `Zone`: Names a card location in action outcomes

pub mod deck;
pub mod market;

pub use deck::Deck;
pub use market::Market;

use serde::{Deserialize, Serialize};

/// Where a card sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Market,
    Hand,
    City,
}
