//! Rules configuration.
//!
//! `RulesConfig` collects the numeric constants of the game: table size,
//! hand and city caps, market size, deck composition, and the worker
//! budget. The defaults are the standard two-player rules.

use serde::{Deserialize, Serialize};

/// Numeric rules constants.
///
/// ```
/// use meadow_engine::core::RulesConfig;
///
/// let config = RulesConfig::default().with_market_size(6);
/// assert_eq!(config.player_count, 2);
/// assert_eq!(config.hand_limit, 6);
/// assert_eq!(config.market_size, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Maximum cards in a hand.
    pub hand_limit: usize,

    /// Maximum cards in a city.
    pub city_limit: usize,

    /// Target number of face-up market cards.
    pub market_size: usize,

    /// Copies of every catalog entry in the deck.
    pub deck_copies: usize,

    /// Cards dealt to each hand at game start.
    pub starting_hand: usize,

    /// Workers available in winter.
    pub starting_workers: u32,

    /// Cards drawn on entering summer.
    pub summer_draw: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_limit: 6,
            city_limit: 15,
            market_size: 8,
            deck_copies: 4,
            starting_hand: 3,
            starting_workers: 2,
            summer_draw: 2,
        }
    }
}

impl RulesConfig {
    /// Set the number of seats.
    ///
    /// Panics unless `count` is in 2..=4.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!((2..=4).contains(&count), "Player count must be 2-4");
        self.player_count = count;
        self
    }

    /// Set the hand cap.
    #[must_use]
    pub fn with_hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Set the city cap.
    #[must_use]
    pub fn with_city_limit(mut self, limit: usize) -> Self {
        self.city_limit = limit;
        self
    }

    /// Set the market size.
    #[must_use]
    pub fn with_market_size(mut self, size: usize) -> Self {
        self.market_size = size;
        self
    }

    /// Set the number of copies per catalog entry.
    #[must_use]
    pub fn with_deck_copies(mut self, copies: usize) -> Self {
        self.deck_copies = copies;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand(mut self, cards: usize) -> Self {
        self.starting_hand = cards;
        self
    }

    /// Set the winter worker count.
    #[must_use]
    pub fn with_starting_workers(mut self, workers: u32) -> Self {
        self.starting_workers = workers;
        self
    }
}
