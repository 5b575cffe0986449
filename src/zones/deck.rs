//! Shared draw pile.
//!
//! The top of the deck is the end of the backing `Vec`. An exhausted deck
//! is not an error: `draw_one` returns `None` and callers grant fewer
//! cards.

use std::sync::Arc;

use log::trace;

use crate::cards::{Card, CardCatalog};
use crate::core::GameRng;

/// Ordered draw pile.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a shuffled deck of `copies` of every catalog definition.
    ///
    /// ```
    /// use meadow_engine::cards::CardCatalog;
    /// use meadow_engine::core::GameRng;
    /// use meadow_engine::zones::Deck;
    ///
    /// let deck = Deck::build(&CardCatalog::standard(), 4, &mut GameRng::new(1));
    /// assert_eq!(deck.len(), 44);
    /// ```
    #[must_use]
    pub fn build(catalog: &CardCatalog, copies: usize, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = catalog
            .all_definitions()
            .iter()
            .flat_map(|def| std::iter::repeat_with(move || Card::new(Arc::clone(def))).take(copies))
            .collect();
        rng.shuffle(&mut cards);
        trace!("built deck of {} cards", cards.len());
        Self { cards }
    }

    /// A deck in exactly the given order (last element drawn first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the top card, or `None` when empty.
    pub fn draw_one(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if let Some(card) = &card {
            trace!("drew {} ({} left)", card.name, self.cards.len());
        }
        card
    }

    /// Cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
