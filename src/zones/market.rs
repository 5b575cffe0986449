//! The face-up market ("meadow").
//!
//! Cards are bought by index. After every purchase the market is topped
//! back up from the deck; once the deck runs dry it simply stays short.

use log::trace;

use super::deck::Deck;
use crate::cards::Card;
use crate::core::GameError;

/// Face-up purchasable cards.
#[derive(Clone, Debug, Default)]
pub struct Market {
    cards: Vec<Card>,
}

impl Market {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw from `deck` until the market holds `target_size` cards or the
    /// deck is empty. Returns how many cards were added.
    pub fn refill(&mut self, deck: &mut Deck, target_size: usize) -> usize {
        let mut added = 0;
        while self.cards.len() < target_size {
            let Some(card) = deck.draw_one() else { break };
            self.cards.push(card);
            added += 1;
        }
        if added > 0 {
            trace!("market refilled with {} card(s), {} showing", added, self.cards.len());
        }
        added
    }

    /// Card at `index`.
    pub fn get(&self, index: usize) -> Result<&Card, GameError> {
        self.cards.get(index).ok_or(GameError::InvalidIndex {
            index,
            len: self.cards.len(),
        })
    }

    /// Remove and return the card at `index`. Later cards shift down.
    pub fn take(&mut self, index: usize) -> Result<Card, GameError> {
        self.get(index)?;
        Ok(self.cards.remove(index))
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
