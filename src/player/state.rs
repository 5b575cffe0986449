//! Per-player state and the player-local rules.
//!
//! `Player` owns one seat's resources, hand, city and worker budget. It
//! knows how to check and pay costs, run production and fire passive
//! triggers. Anything that needs the shared deck (drawing cards) is left
//! to the turn controller.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardDefinition};
use crate::core::{GameError, InvariantError, Resources, RulesConfig};
use crate::rules::{Season, SeasonTransition};
use crate::synergy::{self, BonusEvent, BonusEvents};

/// Display colour, as plain RGB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Seat colours in seat order.
    pub const SEATS: [Color; 4] = [
        Color(220, 80, 80),
        Color(80, 120, 220),
        Color(80, 180, 90),
        Color(220, 190, 60),
    ];
}

/// How a card was paid for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payment {
    /// A city card provided the required link symbol.
    Synergy,
    /// These resources were deducted.
    Resources(Resources),
}

impl Payment {
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, Payment::Synergy)
    }
}

/// One player's state.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub color: Color,
    pub resources: Resources,
    hand: Vec<Card>,
    city: Vec<Card>,
    season: Season,
    workers_total: u32,
    workers_available: u32,
    hand_limit: usize,
    city_limit: usize,
}

impl Player {
    /// A player in winter with the configured starting workers.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, config: &RulesConfig) -> Self {
        Self {
            name: name.into(),
            color,
            resources: Resources::new(),
            hand: Vec::new(),
            city: Vec::new(),
            season: Season::Winter,
            workers_total: config.starting_workers,
            workers_available: config.starting_workers,
            hand_limit: config.hand_limit,
            city_limit: config.city_limit,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn city(&self) -> &[Card] {
        &self.city
    }

    #[must_use]
    pub fn season(&self) -> Season {
        self.season
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.season.is_finished()
    }

    #[must_use]
    pub fn workers_total(&self) -> u32 {
        self.workers_total
    }

    #[must_use]
    pub fn workers_available(&self) -> u32 {
        self.workers_available
    }

    #[must_use]
    pub fn hand_has_room(&self) -> bool {
        self.hand.len() < self.hand_limit
    }

    #[must_use]
    pub fn city_has_room(&self) -> bool {
        self.city.len() < self.city_limit
    }

    /// Victory points: the sum over the city. Always recomputed.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.city.iter().map(|c| c.points).sum()
    }

    // === Economy ===

    /// True if `card` is a free build, or every cost amount is held.
    #[must_use]
    pub fn can_afford(&self, card: &CardDefinition) -> bool {
        synergy::is_free_build(self, card) || self.resources.covers(&card.cost)
    }

    /// Pay for `card`. Deducts nothing for a free build.
    ///
    /// Must follow a successful [`Player::can_afford`]; otherwise the
    /// pool is left untouched and an invariant error is returned.
    pub fn pay(&mut self, card: &CardDefinition) -> Result<Payment, InvariantError> {
        if synergy::is_free_build(self, card) {
            return Ok(Payment::Synergy);
        }
        if let Some((resource, needed, held)) = self.resources.first_shortfall(&card.cost) {
            return Err(InvariantError::InsufficientResources { resource, needed, held });
        }
        for (resource, amount) in card.cost.iter() {
            self.resources[resource] -= amount;
        }
        Ok(Payment::Resources(card.cost))
    }

    /// Add the benefit of every production card in the city. Returns
    /// whether any production card existed.
    pub fn activate_production(&mut self) -> bool {
        let mut produced = false;
        for card in self.city.iter().filter(|c| c.is_production()) {
            self.resources.add(&card.benefit);
            produced = true;
        }
        produced
    }

    /// Fire every passive card in the city whose trigger matches the tag
    /// of `played`, in city order.
    ///
    /// Resource rewards are applied here. `DrawCards` events are returned
    /// for the caller to resolve against the deck.
    pub fn apply_passive_triggers(&mut self, played: &CardDefinition) -> BonusEvents {
        let events: BonusEvents = synergy::matching_triggers(&self.city, played.tag)
            .flat_map(|(card, trigger)| synergy::trigger_events(&card.name, trigger))
            .collect();

        for event in &events {
            if let BonusEvent::Resource { resource, amount, .. } = event {
                self.resources[*resource] += amount;
            }
        }
        events
    }

    // === Cards ===

    /// Put a card into the hand.
    pub fn receive(&mut self, card: Card) -> Result<(), InvariantError> {
        if !self.hand_has_room() {
            return Err(InvariantError::HandOverflow { limit: self.hand_limit });
        }
        self.hand.push(card);
        Ok(())
    }

    /// Remove the hand card at `index`.
    pub fn take_from_hand(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::InvalidIndex {
                index,
                len: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Append a card to the city.
    pub fn build(&mut self, card: Card) -> Result<(), InvariantError> {
        if !self.city_has_room() {
            return Err(InvariantError::CityOverflow { limit: self.city_limit });
        }
        self.city.push(card);
        Ok(())
    }

    // === Workers and seasons ===

    /// Commit one worker.
    pub fn spend_worker(&mut self) -> Result<(), GameError> {
        if self.workers_available == 0 {
            return Err(GameError::NoWorkersAvailable);
        }
        self.workers_available -= 1;
        Ok(())
    }

    /// Move to the next season and reset the worker budget.
    ///
    /// Only the season and worker counts change here; the transition's
    /// extra effect is returned for the caller to apply.
    pub fn advance_season(&mut self) -> Result<SeasonTransition, GameError> {
        if self.workers_available > 0 {
            return Err(GameError::WorkersStillAvailable);
        }
        let transition = *self.season.transition().ok_or(GameError::GameOver)?;

        self.season = transition.to;
        self.workers_total = transition.workers.apply(self.workers_total);
        self.workers_available = self.workers_total;
        Ok(transition)
    }
}
