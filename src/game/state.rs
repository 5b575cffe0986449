//! Game state.
//!
//! `GameState` owns everything in one game: the seats, the shared deck
//! and market, the board, and the history. It is only mutated by the
//! [`TurnController`](super::TurnController); everything public here is a
//! side-effect-free read, valid at any time including after the game ends.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::{Location, LocationId};
use crate::cards::CardCatalog;
use crate::core::{ActionRecord, PlayerId, PlayerMap, RulesConfig};
use crate::player::Player;
use crate::rules::FinalResult;
use crate::zones::{Deck, Market};

/// Whether the game is still running.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress,
    /// Terminal. No further actions are accepted.
    Finished(FinalResult),
}

impl GamePhase {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::Finished(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<&FinalResult> {
        match self {
            GamePhase::Finished(result) => Some(result),
            GamePhase::InProgress => None,
        }
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(super) config: RulesConfig,
    pub(super) catalog: Arc<CardCatalog>,
    pub(super) players: PlayerMap<Player>,
    pub(super) current: PlayerId,
    pub(super) deck: Deck,
    pub(super) market: Market,
    pub(super) locations: Vec<Location>,
    pub(super) phase: GamePhase,
    /// Turn number (starts at 1).
    pub(super) turn: u32,
    pub(super) history: Vec<ActionRecord>,
    pub(super) seed: u64,
}

impl GameState {
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seat whose turn it is. After the game ends this is the last seat
    /// that acted.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.players[player].score()
    }

    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    #[must_use]
    pub fn result(&self) -> Option<&FinalResult> {
        self.phase.result()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every accepted action, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Seed the deck was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
