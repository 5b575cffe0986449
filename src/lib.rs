//! # meadow-engine
//!
//! Rules engine for a seasonal worker-placement card game.
//!
//! Each player runs their own year from winter to autumn. On a turn they
//! take exactly one action: place a worker for resources or cards, buy a
//! card from the shared market, play a card from hand into their city, or
//! move on to the next season once every worker is placed. The game ends
//! when every player has finished autumn; the highest city score wins.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: a rejected action returns a [`GameError`]
//!    and leaves the game untouched.
//!
//! 2. **N-Player First**: seats are [`PlayerId`]s and per-seat data lives in
//!    a [`PlayerMap`]. Two players is the default, not an assumption.
//!
//! 3. **Reproducible**: the deck is shuffled by a seeded [`GameRng`], so a
//!    seed plus the action history replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Seats, resources, actions, errors, RNG, configuration
//! - `cards`: Card definitions, instances and the catalog
//! - `zones`: The shared deck and market
//! - `board`: Worker placement locations
//! - `player`: Per-player state and economy
//! - `synergy`: Free builds and passive triggers
//! - `rules`: `RulesEngine` trait, seasons, outcomes and results
//! - `game`: Setup, the turn controller and view snapshots
//!
//! ## Example
//!
//! ```
//! use meadow_engine::{Action, LocationId, RulesEngine, TurnController};
//!
//! let mut game = TurnController::new_game(42);
//! let outcome = game.submit(Action::PlaceWorker(LocationId::new(0))).unwrap();
//! assert_eq!(outcome.resources_gained().total(), 2);
//! assert_eq!(game.current_player(), outcome.next_player);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod player;
pub mod rules;
pub mod synergy;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameError, GameRng, InvariantError, PlayerId, PlayerMap, Resource,
    Resources, RulesConfig,
};

pub use crate::cards::{Card, CardCatalog, CardDefinition, CardId, CardKind, Tag, Trigger};

pub use crate::zones::{Deck, Market, Zone};

pub use crate::board::{Gain, Location, LocationId};

pub use crate::player::{Color, Payment, Player};

pub use crate::synergy::BonusEvent;

pub use crate::rules::{
    ActionOutcome, CardMove, FinalResult, GameResult, RulesEngine, Season, SeasonChange,
};

pub use crate::game::{GameBuilder, GamePhase, GameState, GameView, TurnController};
