//! Player actions and action history.
//!
//! An `Action` is one complete move by the current player. Every accepted
//! action ends that player's turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::LocationId;

/// One move submitted by the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Send a worker to a board location and collect its reward.
    PlaceWorker(LocationId),
    /// Pay for a market card and take it into hand.
    BuyFromMarket(usize),
    /// Move a card from hand into the city.
    PlayFromHand(usize),
    /// Advance to the next season once all workers are placed.
    PrepareSeason,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceWorker(loc) => write!(f, "place worker at {}", loc),
            Action::BuyFromMarket(i) => write!(f, "buy market card {}", i),
            Action::PlayFromHand(i) => write!(f, "play hand card {}", i),
            Action::PrepareSeason => f.write_str("prepare season"),
        }
    }
}

/// An accepted action, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self { player, action, turn }
    }
}
