//! Error types.
//!
//! `GameError` is what `submit` returns for a rejected action. Its user
//! variants leave the game untouched. `InvariantError` marks an engine bug
//! (paying without affordability, overflowing a cap) and is only produced
//! by internal operations whose preconditions the controller already
//! checked.

use thiserror::Error;

use super::player::PlayerId;
use super::resources::Resource;
use crate::board::LocationId;

/// Rejected action or internal failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no workers available this season")]
    NoWorkersAvailable,

    #[error("workers are still available; place them before changing season")]
    WorkersStillAvailable,

    #[error("{0} is already occupied")]
    LocationOccupied(LocationId),

    #[error("cannot afford this card")]
    CannotAfford,

    #[error("hand is full")]
    HandFull,

    #[error("city is full")]
    CityFull,

    #[error("index {index} out of range (len {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("action from {actual}, but it is {expected}'s turn")]
    ActionFromWrongPlayer { expected: PlayerId, actual: PlayerId },

    #[error("the game is over")]
    GameOver,

    #[error("engine invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl GameError {
    /// True for errors caused by player input. These never change state.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Invariant(_))
    }
}

/// Engine bug. Not reachable through action submission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("insufficient {resource}: need {needed}, hold {held}")]
    InsufficientResources { resource: Resource, needed: u32, held: u32 },

    #[error("hand would exceed its limit of {limit}")]
    HandOverflow { limit: usize },

    #[error("city would exceed its limit of {limit}")]
    CityOverflow { limit: usize },
}
