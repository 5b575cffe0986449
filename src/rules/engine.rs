//! Rules engine trait and game results.
//!
//! The presentation layer talks to a game only through `RulesEngine`:
//! ask for the legal moves, submit one, read the outcome, and stop once
//! a final result exists.

use serde::{Deserialize, Serialize};

use super::outcome::ActionOutcome;
use crate::core::{Action, GameError, PlayerId, PlayerMap, RulesConfig};

/// Who won.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single player with the strictly highest score.
    Winner(PlayerId),
    /// Top score shared.
    Draw,
}

impl GameResult {
    /// Decide the result from final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let best = scores.values().copied().max().unwrap_or(0);
        let mut leaders = scores.iter().filter(|(_, &s)| s == best).map(|(p, _)| p);
        match (leaders.next(), leaders.next()) {
            (Some(winner), None) => GameResult::Winner(winner),
            _ => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Final scores and the result derived from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    pub scores: PlayerMap<u32>,
    pub result: GameResult,
}

impl FinalResult {
    #[must_use]
    pub fn new(scores: PlayerMap<u32>) -> Self {
        let result = GameResult::from_scores(&scores);
        Self { scores, result }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: every action `submit` would accept right now;
///   empty once the game is over
/// - `submit`: acts for the current player; a rejected action must leave
///   the game unchanged
/// - `result`: `None` while the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Player to act, or `None` once the game is over.
    fn current_player(&self) -> Option<PlayerId>;

    /// Enumerate all legal actions for the current player.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply one action for the current player.
    fn submit(&mut self, action: Action) -> Result<ActionOutcome, GameError>;

    /// The final result, once every player has finished.
    fn result(&self) -> Option<&FinalResult>;

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.result().is_some()
    }
}
