//! Rules engine trait, season state machine and action outcomes.
//!
//! - `RulesEngine`: the call/response surface a game exposes
//! - `Season` and `TRANSITIONS`: the per-player season table
//! - `ActionOutcome`: the state deltas returned for an accepted action
//! - `GameResult` / `FinalResult`: how a finished game is scored

pub mod engine;
pub mod outcome;
pub mod season;

pub use engine::{FinalResult, GameResult, RulesEngine};
pub use outcome::{ActionOutcome, CardMove, SeasonChange};
pub use season::{Season, SeasonEffect, SeasonTransition, WorkerChange, TRANSITIONS};
