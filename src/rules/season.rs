//! Season state machine.
//!
//! Every player walks the same one-way path:
//! `Winter -> Spring -> Summer -> Autumn -> Finished`.
//! [`TRANSITIONS`] is the single table describing what each step does to
//! the worker budget and which extra effect fires.

use serde::{Deserialize, Serialize};

/// A player's season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    /// Terminal: the player takes no further actions.
    Finished,
}

impl Season {
    /// The transition out of this season, or `None` once finished.
    #[must_use]
    pub fn transition(self) -> Option<&'static SeasonTransition> {
        TRANSITIONS.iter().find(|t| t.from == self)
    }

    /// The season after this one.
    #[must_use]
    pub fn next(self) -> Option<Season> {
        self.transition().map(|t| t.to)
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self == Season::Finished
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Finished => "finished",
        })
    }
}

/// Change to `workers_total` on a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerChange {
    Add(u32),
    /// Set to zero.
    Retire,
}

impl WorkerChange {
    #[must_use]
    pub fn apply(self, total: u32) -> u32 {
        match self {
            WorkerChange::Add(n) => total + n,
            WorkerChange::Retire => 0,
        }
    }
}

/// Extra effect fired on entering a season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonEffect {
    None,
    /// Every production card in the city yields its benefit.
    Production,
    /// Draw the configured number of summer cards, up to the hand cap.
    DrawCards,
}

/// One row of the season table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTransition {
    pub from: Season,
    pub to: Season,
    pub workers: WorkerChange,
    pub effect: SeasonEffect,
}

/// The season table.
pub const TRANSITIONS: [SeasonTransition; 4] = [
    SeasonTransition {
        from: Season::Winter,
        to: Season::Spring,
        workers: WorkerChange::Add(1),
        effect: SeasonEffect::Production,
    },
    SeasonTransition {
        from: Season::Spring,
        to: Season::Summer,
        workers: WorkerChange::Add(1),
        effect: SeasonEffect::DrawCards,
    },
    SeasonTransition {
        from: Season::Summer,
        to: Season::Autumn,
        workers: WorkerChange::Add(2),
        effect: SeasonEffect::Production,
    },
    SeasonTransition {
        from: Season::Autumn,
        to: Season::Finished,
        workers: WorkerChange::Retire,
        effect: SeasonEffect::None,
    },
];
