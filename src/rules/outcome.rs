//! What an accepted action changed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::engine::FinalResult;
use super::season::Season;
use crate::cards::CardId;
use crate::core::{Action, PlayerId, Resources};
use crate::synergy::BonusEvent;
use crate::zones::Zone;

/// One card changing zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMove {
    pub card: CardId,
    pub from: Zone,
    pub to: Zone,
}

/// A season transition taken by the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonChange {
    pub from: Season,
    pub to: Season,
    /// True if production ran and some production card existed.
    pub produced: bool,
}

/// State deltas from one accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The player who acted.
    pub player: PlayerId,

    pub action: Action,

    /// Acting player's resources before the action.
    pub resources_before: Resources,

    /// Acting player's resources after the action.
    pub resources_after: Resources,

    /// Cards moved, in the order they moved.
    pub cards_moved: SmallVec<[CardMove; 4]>,

    /// Passive triggers fired.
    pub bonuses: Vec<BonusEvent>,

    /// The bought card cost nothing thanks to a synergy link.
    pub paid_via_synergy: bool,

    pub season_change: Option<SeasonChange>,

    /// Player to act next. `None` when the game ended.
    pub next_player: Option<PlayerId>,

    /// Set when this action ended the game.
    pub result: Option<FinalResult>,
}

impl ActionOutcome {
    pub(crate) fn new(player: PlayerId, action: Action, resources: Resources) -> Self {
        Self {
            player,
            action,
            resources_before: resources,
            resources_after: resources,
            cards_moved: SmallVec::new(),
            bonuses: Vec::new(),
            paid_via_synergy: false,
            season_change: None,
            next_player: None,
            result: None,
        }
    }

    pub(crate) fn record_move(&mut self, card: CardId, from: Zone, to: Zone) {
        self.cards_moved.push(CardMove { card, from, to });
    }

    /// Resources the acting player ended up with beyond what they started with.
    #[must_use]
    pub fn resources_gained(&self) -> Resources {
        self.resources_after.saturating_sub(&self.resources_before)
    }

    /// Resources the acting player spent.
    #[must_use]
    pub fn resources_spent(&self) -> Resources {
        self.resources_before.saturating_sub(&self.resources_after)
    }

    /// Number of cards that reached the acting player's hand.
    #[must_use]
    pub fn cards_to_hand(&self) -> usize {
        self.cards_moved.iter().filter(|m| m.to == Zone::Hand).count()
    }
}
