//! Owned, serializable snapshots of a game for presentation layers.

use serde::Serialize;

use super::state::{GamePhase, GameState};
use crate::board::LocationId;
use crate::cards::Card;
use crate::core::{PlayerId, Resources};
use crate::rules::Season;

/// One seat as seen from outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub season: Season,
    pub workers_total: u32,
    pub workers_available: u32,
    pub resources: Resources,
    /// Card names in hand order.
    pub hand: Vec<String>,
    /// Card names in build order.
    pub city: Vec<String>,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocationView {
    pub id: LocationId,
    pub name: String,
    pub occupant: Option<PlayerId>,
}

/// Everything a display needs, detached from the live game.
///
/// Two views compare equal exactly when nothing observable changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub turn: u32,
    /// `None` once the game is over.
    pub current_player: Option<PlayerId>,
    pub players: Vec<PlayerView>,
    pub market: Vec<String>,
    pub deck_remaining: usize,
    pub locations: Vec<LocationView>,
    /// Carries the final result once the game is over.
    pub phase: GamePhase,
}

impl GameView {
    pub(super) fn capture(state: &GameState) -> Self {
        let names =
            |cards: &[Card]| -> Vec<String> { cards.iter().map(|c| c.name.clone()).collect() };

        Self {
            turn: state.turn(),
            current_player: (!state.phase().is_finished()).then_some(state.current_player()),
            players: state
                .players()
                .values()
                .map(|p| PlayerView {
                    name: p.name.clone(),
                    season: p.season(),
                    workers_total: p.workers_total(),
                    workers_available: p.workers_available(),
                    resources: p.resources,
                    hand: names(p.hand()),
                    city: names(p.city()),
                    score: p.score(),
                })
                .collect(),
            market: names(state.market().cards()),
            deck_remaining: state.deck_remaining(),
            locations: state
                .locations()
                .iter()
                .map(|l| LocationView {
                    id: l.id,
                    name: l.name.clone(),
                    occupant: l.occupant,
                })
                .collect(),
            phase: state.phase().clone(),
        }
    }
}
