//! Turn controller: action validation, dispatch, and turn rotation.
//!
//! Every handler validates all of its preconditions before touching
//! state, so a rejected action leaves the game exactly as it was. Every
//! accepted action ends the acting player's turn.

use log::{debug, info, warn};

use super::builder::GameBuilder;
use super::state::{GamePhase, GameState};
use super::view::GameView;
use crate::board::{Gain, LocationId};
use crate::cards::Tag;
use crate::core::{Action, ActionRecord, GameError, PlayerId, RulesConfig};
use crate::rules::{ActionOutcome, FinalResult, RulesEngine, SeasonChange, SeasonEffect};
use crate::synergy::{self, BonusEvent};
use crate::zones::Zone;

/// Owns one game and applies actions to it.
#[derive(Clone, Debug)]
pub struct TurnController {
    state: GameState,
}

impl TurnController {
    /// A standard game shuffled with `seed`.
    #[must_use]
    pub fn new_game(seed: u64) -> Self {
        GameBuilder::new().seed(seed).build()
    }

    /// A standard game shuffled from OS entropy.
    #[must_use]
    pub fn new_game_from_entropy() -> Self {
        GameBuilder::new().build()
    }

    pub(super) fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Read-only game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot for presentation.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::capture(&self.state)
    }

    /// Name of the first city card that would reward the current player
    /// for playing a card tagged `tag`.
    #[must_use]
    pub fn potential_bonus_source(&self, tag: Tag) -> Option<&str> {
        synergy::potential_bonus_source(&self.state.players[self.state.current], tag)
    }

    /// Submit an action on behalf of `player`.
    ///
    /// Rejects the action if `player` is not the current player.
    pub fn submit_as(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, GameError> {
        if self.state.phase.is_finished() {
            return Err(GameError::GameOver);
        }
        if player != self.state.current {
            return Err(GameError::ActionFromWrongPlayer {
                expected: self.state.current,
                actual: player,
            });
        }
        self.submit(action)
    }

    // === Action handlers ===

    fn place_worker(
        &mut self,
        seat: PlayerId,
        id: LocationId,
        outcome: &mut ActionOutcome,
    ) -> Result<(), GameError> {
        let location = self.state.locations.get(id.index()).ok_or(GameError::InvalidIndex {
            index: id.index(),
            len: self.state.locations.len(),
        })?;
        if self.state.players[seat].workers_available() == 0 {
            return Err(GameError::NoWorkersAvailable);
        }
        if !location.is_open() {
            return Err(GameError::LocationOccupied(id));
        }
        let gain = location.gain;
        let exclusive = location.exclusive;

        self.state.players[seat].spend_worker()?;
        if exclusive {
            self.state.locations[id.index()].occupant = Some(seat);
        }
        match gain {
            Gain::Resources(resources) => self.state.players[seat].resources.add(&resources),
            Gain::Cards(count) => {
                self.draw_into_hand(seat, count as usize, outcome)?;
            }
        }

        debug!(
            "{} placed a worker at {} ({} left)",
            self.state.players[seat].name,
            self.state.locations[id.index()].name,
            self.state.players[seat].workers_available()
        );
        Ok(())
    }

    fn buy_from_market(
        &mut self,
        seat: PlayerId,
        index: usize,
        outcome: &mut ActionOutcome,
    ) -> Result<(), GameError> {
        let card = self.state.market.get(index)?.clone();
        let player = &self.state.players[seat];
        if !player.hand_has_room() {
            return Err(GameError::HandFull);
        }
        if !player.can_afford(&card) {
            return Err(GameError::CannotAfford);
        }

        let payment = self.state.players[seat].pay(&card)?;
        self.state.market.take(index)?;
        outcome.paid_via_synergy = payment.is_free();
        outcome.record_move(card.id, Zone::Market, Zone::Hand);
        debug!(
            "{} bought {}{}",
            self.state.players[seat].name,
            card.name,
            if payment.is_free() { " (free via synergy)" } else { "" }
        );
        self.state.players[seat].receive(card)?;

        let before = self.state.market.len();
        let added = self.state.market.refill(&mut self.state.deck, self.state.config.market_size);
        for card in &self.state.market.cards()[before..before + added] {
            outcome.record_move(card.id, Zone::Deck, Zone::Market);
        }
        Ok(())
    }

    fn play_from_hand(
        &mut self,
        seat: PlayerId,
        index: usize,
        outcome: &mut ActionOutcome,
    ) -> Result<(), GameError> {
        let player = &self.state.players[seat];
        if index >= player.hand().len() {
            return Err(GameError::InvalidIndex {
                index,
                len: player.hand().len(),
            });
        }
        if !player.city_has_room() {
            return Err(GameError::CityFull);
        }

        let card = self.state.players[seat].take_from_hand(index)?;
        let bonuses = self.state.players[seat].apply_passive_triggers(&card);
        for bonus in &bonuses {
            if let BonusEvent::DrawCards { count, .. } = bonus {
                self.draw_into_hand(seat, *count as usize, outcome)?;
            }
        }

        outcome.record_move(card.id, Zone::Hand, Zone::City);
        debug!(
            "{} played {} ({} bonus event(s))",
            self.state.players[seat].name,
            card.name,
            bonuses.len()
        );
        outcome.bonuses.extend(bonuses);

        let player = &mut self.state.players[seat];
        let benefit = card.is_production().then_some(card.benefit);
        player.build(card)?;
        if let Some(benefit) = benefit {
            player.resources.add(&benefit);
        }
        Ok(())
    }

    fn prepare_season(
        &mut self,
        seat: PlayerId,
        outcome: &mut ActionOutcome,
    ) -> Result<(), GameError> {
        let transition = self.state.players[seat].advance_season()?;

        for location in self.state.locations.iter_mut().filter(|l| l.occupant == Some(seat)) {
            location.occupant = None;
        }

        let produced = match transition.effect {
            SeasonEffect::Production => self.state.players[seat].activate_production(),
            SeasonEffect::DrawCards => {
                self.draw_into_hand(seat, self.state.config.summer_draw, outcome)?;
                false
            }
            SeasonEffect::None => false,
        };

        outcome.season_change = Some(SeasonChange {
            from: transition.from,
            to: transition.to,
            produced,
        });
        info!(
            "{} enters {} with {} workers{}",
            self.state.players[seat].name,
            transition.to,
            self.state.players[seat].workers_total(),
            if produced { ", production ran" } else { "" }
        );
        Ok(())
    }

    /// Draw up to `count` cards into a hand, stopping at the hand cap or
    /// an empty deck. Returns how many were drawn.
    fn draw_into_hand(
        &mut self,
        seat: PlayerId,
        count: usize,
        outcome: &mut ActionOutcome,
    ) -> Result<usize, GameError> {
        for drawn in 0..count {
            if !self.state.players[seat].hand_has_room() {
                warn!(
                    "{}: hand full, {} draw(s) dropped",
                    self.state.players[seat].name,
                    count - drawn
                );
                return Ok(drawn);
            }
            let Some(card) = self.state.deck.draw_one() else {
                warn!("deck empty, {} draw(s) dropped", count - drawn);
                return Ok(drawn);
            };
            outcome.record_move(card.id, Zone::Deck, Zone::Hand);
            self.state.players[seat].receive(card)?;
        }
        Ok(count)
    }

    // === Turn rotation ===

    /// Pass the turn to the next unfinished seat in round-robin order, or
    /// end the game if every seat has finished.
    fn advance_turn(&mut self, outcome: &mut ActionOutcome) {
        self.state.turn += 1;
        let count = self.state.player_count();

        let mut seat = self.state.current;
        for _ in 0..count {
            seat = seat.next(count);
            if !self.state.players[seat].is_finished() {
                self.state.current = seat;
                outcome.next_player = Some(seat);
                return;
            }
        }

        let result = FinalResult::new(self.state.players.map(|_, p| p.score()));
        info!("game over after {} turns: {:?}", self.state.turn - 1, result.result);
        outcome.result = Some(result.clone());
        self.state.phase = GamePhase::Finished(result);
    }
}

impl RulesEngine for TurnController {
    fn config(&self) -> &RulesConfig {
        &self.state.config
    }

    fn current_player(&self) -> Option<PlayerId> {
        (!self.state.phase.is_finished()).then_some(self.state.current)
    }

    fn legal_actions(&self) -> Vec<Action> {
        let Some(seat) = self.current_player() else {
            return Vec::new();
        };
        let player = &self.state.players[seat];
        let mut actions = Vec::new();

        if player.workers_available() > 0 {
            actions.extend(
                self.state
                    .locations
                    .iter()
                    .filter(|l| l.is_open())
                    .map(|l| Action::PlaceWorker(l.id)),
            );
        } else {
            actions.push(Action::PrepareSeason);
        }

        if player.hand_has_room() {
            actions.extend(
                self.state
                    .market
                    .cards()
                    .iter()
                    .enumerate()
                    .filter(|(_, card)| player.can_afford(card))
                    .map(|(i, _)| Action::BuyFromMarket(i)),
            );
        }

        if player.city_has_room() {
            actions.extend((0..player.hand().len()).map(Action::PlayFromHand));
        }

        actions
    }

    fn submit(&mut self, action: Action) -> Result<ActionOutcome, GameError> {
        if self.state.phase.is_finished() {
            return Err(GameError::GameOver);
        }
        let seat = self.state.current;
        let mut outcome = ActionOutcome::new(seat, action, self.state.players[seat].resources);

        match action {
            Action::PlaceWorker(id) => self.place_worker(seat, id, &mut outcome),
            Action::BuyFromMarket(index) => self.buy_from_market(seat, index, &mut outcome),
            Action::PlayFromHand(index) => self.play_from_hand(seat, index, &mut outcome),
            Action::PrepareSeason => self.prepare_season(seat, &mut outcome),
        }
        .map_err(|err| {
            debug!("{} rejected: {}", action, err);
            err
        })?;

        outcome.resources_after = self.state.players[seat].resources;
        self.state
            .history
            .push(ActionRecord::new(seat, action, self.state.turn));
        self.advance_turn(&mut outcome);
        Ok(outcome)
    }

    fn result(&self) -> Option<&FinalResult> {
        self.state.phase.result()
    }
}
