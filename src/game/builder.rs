//! Game setup.

use std::sync::Arc;

use log::{info, warn};

use super::controller::TurnController;
use super::state::{GamePhase, GameState};
use crate::board::standard_locations;
use crate::cards::{Card, CardCatalog};
use crate::core::{GameRng, PlayerId, PlayerMap, RulesConfig};
use crate::player::{Color, Player};
use crate::zones::{Deck, Market};

/// Builder for a new game.
///
/// ```
/// use meadow_engine::game::GameBuilder;
/// use meadow_engine::core::RulesConfig;
///
/// let game = GameBuilder::new()
///     .config(RulesConfig::default().with_player_count(3))
///     .seed(7)
///     .build();
///
/// assert_eq!(game.state().player_count(), 3);
/// assert_eq!(game.state().market().len(), 8);
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: RulesConfig,
    seed: Option<u64>,
    catalog: Option<CardCatalog>,
    stacked_deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        assert!((2..=4).contains(&config.player_count), "Player count must be 2-4");
        self.config = config;
        self
    }

    /// Shuffle with a fixed seed. Without one, the seed comes from the
    /// OS entropy source.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom catalog instead of the standard one.
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use exactly these cards as the deck, unshuffled. The last card is
    /// dealt first.
    pub fn stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.stacked_deck = Some(cards);
        self
    }

    /// Build the game: seat the players, shuffle, deal starting hands
    /// round-robin, then fill the market.
    pub fn build(self) -> TurnController {
        let config = self.config;
        let catalog = Arc::new(self.catalog.unwrap_or_else(CardCatalog::standard));
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut deck = match self.stacked_deck {
            Some(cards) => Deck::from_cards(cards),
            None => Deck::build(&catalog, config.deck_copies, &mut rng),
        };

        let mut players = PlayerMap::new(config.player_count, |p| {
            Player::new(format!("Player {}", p.index() + 1), Color::SEATS[p.index()], &config)
        });

        deal_opening_hands(&mut players, &mut deck, config.starting_hand);

        let mut market = Market::new();
        market.refill(&mut deck, config.market_size);

        info!(
            "new game: {} players, seed {}, {} cards in deck, {} in market",
            config.player_count,
            rng.seed(),
            deck.len(),
            market.len()
        );

        TurnController::from_state(GameState {
            config,
            catalog,
            players,
            current: PlayerId::new(0),
            deck,
            market,
            locations: standard_locations(),
            phase: GamePhase::InProgress,
            turn: 1,
            history: Vec::new(),
            seed: rng.seed(),
        })
    }
}

/// Deal `rounds` cards to each seat, one at a time starting from seat 0.
///
/// A seat whose hand is full is skipped without drawing, so the deck keeps
/// every card nobody had room for.
fn deal_opening_hands(players: &mut PlayerMap<Player>, deck: &mut Deck, rounds: usize) {
    for _ in 0..rounds {
        for seat in PlayerId::all(players.player_count()) {
            let player = &mut players[seat];
            if !player.hand_has_room() {
                continue;
            }
            let Some(card) = deck.draw_one() else {
                return;
            };
            if let Err(err) = player.receive(card) {
                warn!("dealing to {}: {}", player.name, err);
            }
        }
    }
}
