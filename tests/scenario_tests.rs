//! End-to-end game scenarios.
//!
//! These drive a game only through the public submission and query
//! surface:
//! - Setup counts for a seeded game
//! - Rejected purchases and contested locations
//! - Full hands and full cities refusing more cards
//! - Running a game to completion and scoring it

use meadow_engine::board::LocationId;
use meadow_engine::cards::{CardCatalog, CardDefinition, CardId, CardKind, Tag};
use meadow_engine::core::{Action, GameError, PlayerId, Resource, Resources, RulesConfig};
use meadow_engine::game::{GameBuilder, TurnController};
use meadow_engine::rules::{GameResult, RulesEngine};

const FOREST: LocationId = LocationId::new(1);
const CLEARING: LocationId = LocationId::new(5);

/// Place a worker at the clearing, or change season when out of workers.
fn idle(game: &TurnController) -> Action {
    let seat = game.state().current_player();
    if game.state().player(seat).workers_available() > 0 {
        Action::PlaceWorker(CLEARING)
    } else {
        Action::PrepareSeason
    }
}

fn play_out(game: &mut TurnController) {
    let mut guard = 0;
    while !game.is_terminal() {
        let action = idle(game);
        game.submit(action).expect("idle action should be legal");
        guard += 1;
        assert!(guard < 200, "game did not terminate");
    }
}

#[test]
fn test_new_game_setup_counts() {
    let game = TurnController::new_game(1);
    let state = game.state();

    assert_eq!(state.player_count(), 2);
    for seat in PlayerId::all(2) {
        let player = state.player(seat);
        assert_eq!(player.hand().len(), 3);
        assert!(player.city().is_empty());
        assert!(player.resources.is_empty());
        assert_eq!(player.workers_available(), 2);
    }
    assert_eq!(state.market().len(), 8);
    assert_eq!(state.deck_remaining(), 44 - 6 - 8);
    assert_eq!(state.current_player(), PlayerId::new(0));
    assert_eq!(state.seed(), 1);
}

#[test]
fn test_same_seed_same_game() {
    let a = TurnController::new_game(99);
    let b = TurnController::new_game(99);
    assert_eq!(a.view(), b.view());

    let c = TurnController::new_game(100);
    assert_ne!(a.view().market, c.view().market);
}

#[test]
fn test_unaffordable_purchase_changes_nothing() {
    let hut = CardDefinition::new(CardId::new(0), "Hut", CardKind::VictoryPoint, Tag::Construct)
        .with_cost(Resources::new().with(Resource::Twig, 2))
        .with_points(1);
    let catalog = CardCatalog::new().with(hut);
    let deck = (0..14).map(|_| catalog.instance("Hut").unwrap()).collect();

    let mut game = GameBuilder::new().catalog(catalog).stacked_deck(deck).build();
    let before = game.view();
    assert!(game.state().player(PlayerId::new(0)).resources.is_empty());

    assert_eq!(game.submit(Action::BuyFromMarket(0)), Err(GameError::CannotAfford));
    assert_eq!(game.view(), before);
    assert_eq!(game.state().market().len(), 8);
    assert!(game.state().history().is_empty());
}

#[test]
fn test_full_hand_and_full_city_refuse_cards() {
    let catalog = CardCatalog::standard();
    let deck = (0..14).map(|_| catalog.instance("Wife").unwrap()).collect();
    let mut game = GameBuilder::new()
        .config(RulesConfig::default().with_hand_limit(3).with_city_limit(1))
        .stacked_deck(deck)
        .build();
    let p0 = PlayerId::new(0);
    assert_eq!(game.state().player(p0).hand().len(), 3);
    assert_eq!(game.state().market().len(), 8);

    let before = game.view();
    assert_eq!(game.submit(Action::BuyFromMarket(0)), Err(GameError::HandFull));
    assert_eq!(game.view(), before);
    assert!(!game.legal_actions().contains(&Action::BuyFromMarket(0)));

    game.submit(Action::PlayFromHand(0)).unwrap();
    game.submit(Action::PlayFromHand(0)).unwrap();
    assert_eq!(game.state().player(p0).city().len(), 1);
    assert_eq!(game.state().current_player(), p0);

    let before = game.view();
    let history = game.state().history().len();
    assert_eq!(game.submit(Action::PlayFromHand(0)), Err(GameError::CityFull));
    assert_eq!(game.view(), before);
    assert_eq!(game.state().history().len(), history);
    assert!(!game
        .legal_actions()
        .iter()
        .any(|a| matches!(a, Action::PlayFromHand(_))));
}

#[test]
fn test_exclusive_location_is_contested() {
    let mut game = TurnController::new_game(2);

    game.submit(Action::PlaceWorker(FOREST)).unwrap();
    let before = game.view();
    assert_eq!(
        game.submit(Action::PlaceWorker(FOREST)),
        Err(GameError::LocationOccupied(FOREST))
    );
    assert_eq!(game.view(), before);
    assert!(!game.legal_actions().contains(&Action::PlaceWorker(FOREST)));

    // The forest stays taken until seat 0 changes season.
    game.submit(Action::PlaceWorker(CLEARING)).unwrap();
    game.submit(Action::PlaceWorker(CLEARING)).unwrap();
    game.submit(Action::PlaceWorker(CLEARING)).unwrap();
    assert!(game.state().location(FOREST).unwrap().occupant.is_some());
    game.submit(Action::PrepareSeason).unwrap();

    assert!(game.state().location(FOREST).unwrap().occupant.is_none());
    assert_eq!(game.state().current_player(), PlayerId::new(1));
}

#[test]
fn test_finished_game_is_terminal_and_draws_on_equal_scores() {
    let mut game = TurnController::new_game(3);
    play_out(&mut game);

    for seat in PlayerId::all(2) {
        assert!(game.state().player(seat).is_finished());
        assert_eq!(game.state().score(seat), 0);
    }
    let result = game.result().unwrap();
    assert_eq!(result.result, GameResult::Draw);
    assert_eq!(result.scores[PlayerId::new(0)], 0);

    assert_eq!(game.submit(Action::PrepareSeason), Err(GameError::GameOver));
    assert_eq!(
        game.submit_as(PlayerId::new(1), Action::PlaceWorker(CLEARING)),
        Err(GameError::GameOver)
    );
    assert!(game.current_player().is_none());
    assert!(game.view().current_player.is_none());
}

#[test]
fn test_higher_score_wins() {
    let mut game = TurnController::new_game(4);

    let outcome = game.submit(Action::PlayFromHand(0)).unwrap();
    let points = game.state().score(PlayerId::new(0));
    assert!(points > 0);
    assert!(outcome.result.is_none());

    play_out(&mut game);

    let result = game.result().unwrap();
    assert_eq!(result.result, GameResult::Winner(PlayerId::new(0)));
    assert!(result.result.is_winner(PlayerId::new(0)));
    assert_eq!(result.scores[PlayerId::new(0)], points);
    assert_eq!(result.scores[PlayerId::new(1)], 0);
}

#[test]
fn test_last_action_reports_result() {
    let mut game = TurnController::new_game(5);
    let mut last = None;
    while !game.is_terminal() {
        let action = idle(&game);
        last = Some(game.submit(action).unwrap());
    }

    let last = last.unwrap();
    assert_eq!(last.action, Action::PrepareSeason);
    assert!(last.next_player.is_none());
    assert_eq!(last.result.as_ref(), game.result());
}

#[test]
fn test_history_records_accepted_actions_only() {
    let mut game = TurnController::new_game(6);
    game.submit(Action::PlaceWorker(FOREST)).unwrap();
    let _ = game.submit(Action::PlaceWorker(FOREST));
    game.submit(Action::PlaceWorker(CLEARING)).unwrap();

    let history = game.state().history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, PlayerId::new(0));
    assert_eq!(history[0].action, Action::PlaceWorker(FOREST));
    assert_eq!(history[0].turn, 1);
    assert_eq!(history[1].player, PlayerId::new(1));
    assert_eq!(history[1].turn, 2);
    assert_eq!(game.state().turn(), 3);
}
