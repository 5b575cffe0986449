//! Synergy tests.
//!
//! Free builds and passive triggers, exercised through full games with
//! stacked decks so every card position is known:
//! - A link symbol in the city makes the matching card free to buy
//! - Passive cards reward later plays with resources or draws
//! - Catalog lookups used by help surfaces

use meadow_engine::board::LocationId;
use meadow_engine::cards::{Card, CardCatalog, Tag};
use meadow_engine::core::{Action, GameError, PlayerId, Resource, Resources};
use meadow_engine::game::{GameBuilder, TurnController};
use meadow_engine::rules::RulesEngine;
use meadow_engine::synergy::{self, BonusEvent};
use meadow_engine::zones::Zone;

const CLEARING: Action = Action::PlaceWorker(LocationId::new(5));

/// Build a deck from names, bottom first. Seat 0 is dealt the last name.
fn stacked(names: &[&str]) -> TurnController {
    let catalog = CardCatalog::standard();
    let deck: Vec<Card> = names.iter().map(|n| catalog.instance(n).unwrap()).collect();
    GameBuilder::new().stacked_deck(deck).build()
}

fn hand_names(game: &TurnController, seat: PlayerId) -> Vec<String> {
    game.state().player(seat).hand().iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_link_makes_purchase_free() {
    let mut names = vec!["Shop"; 7];
    names.extend(["King", "Wife", "Wife", "Wife", "Wife", "Wife", "Castle"]);
    let mut game = stacked(&names);
    let p0 = PlayerId::new(0);

    assert_eq!(hand_names(&game, p0), vec!["Castle", "Wife", "Wife"]);
    assert_eq!(game.state().market().cards()[0].name, "King");
    assert_eq!(game.state().deck_remaining(), 0);

    // Six berries short and no crown yet.
    assert!(!game.legal_actions().contains(&Action::BuyFromMarket(0)));
    assert_eq!(game.submit(Action::BuyFromMarket(0)), Err(GameError::CannotAfford));

    game.submit(Action::PlayFromHand(0)).unwrap();
    game.submit(CLEARING).unwrap();

    let outcome = game.submit(Action::BuyFromMarket(0)).unwrap();
    assert!(outcome.paid_via_synergy);
    assert!(outcome.resources_spent().is_empty());
    assert_eq!(outcome.cards_moved.len(), 1);
    assert_eq!(outcome.cards_moved[0].from, Zone::Market);
    assert_eq!(outcome.cards_moved[0].to, Zone::Hand);
    assert_eq!(game.state().market().len(), 7);

    game.submit(CLEARING).unwrap();
    let king = hand_names(&game, p0).iter().position(|n| n == "King").unwrap();
    game.submit(Action::PlayFromHand(king)).unwrap();
    assert_eq!(game.state().score(p0), 9);
}

#[test]
fn test_link_only_helps_its_owner() {
    let mut names = vec!["Shop"; 7];
    names.extend(["King", "Wife", "Wife", "Wife", "Wife", "Wife", "Castle"]);
    let mut game = stacked(&names);

    game.submit(Action::PlayFromHand(0)).unwrap();
    assert_eq!(game.submit(Action::BuyFromMarket(0)), Err(GameError::CannotAfford));
    assert!(!game.legal_actions().contains(&Action::BuyFromMarket(0)));
}

#[test]
fn test_draw_trigger_on_critter_play() {
    let mut names = vec!["Shop"; 12];
    names.extend(["Castle", "Castle", "Castle", "Wife", "Castle", "Historian"]);
    let mut game = stacked(&names);
    let p0 = PlayerId::new(0);

    assert_eq!(hand_names(&game, p0), vec!["Historian", "Wife", "Castle"]);
    game.submit(Action::PlayFromHand(0)).unwrap();
    game.submit(CLEARING).unwrap();

    assert_eq!(game.potential_bonus_source(Tag::Critter), Some("Historian"));
    assert_eq!(game.potential_bonus_source(Tag::Construct), None);

    let deck_before = game.state().deck_remaining();
    let outcome = game.submit(Action::PlayFromHand(0)).unwrap();

    assert_eq!(
        outcome.bonuses,
        vec![BonusEvent::DrawCards {
            source: "Historian".to_string(),
            count: 1
        }]
    );
    assert_eq!(outcome.cards_to_hand(), 1);
    assert_eq!(game.state().deck_remaining(), deck_before - 1);
    assert_eq!(hand_names(&game, p0), vec!["Castle", "Shop"]);
    assert_eq!(game.state().score(p0), 3);
}

#[test]
fn test_draw_trigger_with_empty_deck_is_noop() {
    let mut names = vec!["Shop"; 8];
    names.extend(["Castle", "Castle", "Castle", "Wife", "Castle", "Historian"]);
    let mut game = stacked(&names);
    assert_eq!(game.state().deck_remaining(), 0);

    game.submit(Action::PlayFromHand(0)).unwrap();
    game.submit(CLEARING).unwrap();
    let outcome = game.submit(Action::PlayFromHand(0)).unwrap();

    assert_eq!(outcome.bonuses.len(), 1);
    assert_eq!(outcome.cards_to_hand(), 0);
    assert_eq!(hand_names(&game, PlayerId::new(0)), vec!["Castle"]);
}

#[test]
fn test_resource_trigger_on_construct_play() {
    let mut names = vec!["Wife"; 8];
    names.extend(["Wife", "Residence", "Wife", "Merchant", "Wife", "Shop"]);
    let mut game = stacked(&names);
    let p0 = PlayerId::new(0);
    assert_eq!(hand_names(&game, p0), vec!["Shop", "Merchant", "Residence"]);

    let shop = game.submit(Action::PlayFromHand(0)).unwrap();
    assert_eq!(shop.resources_gained(), Resources::new().with(Resource::Resin, 1));
    assert!(shop.bonuses.is_empty());
    game.submit(CLEARING).unwrap();

    // The merchant only fires for constructs played after it.
    let merchant = game.submit(Action::PlayFromHand(0)).unwrap();
    assert!(merchant.bonuses.is_empty());
    game.submit(CLEARING).unwrap();

    let residence = game.submit(Action::PlayFromHand(0)).unwrap();
    assert_eq!(residence.bonuses.len(), 2);
    assert!(residence.bonuses.iter().all(|b| b.source() == "Merchant"));
    assert_eq!(
        residence.resources_gained(),
        Resources::new().with(Resource::Twig, 1).with(Resource::Resin, 1)
    );
    assert_eq!(game.state().player(p0).resources[Resource::Resin], 2);
    assert_eq!(game.state().score(p0), 1 + 1 + 3);
}

#[test]
fn test_free_build_check_reads_current_city() {
    let catalog = CardCatalog::standard();
    let game = TurnController::new_game(31);
    let player = game.state().player(PlayerId::new(0));

    for name in catalog.find_by_link_req("FARMER") {
        let card = catalog.by_name(name).unwrap();
        assert!(!synergy::is_free_build(player, card));
    }
}

#[test]
fn test_catalog_link_lookups() {
    let catalog = CardCatalog::standard();

    for (symbol, provider, dependents) in [
        ("FARMER", "Farm", vec!["Husband", "Wife"]),
        ("MERCHANT", "Shop", vec!["Merchant"]),
        ("CROWN", "Castle", vec!["King"]),
        ("COURT", "Residence", vec!["Judge"]),
    ] {
        let providers = catalog.find_by_link(symbol);
        assert_eq!(providers.len(), 1);
        assert!(providers.contains(provider));

        let mut found: Vec<_> = catalog.find_by_link_req(symbol).into_iter().collect();
        found.sort_unstable();
        assert_eq!(found, dependents);
    }
}
