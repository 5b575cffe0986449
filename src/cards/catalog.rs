//! Card catalog.
//!
//! The `CardCatalog` holds every card definition for a game in authoring
//! order. It is built once, then shared read-only: the deck clones
//! `Arc` handles out of it and help surfaces query it by link symbol.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use super::definition::{CardDefinition, CardId, CardKind, Tag, Trigger};
use super::instance::Card;
use crate::core::{Resource, Resources};

/// Registry of card definitions.
///
/// ```
/// use meadow_engine::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.len(), 11);
///
/// let needs_farmer = catalog.find_by_link_req("FARMER");
/// assert!(needs_farmer.contains("Husband"));
/// assert!(needs_farmer.contains("Wife"));
/// assert!(catalog.find_by_link("NOBODY").is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Arc<CardDefinition>>,
    ids: FxHashSet<CardId>,
    by_link: FxHashMap<String, Vec<usize>>,
    by_link_req: FxHashMap<String, Vec<usize>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if !self.ids.insert(card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }

        let slot = self.cards.len();
        if let Some(symbol) = &card.link {
            self.by_link.entry(symbol.clone()).or_default().push(slot);
        }
        if let Some(symbol) = &card.link_req {
            self.by_link_req.entry(symbol.clone()).or_default().push(slot);
        }
        self.cards.push(Arc::new(card));
    }

    /// Builder form of [`CardCatalog::register`].
    #[must_use]
    pub fn with(mut self, card: CardDefinition) -> Self {
        self.register(card);
        self
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Arc<CardDefinition>> {
        self.cards.iter().find(|c| c.name == name)
    }

    /// A fresh copy of the named card.
    #[must_use]
    pub fn instance(&self, name: &str) -> Option<Card> {
        self.by_name(name).map(|def| Card::new(Arc::clone(def)))
    }

    /// All definitions in authoring order.
    #[must_use]
    pub fn all_definitions(&self) -> &[Arc<CardDefinition>] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Names of cards that provide `symbol`.
    #[must_use]
    pub fn find_by_link(&self, symbol: &str) -> FxHashSet<&str> {
        self.names_at(self.by_link.get(symbol))
    }

    /// Names of cards that `symbol` makes free to buy.
    #[must_use]
    pub fn find_by_link_req(&self, symbol: &str) -> FxHashSet<&str> {
        self.names_at(self.by_link_req.get(symbol))
    }

    fn names_at(&self, slots: Option<&Vec<usize>>) -> FxHashSet<&str> {
        slots
            .into_iter()
            .flatten()
            .map(|&slot| self.cards[slot].name.as_str())
            .collect()
    }

    /// The standard eleven-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        let res = |pairs: &[(Resource, u32)]| pairs.iter().copied().collect::<Resources>();
        use Resource::{Berry, Pebble, Resin, Twig};

        Self::new()
            .with(
                CardDefinition::new(CardId::new(0), "Farm", CardKind::Production, Tag::Construct)
                    .with_cost(res(&[(Twig, 2), (Resin, 1)]))
                    .with_points(1)
                    .with_benefit(res(&[(Berry, 1)]))
                    .with_link("FARMER")
                    .with_desc("Produces 1 berry"),
            )
            .with(
                CardDefinition::new(CardId::new(1), "Shop", CardKind::Production, Tag::Construct)
                    .with_cost(res(&[(Resin, 2)]))
                    .with_points(1)
                    .with_benefit(res(&[(Resin, 1)]))
                    .with_link("MERCHANT")
                    .with_desc("Produces 1 resin"),
            )
            .with(
                CardDefinition::new(
                    CardId::new(2),
                    "Castle",
                    CardKind::VictoryPoint,
                    Tag::Construct,
                )
                    .with_cost(res(&[(Twig, 2), (Resin, 3), (Pebble, 3)]))
                    .with_points(5)
                    .with_link("CROWN")
                    .with_desc("An epic stronghold"),
            )
            .with(
                CardDefinition::new(
                    CardId::new(3),
                    "Residence",
                    CardKind::VictoryPoint,
                    Tag::Construct,
                )
                    .with_cost(res(&[(Twig, 2), (Pebble, 1)]))
                    .with_points(3)
                    .with_link("COURT")
                    .with_desc("A stately home fit for a judge"),
            )
            .with(
                CardDefinition::new(CardId::new(4), "King", CardKind::VictoryPoint, Tag::Critter)
                    .with_cost(res(&[(Berry, 6)]))
                    .with_points(4)
                    .with_link_req("CROWN")
                    .with_desc("Rules from the castle"),
            )
            .with(
                CardDefinition::new(CardId::new(5), "Husband", CardKind::Production, Tag::Critter)
                    .with_cost(res(&[(Berry, 2)]))
                    .with_points(2)
                    .with_benefit(res(&[(Twig, 1)]))
                    .with_link_req("FARMER")
                    .with_desc("Produces 1 twig"),
            )
            .with(
                CardDefinition::new(CardId::new(6), "Wife", CardKind::VictoryPoint, Tag::Critter)
                    .with_cost(res(&[(Berry, 2)]))
                    .with_points(2)
                    .with_link_req("FARMER")
                    .with_desc("Keeps the farm running"),
            )
            .with(
                CardDefinition::new(CardId::new(7), "Judge", CardKind::Passive, Tag::Critter)
                    .with_cost(res(&[(Berry, 3)]))
                    .with_points(2)
                    .with_trigger(Trigger::on(Tag::Construct).gain_resources(res(&[(Pebble, 1)])))
                    .with_link_req("COURT")
                    .with_desc("Gain 1 pebble whenever you play a construct"),
            )
            .with(
                CardDefinition::new(CardId::new(8), "Historian", CardKind::Passive, Tag::Critter)
                    .with_cost(res(&[(Berry, 2)]))
                    .with_points(1)
                    .with_trigger(Trigger::on(Tag::Critter).gain_cards(1))
                    .with_desc("Draw 1 card whenever you play a critter"),
            )
            .with(
                CardDefinition::new(CardId::new(9), "Innkeeper", CardKind::Passive, Tag::Critter)
                    .with_cost(res(&[(Berry, 1)]))
                    .with_points(1)
                    .with_trigger(Trigger::on(Tag::Critter).gain_resources(res(&[(Berry, 1)])))
                    .with_desc("Gain 1 berry whenever you play a critter"),
            )
            .with(
                CardDefinition::new(CardId::new(10), "Merchant", CardKind::Passive, Tag::Critter)
                    .with_cost(res(&[(Berry, 2)]))
                    .with_points(1)
                    .with_trigger(
                        Trigger::on(Tag::Construct).gain_resources(res(&[(Twig, 1), (Resin, 1)])),
                    )
                    .with_link_req("MERCHANT")
                    .with_desc("Gain 1 twig and 1 resin whenever you play a construct"),
            )
    }
}
