//! Card definitions - static card data.
//!
//! A `CardDefinition` is fixed in shape: every field the rules consult
//! is a typed field, and the optional ones are `Option`s decided when the
//! catalog is built. Only `Production` cards carry a meaningful
//! `benefit`, and only `Passive` cards carry a meaningful `trigger`.

use serde::{Deserialize, Serialize};

use crate::core::Resources;

/// Unique identifier for a card definition.
///
/// Identifies the card type ("Farm"), not one copy of it in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does once it is in a city.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Yields `benefit` when played and at every production step.
    Production,
    /// Worth points, nothing else.
    VictoryPoint,
    /// Fires `trigger` when a card with the matching tag is played later.
    Passive,
}

/// Card family, matched by passive triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Construct,
    Critter,
    Other,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Tag::Construct => "construct",
            Tag::Critter => "critter",
            Tag::Other => "other",
        })
    }
}

/// Passive reward fired when the owner plays a card with `on_play_tag`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Tag of the played card that fires this trigger.
    pub on_play_tag: Tag,

    /// Resources granted immediately.
    pub gain_resources: Resources,

    /// Cards the owner draws from the deck.
    pub gain_cards: u32,
}

impl Trigger {
    /// A trigger on `tag` with no reward yet.
    #[must_use]
    pub fn on(tag: Tag) -> Self {
        Self {
            on_play_tag: tag,
            gain_resources: Resources::new(),
            gain_cards: 0,
        }
    }

    /// Grant resources when fired.
    #[must_use]
    pub fn gain_resources(mut self, resources: Resources) -> Self {
        self.gain_resources = resources;
        self
    }

    /// Draw cards when fired.
    #[must_use]
    pub fn gain_cards(mut self, count: u32) -> Self {
        self.gain_cards = count;
        self
    }
}

/// Static card definition.
///
/// ```
/// use meadow_engine::cards::{CardDefinition, CardId, CardKind, Tag};
/// use meadow_engine::core::{Resource, Resources};
///
/// let farm = CardDefinition::new(CardId::new(0), "Farm", CardKind::Production, Tag::Construct)
///     .with_cost(Resources::new().with(Resource::Twig, 2).with(Resource::Resin, 1))
///     .with_points(1)
///     .with_benefit(Resources::new().with(Resource::Berry, 1))
///     .with_link("FARMER");
///
/// assert_eq!(farm.cost[Resource::Twig], 2);
/// assert_eq!(farm.link.as_deref(), Some("FARMER"));
/// assert!(farm.link_req.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Rules text for help surfaces.
    pub desc: String,

    pub kind: CardKind,

    pub tag: Tag,

    /// Price paid when buying from the market.
    pub cost: Resources,

    /// Victory points while in a city.
    pub points: u32,

    /// Production yield. Empty for non-production cards.
    pub benefit: Resources,

    /// Passive reward. `None` for non-passive cards.
    pub trigger: Option<Trigger>,

    /// Synergy symbol this card provides.
    pub link: Option<String>,

    /// Synergy symbol that makes this card free to buy.
    pub link_req: Option<String>,
}

impl CardDefinition {
    /// Create a definition with no cost, points or effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind, tag: Tag) -> Self {
        Self {
            id,
            name: name.into(),
            desc: String::new(),
            kind,
            tag,
            cost: Resources::new(),
            points: 0,
            benefit: Resources::new(),
            trigger: None,
            link: None,
            link_req: None,
        }
    }

    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: Resources) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_benefit(mut self, benefit: Resources) -> Self {
        self.benefit = benefit;
        self
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn with_link(mut self, symbol: impl Into<String>) -> Self {
        self.link = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_link_req(mut self, symbol: impl Into<String>) -> Self {
        self.link_req = Some(symbol.into());
        self
    }

    /// True for production cards.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.kind == CardKind::Production
    }

    /// The trigger, if this is a passive card that has one.
    #[must_use]
    pub fn passive_trigger(&self) -> Option<&Trigger> {
        match self.kind {
            CardKind::Passive => self.trigger.as_ref(),
            _ => None,
        }
    }
}
