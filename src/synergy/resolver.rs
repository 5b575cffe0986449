//! Synergy lookups against a player's city.
//!
//! Nothing here is cached. The city grows during play, so every check
//! scans it fresh, always in city order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardDefinition, Tag, Trigger};
use crate::core::Resource;
use crate::player::Player;

/// A reward fired by a passive card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusEvent {
    /// `amount` of `resource`, already added to the player's pool.
    Resource {
        source: String,
        resource: Resource,
        amount: u32,
    },
    /// Cards the controller should draw into the player's hand.
    DrawCards { source: String, count: u32 },
}

impl BonusEvent {
    /// Name of the city card that fired.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            BonusEvent::Resource { source, .. } | BonusEvent::DrawCards { source, .. } => source,
        }
    }
}

/// Bonus events from one play. Usually zero to two.
pub type BonusEvents = SmallVec<[BonusEvent; 4]>;

/// True iff `card` requires a symbol that some card in the city provides.
#[must_use]
pub fn is_free_build(player: &Player, card: &CardDefinition) -> bool {
    let Some(req) = card.link_req.as_deref() else {
        return false;
    };
    player.city().iter().any(|built| built.link.as_deref() == Some(req))
}

/// Passive cards in the city whose trigger fires for `tag`, in city order.
pub fn matching_triggers(city: &[Card], tag: Tag) -> impl Iterator<Item = (&Card, &Trigger)> {
    city.iter().filter_map(move |card| {
        card.passive_trigger()
            .filter(|t| t.on_play_tag == tag)
            .map(|t| (card, t))
    })
}

/// Name of the first passive card that would fire if a `tag` card were
/// played now. Preview only.
#[must_use]
pub fn potential_bonus_source(player: &Player, tag: Tag) -> Option<&str> {
    matching_triggers(player.city(), tag)
        .next()
        .map(|(card, _)| card.name.as_str())
}

/// The events a trigger produces, resources first.
#[must_use]
pub fn trigger_events(source: &str, trigger: &Trigger) -> BonusEvents {
    let mut events: BonusEvents = trigger
        .gain_resources
        .iter()
        .map(|(resource, amount)| BonusEvent::Resource {
            source: source.to_string(),
            resource,
            amount,
        })
        .collect();
    if trigger.gain_cards > 0 {
        events.push(BonusEvent::DrawCards {
            source: source.to_string(),
            count: trigger.gain_cards,
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::core::{Resources, RulesConfig};

    fn player_with_city(catalog: &CardCatalog, names: &[&str]) -> Player {
        let mut player = Player::new("Tester", Default::default(), &RulesConfig::default());
        for name in names {
            player.build(catalog.instance(name).unwrap()).unwrap();
        }
        player
    }

    #[test]
    fn test_free_build_needs_matching_link() {
        let catalog = CardCatalog::standard();
        let husband = catalog.by_name("Husband").unwrap();
        let king = catalog.by_name("King").unwrap();

        let empty = player_with_city(&catalog, &[]);
        assert!(!is_free_build(&empty, husband));

        let farmer = player_with_city(&catalog, &["Farm"]);
        assert!(is_free_build(&farmer, husband));
        assert!(!is_free_build(&farmer, king));
    }

    #[test]
    fn test_no_link_req_is_never_free() {
        let catalog = CardCatalog::standard();
        let player = player_with_city(&catalog, &["Farm", "Castle", "Residence", "Shop"]);
        assert!(!is_free_build(&player, catalog.by_name("Historian").unwrap()));
    }

    #[test]
    fn test_potential_bonus_source_is_first_in_city_order() {
        let catalog = CardCatalog::standard();
        let player = player_with_city(&catalog, &["Farm", "Innkeeper", "Historian"]);

        assert_eq!(potential_bonus_source(&player, Tag::Critter), Some("Innkeeper"));
        assert_eq!(potential_bonus_source(&player, Tag::Construct), None);
        assert_eq!(potential_bonus_source(&player, Tag::Other), None);
    }

    #[test]
    fn test_trigger_events_order() {
        let trigger = Trigger::on(Tag::Construct)
            .gain_resources(Resources::new().with(Resource::Twig, 1).with(Resource::Resin, 1))
            .gain_cards(2);

        let events = trigger_events("Merchant", &trigger);
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            BonusEvent::Resource {
                source: "Merchant".into(),
                resource: Resource::Twig,
                amount: 1
            }
        );
        assert_eq!(
            events[2],
            BonusEvent::DrawCards {
                source: "Merchant".into(),
                count: 2
            }
        );
        assert!(events.iter().all(|e| e.source() == "Merchant"));
    }
}
