//! Card-to-card synergy.
//!
//! Two mechanisms link cards in a city:
//!
//! - **Free build**: a card with `link_req = X` costs nothing to buy while
//!   the buyer's city holds a card with `link = X`.
//! - **Passive triggers**: a passive card in the city rewards its owner
//!   whenever they play a card whose tag matches the trigger.
//!
//! Both are pure reads of the city. Applying rewards is up to
//! [`crate::player::Player`] and the turn controller.

pub mod resolver;

pub use resolver::{
    is_free_build, matching_triggers, potential_bonus_source, trigger_events, BonusEvent,
    BonusEvents,
};
