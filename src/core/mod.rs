//! Core engine types: seats, resources, actions, errors, RNG, configuration.
//!
//! These are the building blocks every other module shares. None of them
//! know about cards or seasons.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod resources;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::RulesConfig;
pub use error::{GameError, InvariantError};
pub use player::{PlayerId, PlayerMap};
pub use resources::{Resource, Resources};
pub use rng::GameRng;
