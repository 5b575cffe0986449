//! A running game: setup, state, the turn controller and snapshots.

pub mod builder;
pub mod controller;
pub mod state;
pub mod view;

pub use builder::GameBuilder;
pub use controller::TurnController;
pub use state::{GamePhase, GameState};
pub use view::{GameView, LocationView, PlayerView};
