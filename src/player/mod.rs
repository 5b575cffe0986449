//! Player state: resources, hand, city, season and workers.

pub mod state;

pub use state::{Color, Payment, Player};
