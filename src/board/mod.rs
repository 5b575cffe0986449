//! The worker placement board.

pub mod location;

pub use location::{standard_locations, Gain, Location, LocationId};
