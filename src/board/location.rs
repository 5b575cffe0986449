//! Worker placement locations.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Resource, Resources};

/// Board location identifier (index into the board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u8);

impl LocationId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

/// What a worker collects at a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gain {
    /// Added straight to the player's pool.
    Resources(Resources),
    /// Drawn from the deck into hand, up to the hand cap.
    Cards(u32),
}

/// A worker placement spot.
///
/// An exclusive location holds at most one worker; the occupant keeps it
/// until their next season change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub gain: Gain,
    pub exclusive: bool,
    pub occupant: Option<PlayerId>,
}

impl Location {
    #[must_use]
    pub fn new(id: LocationId, name: impl Into<String>, gain: Gain, exclusive: bool) -> Self {
        Self {
            id,
            name: name.into(),
            gain,
            exclusive,
            occupant: None,
        }
    }

    /// True if a worker may be placed here right now.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.exclusive || self.occupant.is_none()
    }
}

/// The six standard locations.
#[must_use]
pub fn standard_locations() -> Vec<Location> {
    let grant = |r: Resource, n: u32| Gain::Resources(Resources::new().with(r, n));
    vec![
        Location::new(LocationId::new(0), "Riverbank", grant(Resource::Twig, 2), true),
        Location::new(LocationId::new(1), "Forest", grant(Resource::Twig, 3), true),
        Location::new(LocationId::new(2), "Resin Grove", grant(Resource::Resin, 2), true),
        Location::new(LocationId::new(3), "Pebble Field", grant(Resource::Pebble, 1), true),
        Location::new(LocationId::new(4), "Berry Bushes", grant(Resource::Berry, 1), true),
        Location::new(LocationId::new(5), "Clearing", Gain::Cards(2), false),
    ]
}
