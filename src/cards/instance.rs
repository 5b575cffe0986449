//! Card instances - physical copies of a definition.
//!
//! The deck holds several copies of every definition. A `Card` is a
//! cheap shared handle to its definition and carries no state of its
//! own, so moving it between deck, market, hand and city is a move of
//! one pointer.

use std::ops::Deref;
use std::sync::Arc;

use super::definition::CardDefinition;

/// One copy of a card.
///
/// Derefs to its [`CardDefinition`]. Two copies of the same definition
/// compare equal.
#[derive(Clone, Debug)]
pub struct Card(Arc<CardDefinition>);

impl Card {
    /// Wrap a shared definition.
    #[must_use]
    pub fn new(definition: Arc<CardDefinition>) -> Self {
        Self(definition)
    }

    /// The shared definition.
    #[must_use]
    pub fn definition(&self) -> &Arc<CardDefinition> {
        &self.0
    }
}

impl Deref for Card {
    type Target = CardDefinition;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Card {}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.name)
    }
}
