//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Cost, points, benefit, trigger and synergy symbols
//! - `Card`: One physical copy, a shared handle to its definition
//! - `CardCatalog`: Every definition, with link-symbol lookups

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardKind, Tag, Trigger};
pub use instance::Card;
