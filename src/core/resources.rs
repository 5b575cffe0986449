//! Resource kinds and fixed-size resource pools.
//!
//! The game has exactly four resources. `Resources` stores one count per
//! kind in a fixed array, so costs, benefits, trigger rewards and player
//! holdings all share one shape and every match over `Resource` is
//! exhaustive.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four resource kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Twig,
    Resin,
    Pebble,
    Berry,
}

impl Resource {
    /// All resource kinds in display order.
    pub const ALL: [Resource; 4] =
        [Resource::Twig, Resource::Resin, Resource::Pebble, Resource::Berry];

    /// Array slot for this resource.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Resource::Twig => 0,
            Resource::Resin => 1,
            Resource::Pebble => 2,
            Resource::Berry => 3,
        }
    }

    /// Lowercase name ("twig", "resin", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Twig => "twig",
            Resource::Resin => "resin",
            Resource::Pebble => "pebble",
            Resource::Berry => "berry",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A count for each resource kind.
///
/// Used for player holdings as well as card costs, production benefits
/// and trigger rewards. Counts are unsigned, so a pool can never go
/// negative; subtraction goes through [`Resources::checked_sub`].
///
/// ```
/// use meadow_engine::core::{Resource, Resources};
///
/// let cost = Resources::new().with(Resource::Twig, 2).with(Resource::Resin, 1);
/// let mut held = Resources::new().with(Resource::Twig, 3).with(Resource::Resin, 1);
///
/// assert!(held.covers(&cost));
/// held = held.checked_sub(&cost).unwrap();
/// assert_eq!(held[Resource::Twig], 1);
/// assert_eq!(held[Resource::Resin], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources([u32; 4]);

impl Resources {
    /// An empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; 4])
    }

    /// Set one resource amount (builder pattern).
    #[must_use]
    pub const fn with(mut self, resource: Resource, amount: u32) -> Self {
        self.0[resource.index()] = amount;
        self
    }

    /// Amount held of a resource.
    #[must_use]
    pub fn get(&self, resource: Resource) -> u32 {
        self.0[resource.index()]
    }

    /// True if every amount is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Sum of all amounts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Iterate over the non-zero entries.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        Resource::ALL
            .iter()
            .map(move |&r| (r, self.0[r.index()]))
            .filter(|&(_, n)| n > 0)
    }

    /// True if this pool holds at least `other` of every resource.
    #[must_use]
    pub fn covers(&self, other: &Resources) -> bool {
        Resource::ALL.iter().all(|&r| self.get(r) >= other.get(r))
    }

    /// The first resource this pool holds less of than `other`, with the
    /// amounts needed and held.
    #[must_use]
    pub fn first_shortfall(&self, other: &Resources) -> Option<(Resource, u32, u32)> {
        Resource::ALL
            .iter()
            .find(|&&r| self.get(r) < other.get(r))
            .map(|&r| (r, other.get(r), self.get(r)))
    }

    /// Add every amount in `other`.
    pub fn add(&mut self, other: &Resources) {
        for r in Resource::ALL {
            self.0[r.index()] += other.get(r);
        }
    }

    /// Subtract `other`, or `None` if any amount would go negative.
    #[must_use]
    pub fn checked_sub(&self, other: &Resources) -> Option<Resources> {
        let mut out = *self;
        for r in Resource::ALL {
            out.0[r.index()] = self.get(r).checked_sub(other.get(r))?;
        }
        Some(out)
    }

    /// Per-resource difference, clamped at zero.
    #[must_use]
    pub fn saturating_sub(&self, other: &Resources) -> Resources {
        let mut out = *self;
        for r in Resource::ALL {
            out.0[r.index()] = self.get(r).saturating_sub(other.get(r));
        }
        out
    }
}

impl Index<Resource> for Resources {
    type Output = u32;

    fn index(&self, resource: Resource) -> &Self::Output {
        &self.0[resource.index()]
    }
}

impl IndexMut<Resource> for Resources {
    fn index_mut(&mut self, resource: Resource) -> &mut Self::Output {
        &mut self.0[resource.index()]
    }
}

impl FromIterator<(Resource, u32)> for Resources {
    fn from_iter<I: IntoIterator<Item = (Resource, u32)>>(iter: I) -> Self {
        let mut out = Resources::new();
        for (r, n) in iter {
            out[r] += n;
        }
        out
    }
}

impl std::fmt::Display for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing");
        }
        let mut first = true;
        for (r, n) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", n, r)?;
            first = false;
        }
        Ok(())
    }
}
