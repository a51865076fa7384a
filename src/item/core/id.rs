//! Entity identifiers.

use std::fmt;
use std::str::FromStr;

/// Integer identity of a catalog entity.
///
/// Assigned exactly once, when the entity is first persisted, and never changed
/// afterwards. Entities that have not been stored yet carry `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw integer id
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        EntityId(raw)
    }

    /// Get the raw integer value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, saturating at `u64::MAX`
    #[must_use]
    pub const fn next(self) -> Self {
        EntityId(self.0.saturating_add(1))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        EntityId(raw)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(EntityId)
    }
}
