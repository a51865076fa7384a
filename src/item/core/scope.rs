//! Sibling scopes.

use std::fmt;

use super::id::EntityId;
use super::kind::EntityKind;

/// The ordering context shared by a set of siblings.
///
/// Top-level kinds have one global scope (`parent == None`). Child kinds have one
/// scope per parent instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Scope {
    pub kind: EntityKind,
    pub parent: Option<EntityId>,
}

impl Scope {
    /// The global scope of a top-level kind.
    #[must_use]
    pub const fn root(kind: EntityKind) -> Self {
        Scope { kind, parent: None }
    }

    /// The scope of `kind` children under one parent.
    #[must_use]
    pub const fn child(kind: EntityKind, parent: EntityId) -> Self {
        Scope {
            kind,
            parent: Some(parent),
        }
    }

    /// Whether this scope's shape matches its kind (root kinds without a parent,
    /// child kinds with one).
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.kind.is_top_level() == self.parent.is_none()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent {
            Some(parent) => write!(f, "{} under {parent}", self.kind),
            None => write!(f, "all {}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_well_formed() {
        assert!(Scope::root(EntityKind::Movie).is_well_formed());
        assert!(Scope::child(EntityKind::Season, EntityId::new(1)).is_well_formed());
        assert!(!Scope::root(EntityKind::Season).is_well_formed());
        assert!(!Scope::child(EntityKind::Genre, EntityId::new(1)).is_well_formed());
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(Scope::root(EntityKind::Genre).to_string(), "all genre");
        assert_eq!(
            Scope::child(EntityKind::Episode, EntityId::new(4)).to_string(),
            "episode under 4"
        );
    }
}
