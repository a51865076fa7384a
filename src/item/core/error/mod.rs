//! Unified error type for catalog operations.
mod impls;
use thiserror::Error;

use crate::item::core::id::EntityId;
use crate::item::core::kind::EntityKind;
use crate::item::operations::order::Direction;
use crate::item::validation::Violation;
use crate::store::StoreError;

/// Every way a facade operation can be rejected.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },
    #[error("parent {parent} of {kind} not found")]
    ParentNotFound { kind: EntityKind, parent: EntityId },
    #[error("{kind} must belong to a {expected}, but {parent} is a {found}")]
    WrongParentKind {
        kind: EntityKind,
        parent: EntityId,
        expected: EntityKind,
        found: EntityKind,
    },
    #[error("{kind} {id} cannot move {direction}")]
    NotMovable {
        kind: EntityKind,
        id: EntityId,
        direction: Direction,
    },
    #[error("{kind} {id} cannot be duplicated")]
    NotDuplicable { kind: EntityKind, id: EntityId },
    #[error("{parent} already has a {kind}")]
    AlreadyExists { kind: EntityKind, parent: EntityId },
    #[error("{kind} id is required")]
    IdRequired { kind: EntityKind },
    #[error("{kind} id must not be set")]
    IdNotAllowed { kind: EntityKind },
    #[error("{kind} requires a parent")]
    ParentRequired { kind: EntityKind },
    #[error("{kind} is not a top-level kind")]
    NotTopLevel { kind: EntityKind },
    #[error("{kind} is a top-level kind and has no parent")]
    NoParentKind { kind: EntityKind },
    #[error("{kind} references {expected} {id}, which does not exist")]
    ReferenceNotFound {
        kind: EntityKind,
        id: EntityId,
        expected: EntityKind,
    },
    #[error("expected {expected}, got {found}")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },
    #[error("{kind} is invalid: {}", join_violations(.violations))]
    Validation {
        kind: EntityKind,
        violations: Vec<Violation>,
    },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::validation::Rule;

    #[test]
    fn test_display_messages() {
        let err = CatalogError::NotMovable {
            kind: EntityKind::Season,
            id: EntityId::new(3),
            direction: Direction::Up,
        };
        assert_eq!(err.to_string(), "season 3 cannot move up");

        let err = CatalogError::AlreadyExists {
            kind: EntityKind::Cheat,
            parent: EntityId::new(8),
        };
        assert_eq!(err.to_string(), "8 already has a cheat");
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = CatalogError::Validation {
            kind: EntityKind::Movie,
            violations: vec![
                Violation::new("czech_name", Rule::Empty),
                Violation::new("original_name", Rule::Empty),
            ],
        };
        assert_eq!(
            err.to_string(),
            "movie is invalid: czech_name must not be empty, original_name must not be empty"
        );
    }

    #[test]
    fn test_codes() {
        let err = CatalogError::NotFound {
            kind: EntityKind::Episode,
            id: EntityId::new(1),
        };
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.kind(), Some(EntityKind::Episode));

        let err = CatalogError::from(StoreError::Io(std::io::Error::other("disk")));
        assert_eq!(err.code(), "STORE_ERROR");
        assert_eq!(err.kind(), None);
    }
}
