use super::CatalogError;
use crate::item::core::id::EntityId;
use crate::item::core::kind::EntityKind;
use crate::item::operations::order::OrderError;
use crate::item::validation::Violation;

impl CatalogError {
    /// Create a not found error
    #[must_use]
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        CatalogError::NotFound { kind, id }
    }
    /// Create a validation error
    #[must_use]
    pub fn validation(kind: EntityKind, violations: Vec<Violation>) -> Self {
        CatalogError::Validation { kind, violations }
    }
    /// Attach the entity a failed move was requested for
    #[must_use]
    pub fn from_order(kind: EntityKind, id: EntityId, err: OrderError) -> Self {
        match err {
            OrderError::NotMovable { direction } => CatalogError::NotMovable {
                kind,
                id,
                direction,
            },
        }
    }
    /// The kind the error is about, if any
    #[must_use]
    pub const fn kind(&self) -> Option<EntityKind> {
        match self {
            CatalogError::NotFound { kind, .. }
            | CatalogError::ParentNotFound { kind, .. }
            | CatalogError::WrongParentKind { kind, .. }
            | CatalogError::NotMovable { kind, .. }
            | CatalogError::NotDuplicable { kind, .. }
            | CatalogError::AlreadyExists { kind, .. }
            | CatalogError::IdRequired { kind }
            | CatalogError::IdNotAllowed { kind }
            | CatalogError::ParentRequired { kind }
            | CatalogError::NotTopLevel { kind }
            | CatalogError::NoParentKind { kind }
            | CatalogError::ReferenceNotFound { kind, .. }
            | CatalogError::Validation { kind, .. } => Some(*kind),
            CatalogError::KindMismatch { expected, .. } => Some(*expected),
            CatalogError::Store(_) => None,
        }
    }
    /// Upper-case error code, combined with the kind prefix into event keys
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "NOT_FOUND",
            CatalogError::ParentNotFound { .. } => "PARENT_NOT_FOUND",
            CatalogError::WrongParentKind { .. } => "WRONG_PARENT_KIND",
            CatalogError::NotMovable { .. } => "NOT_MOVABLE",
            CatalogError::NotDuplicable { .. } => "NOT_DUPLICABLE",
            CatalogError::AlreadyExists { .. } => "ALREADY_EXISTS",
            CatalogError::IdRequired { .. } => "ID_REQUIRED",
            CatalogError::IdNotAllowed { .. } => "ID_NOT_ALLOWED",
            CatalogError::ParentRequired { .. } => "PARENT_REQUIRED",
            CatalogError::NotTopLevel { .. } => "NOT_TOP_LEVEL",
            CatalogError::NoParentKind { .. } => "NO_PARENT_KIND",
            CatalogError::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
            CatalogError::KindMismatch { .. } => "KIND_MISMATCH",
            CatalogError::Validation { .. } => "INVALID",
            CatalogError::Store(_) => "STORE_ERROR",
        }
    }
}
