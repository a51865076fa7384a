//! Core catalog domain types and traits.

pub mod error;
pub mod id;
pub mod kind;
pub mod metadata;
pub mod ordered;
pub mod scope;

pub use error::CatalogError;
pub use id::EntityId;
pub use kind::EntityKind;
pub use metadata::{Audit, AuditStamp, Clock, EntityMeta, FixedClock, SystemClock};
pub use ordered::{sibling_order, Node, Ordered, ScopeResolver};
pub use scope::Scope;
