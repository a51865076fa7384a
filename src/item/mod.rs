//! Catalog item domain: entity kinds, their ordering engine and field rules.

pub mod core;
pub mod entities;
pub mod operations;
pub mod validation;

pub use core::error::CatalogError;
pub use core::{EntityId, EntityKind, Scope};
pub use entities::{CatalogItem, Entity};
