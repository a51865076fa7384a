//! Persistence of catalog entities.
//!
//! A [`Repository`] hands out whole-entity snapshots and accepts one batch of
//! upserts and removals per mutation. Each batch is applied atomically: either
//! all of it is visible afterwards or none of it is.

mod file;
mod memory;
mod snapshot;

pub use file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use snapshot::{CatalogSnapshot, CatalogState};

use async_trait::async_trait;
use thiserror::Error;

use crate::item::core::{EntityId, EntityKind, Scope};
use crate::item::entities::Entity;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} cannot be stored without an id")]
    MissingId { kind: EntityKind },

    #[error("{kind} {id} has a malformed scope ({scope})")]
    MalformedScope {
        kind: EntityKind,
        id: EntityId,
        scope: Scope,
    },
}

/// Storage backend used by the catalog facade.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Fetch one entity
    async fn get(&self, id: EntityId) -> Result<Option<Entity>, StoreError>;

    /// Every member of `scope`, sorted by `(position, id)`
    async fn siblings_of(&self, scope: &Scope) -> Result<Vec<Entity>, StoreError>;

    /// Every stored entity, in id order
    async fn all(&self) -> Result<Vec<Entity>, StoreError>;

    /// The id the next new entity should receive. Does not reserve it.
    async fn next_id(&self) -> Result<EntityId, StoreError>;

    /// Upsert `entities` and delete `removals` as a single unit. Unknown ids in
    /// `removals` are ignored. Returns how many entities were deleted.
    async fn apply(
        &self,
        entities: Vec<Entity>,
        removals: &[EntityId],
    ) -> Result<usize, StoreError>;

    /// Insert or replace a batch of entities that already carry ids.
    async fn save(&self, entities: Vec<Entity>) -> Result<(), StoreError> {
        self.apply(entities, &[]).await.map(|_| ())
    }

    /// Delete a batch of entities. Returns how many were removed.
    async fn remove(&self, ids: &[EntityId]) -> Result<usize, StoreError> {
        self.apply(Vec::new(), ids).await
    }
}
