use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{CatalogSnapshot, CatalogState, Repository, StoreError};
use crate::item::core::{EntityId, Scope};
use crate::item::entities::Entity;

/// Volatile repository, mainly for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        InMemoryRepository {
            state: Arc::new(Mutex::new(CatalogState::from(snapshot))),
        }
    }

    /// Current contents.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.state.lock().await.snapshot()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn get(&self, id: EntityId) -> Result<Option<Entity>, StoreError> {
        Ok(self.state.lock().await.get(id))
    }

    async fn siblings_of(&self, scope: &Scope) -> Result<Vec<Entity>, StoreError> {
        Ok(self.state.lock().await.siblings_of(scope))
    }

    async fn all(&self) -> Result<Vec<Entity>, StoreError> {
        Ok(self.state.lock().await.all())
    }

    async fn next_id(&self) -> Result<EntityId, StoreError> {
        Ok(self.state.lock().await.next_id())
    }

    async fn apply(
        &self,
        entities: Vec<Entity>,
        removals: &[EntityId],
    ) -> Result<usize, StoreError> {
        self.state.lock().await.apply(entities, removals)
    }
}
