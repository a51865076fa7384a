use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{CatalogSnapshot, CatalogState, Repository, StoreError};
use crate::item::core::{EntityId, Scope};
use crate::item::entities::Entity;
use crate::utils::atomic_write;

/// Repository persisted as one pretty-printed JSON document.
///
/// The whole catalog is kept in memory. Every mutation is applied to a copy,
/// written to disk through a temp-file rename and only then made visible, so a
/// failed write leaves both the file and the in-memory state untouched.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    state: Mutex<CatalogState>,
}

impl JsonFileRepository {
    /// Open the catalog at `path`, starting empty if the file does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = match tokio::fs::read_to_string(&path).await {
            Ok(content) => {
                let snapshot: CatalogSnapshot = serde_json::from_str(&content)?;
                info!(
                    path = %path.display(),
                    entities = snapshot.entities.len(),
                    "Loaded catalog"
                );
                CatalogState::from(snapshot)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Catalog file missing, starting empty");
                CatalogState::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(JsonFileRepository {
            path,
            state: Mutex::new(state),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, state: &CatalogState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(&state.snapshot())?;
        atomic_write(&self.path, &content).await?;
        Ok(())
    }
}

#[async_trait]
impl Repository for JsonFileRepository {
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
        let mut guard = self.state.lock().await;
        let mut next = guard.clone();
        let upserts = entities.len();
        let removed = next.apply(entities, removals)?;
        if upserts > 0 || removed > 0 {
            self.persist(&next).await?;
            *guard = next;
            debug!(upserts, removed, "Persisted catalog batch");
        }
        Ok(removed)
    }
}
