//! The catalog state shared by both repositories and its on-disk form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::item::core::{sibling_order, EntityId, Node, Ordered, Scope};
use crate::item::entities::Entity;

/// Serialized form of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub next_id: EntityId,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        CatalogSnapshot {
            next_id: EntityId::new(1),
            entities: Vec::new(),
        }
    }
}

/// In-memory catalog: entities keyed by id plus the id counter.
#[derive(Debug, Clone)]
pub struct CatalogState {
    next_id: EntityId,
    entities: BTreeMap<EntityId, Entity>,
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::from(CatalogSnapshot::default())
    }
}

impl From<CatalogSnapshot> for CatalogState {
    /// Entities without an id are dropped. The counter is raised past the
    /// largest stored id if the snapshot lags behind.
    fn from(snapshot: CatalogSnapshot) -> Self {
        let mut state = CatalogState {
            next_id: snapshot.next_id,
            entities: BTreeMap::new(),
        };
        for entity in snapshot.entities {
            if let Some(id) = entity.id() {
                state.bump_past(id);
                state.entities.insert(id, entity);
            }
        }
        state
    }
}

impl CatalogState {
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            next_id: self.next_id,
            entities: self.entities.values().cloned().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<Entity> {
        self.entities.get(&id).cloned()
    }

    #[must_use]
    pub fn siblings_of(&self, scope: &Scope) -> Vec<Entity> {
        let mut members: Vec<Entity> = self
            .entities
            .values()
            .filter(|entity| entity.scope() == *scope)
            .cloned()
            .collect();
        members.sort_by(sibling_order);
        members
    }

    #[must_use]
    pub fn all(&self) -> Vec<Entity> {
        self.entities.values().cloned().collect()
    }

    #[must_use]
    pub const fn next_id(&self) -> EntityId {
        self.next_id
    }

    /// Upsert every entity or none of them.
    pub fn save(&mut self, entities: Vec<Entity>) -> Result<(), StoreError> {
        self.apply(entities, &[]).map(|_| ())
    }

    pub fn remove(&mut self, ids: &[EntityId]) -> usize {
        let mut removed = 0usize;
        for id in ids {
            if self.entities.remove(id).is_some() {
                removed = removed.saturating_add(1);
            }
        }
        removed
    }

    /// Upsert `entities`, then delete `removals`. The batch is checked up front,
    /// so a rejected batch leaves the state untouched.
    pub fn apply(
        &mut self,
        entities: Vec<Entity>,
        removals: &[EntityId],
    ) -> Result<usize, StoreError> {
        for entity in &entities {
            let Some(id) = entity.id() else {
                return Err(StoreError::MissingId {
                    kind: entity.kind(),
                });
            };
            let scope = entity.scope();
            if !scope.is_well_formed() {
                return Err(StoreError::MalformedScope {
                    kind: entity.kind(),
                    id,
                    scope,
                });
            }
        }
        for entity in entities {
            if let Some(id) = entity.id() {
                self.bump_past(id);
                self.entities.insert(id, entity);
            }
        }
        Ok(self.remove(removals))
    }

    fn bump_past(&mut self, id: EntityId) {
        if id >= self.next_id {
            self.next_id = id.next();
        }
    }
}
