//! Typed facade operations.
//!
//! Every operation follows the same unit of work: take the writer lock (for
//! mutations), validate the request, fetch the scope it touches, run the engine
//! and persist the result in one batch. Nothing is written when a step fails.

use std::marker::PhantomData;

use tracing::{debug, info};

use super::catalog::{finish, positions_event, Catalog};
use super::result::{Event, OpResult};
use crate::item::core::{
    Audit, CatalogError, EntityId, EntityKind, Node, Ordered, Scope, ScopeResolver,
};
use crate::item::entities::{CatalogItem, Entity};
use crate::item::operations::{self, duplicate, next_position, ScopeIndex, Swap};
use crate::item::validation::Validate;

/// Operations on one entity kind.
pub struct Facade<'a, T> {
    catalog: &'a Catalog,
    kind: PhantomData<fn() -> T>,
}

impl<'a, T: CatalogItem> Facade<'a, T> {
    pub(super) fn new(catalog: &'a Catalog) -> Self {
        Facade {
            catalog,
            kind: PhantomData,
        }
    }
}

impl<T: CatalogItem> Facade<'_, T> {
    /// Fetch one entity by id.
    pub async fn get(&self, id: EntityId) -> OpResult<T> {
        debug!(kind = %T::KIND, %id, "get");
        finish("get", Some(T::KIND), self.load(id).await)
    }

    /// Store a new entity at the end of its scope and return it as stored.
    pub async fn add(&self, entity: T) -> OpResult<T> {
        let _guard = self.catalog.write_lock().await;
        finish("add", Some(T::KIND), self.try_add(entity).await)
    }

    /// Persist field changes. Identity, owner, position and creation audit are
    /// kept from the stored record.
    pub async fn update(&self, entity: T) -> OpResult<()> {
        let _guard = self.catalog.write_lock().await;
        finish("update", Some(T::KIND), self.try_update(entity).await)
    }

    /// Delete an entity and everything it owns. Remaining siblings keep their
    /// positions; gaps are closed only by [`Self::update_positions`].
    pub async fn remove(&self, id: EntityId) -> OpResult<()> {
        let _guard = self.catalog.write_lock().await;
        finish("remove", Some(T::KIND), self.try_remove(id).await)
    }

    /// Deep-copy an entity and append the copy to the end of its scope.
    pub async fn duplicate(&self, id: EntityId) -> OpResult<()> {
        let _guard = self.catalog.write_lock().await;
        let result = self.try_duplicate(id).await;
        match result {
            Ok(copy) => OpResult::ok(()).with_event(Event::info(
                format!("{}_DUPLICATED", T::KIND.key_prefix()),
                format!("{} {id} duplicated as {copy}", T::KIND),
            )),
            Err(err) => finish("duplicate", Some(T::KIND), Err(err)),
        }
    }

    /// Swap an entity with its predecessor.
    pub async fn move_up(&self, id: EntityId) -> OpResult<()> {
        let _guard = self.catalog.write_lock().await;
        let result = self.try_move(id, operations::Direction::Up).await;
        finish("move_up", Some(T::KIND), result)
    }

    /// Swap an entity with its successor.
    pub async fn move_down(&self, id: EntityId) -> OpResult<()> {
        let _guard = self.catalog.write_lock().await;
        let result = self.try_move(id, operations::Direction::Down).await;
        finish("move_down", Some(T::KIND), result)
    }

    /// Renumber every scope of this kind and every scope beneath them.
    pub async fn update_positions(&self) -> OpResult<()> {
        let _guard = self.catalog.write_lock().await;
        match self.catalog.renumber(Some(T::KIND)).await {
            Ok(changed) => {
                OpResult::ok(()).with_event(positions_event(T::KIND.key_prefix(), changed))
            }
            Err(err) => finish("update_positions", Some(T::KIND), Err(err)),
        }
    }

    /// Children of one parent, sorted by position.
    pub async fn find(&self, parent: EntityId) -> OpResult<Vec<T>> {
        debug!(kind = %T::KIND, %parent, "find");
        finish("find", Some(T::KIND), self.try_find(parent).await)
    }

    /// All entities of a top-level kind, sorted by position.
    pub async fn list(&self) -> OpResult<Vec<T>> {
        debug!(kind = %T::KIND, "list");
        finish("list", Some(T::KIND), self.try_list().await)
    }

    /// Remove every entity of a top-level kind together with its descendants.
    pub async fn clear(&self) -> OpResult<()> {
        let _guard = self.catalog.write_lock().await;
        finish("clear", Some(T::KIND), self.try_clear().await)
    }

    async fn load(&self, id: EntityId) -> Result<T, CatalogError> {
        let entity = self.catalog.repository().get(id).await?;
        entity
            .and_then(|entity| T::try_from(entity).ok())
            .ok_or_else(|| CatalogError::not_found(T::KIND, id))
    }

    async fn scope_members(&self, scope: &Scope) -> Result<Vec<T>, CatalogError> {
        let members = self.catalog.repository().siblings_of(scope).await?;
        Ok(members
            .into_iter()
            .filter_map(|entity| T::try_from(entity).ok())
            .collect())
    }

    fn check_fields(entity: &T) -> Result<(), CatalogError> {
        entity
            .validate()
            .map_err(|violations| CatalogError::validation(T::KIND, violations))
    }

    /// The owner named by `entity` must exist and be of the owning kind.
    async fn check_parent(&self, entity: &T) -> Result<(), CatalogError> {
        let Some(expected) = T::KIND.parent_kind() else {
            return Ok(());
        };
        let parent = entity
            .parent()
            .ok_or(CatalogError::ParentRequired { kind: T::KIND })?;
        let stored = self
            .catalog
            .repository()
            .get(parent)
            .await?
            .ok_or(CatalogError::ParentNotFound {
                kind: T::KIND,
                parent,
            })?;
        if stored.kind() != expected {
            return Err(CatalogError::WrongParentKind {
                kind: T::KIND,
                parent,
                expected,
                found: stored.kind(),
            });
        }
        Ok(())
    }

    /// Genre and picture references must point at stored records of that kind.
    async fn check_references(&self, entity: &T) -> Result<(), CatalogError> {
        let entity: Entity = entity.clone().into();
        let genres = entity.genre_refs().iter().map(|id| (*id, EntityKind::Genre));
        let picture = entity.picture_ref().map(|id| (id, EntityKind::Picture));
        for (id, expected) in genres.chain(picture) {
            let stored = self.catalog.repository().get(id).await?;
            if stored.as_ref().map(Entity::kind) != Some(expected) {
                return Err(CatalogError::ReferenceNotFound {
                    kind: T::KIND,
                    id,
                    expected,
                });
            }
        }
        Ok(())
    }

    async fn try_add(&self, mut entity: T) -> Result<T, CatalogError> {
        if entity.id().is_some() {
            return Err(CatalogError::IdNotAllowed { kind: T::KIND });
        }
        Self::check_fields(&entity)?;
        if T::KIND.is_top_level() {
            entity.set_parent(None);
        }
        self.check_parent(&entity).await?;
        self.check_references(&entity).await?;

        let scope = entity.scope();
        let siblings = self.catalog.repository().siblings_of(&scope).await?;
        if T::KIND.is_exclusive() && !siblings.is_empty() {
            if let Some(parent) = scope.parent {
                return Err(CatalogError::AlreadyExists {
                    kind: T::KIND,
                    parent,
                });
            }
        }

        let stamp = self.catalog.stamp();
        let id = self.catalog.repository().next_id().await?;
        entity.assign_id(id);
        entity.set_position(next_position(&siblings));
        entity.meta_mut().audit = Audit::created(&stamp);

        self.catalog
            .repository()
            .save(vec![entity.clone().into()])
            .await?;
        info!(kind = %T::KIND, %id, position = entity.position(), "Added");
        Ok(entity)
    }

    async fn try_update(&self, mut entity: T) -> Result<(), CatalogError> {
        let id = entity
            .id()
            .ok_or(CatalogError::IdRequired { kind: T::KIND })?;
        Self::check_fields(&entity)?;
        let stored = self.load(id).await?;
        self.check_references(&entity).await?;

        entity.set_parent(stored.parent());
        entity.set_position(stored.position());
        entity.meta_mut().audit = stored.meta().audit.clone();
        entity.touch(&self.catalog.stamp());

        self.catalog.repository().save(vec![entity.into()]).await?;
        info!(kind = %T::KIND, %id, "Updated");
        Ok(())
    }

    async fn try_remove(&self, id: EntityId) -> Result<(), CatalogError> {
        let entity: Entity = self.load(id).await?.into();
        let removed = self.catalog.remove_subtrees(&[entity]).await?;
        info!(kind = %T::KIND, %id, removed, "Removed");
        Ok(())
    }

    async fn try_duplicate(&self, id: EntityId) -> Result<EntityId, CatalogError> {
        let source: Entity = self.load(id).await?.into();
        let index = ScopeIndex::new(self.catalog.repository().all().await?);

        let scope = source.scope();
        if scope.kind.is_exclusive() && index.count(&scope) > 0 {
            return Err(CatalogError::NotDuplicable { kind: T::KIND, id });
        }

        let mut next = self.catalog.repository().next_id().await?;
        let graph = duplicate(
            &source,
            |child_scope| index.siblings_of(child_scope),
            |target| index.next_position(target),
            || {
                let id = next;
                next = next.next();
                id
            },
            &self.catalog.stamp(),
        );
        let copy = graph
            .root()
            .and_then(Ordered::id)
            .ok_or(CatalogError::NotDuplicable { kind: T::KIND, id })?;
        let copied = graph.len();
        self.catalog.repository().save(graph.into_entities()).await?;
        info!(kind = %T::KIND, %id, %copy, copied, "Duplicated");
        Ok(copy)
    }

    async fn try_move(
        &self,
        id: EntityId,
        direction: operations::Direction,
    ) -> Result<(), CatalogError> {
        let entity = self.load(id).await?;
        let siblings = self.scope_members(&entity.scope()).await?;
        let stamp = self.catalog.stamp();
        let swapped = match direction {
            operations::Direction::Up => operations::move_up(&entity, &siblings, &stamp),
            operations::Direction::Down => operations::move_down(&entity, &siblings, &stamp),
        };
        let Swap { moved, neighbor } =
            swapped.map_err(|err| CatalogError::from_order(T::KIND, id, err))?;
        info!(
            kind = %T::KIND,
            %id,
            %direction,
            position = moved.position(),
            "Moved"
        );
        self.catalog
            .repository()
            .save(vec![moved.into(), neighbor.into()])
            .await?;
        Ok(())
    }

    async fn try_find(&self, parent: EntityId) -> Result<Vec<T>, CatalogError> {
        let Some(expected) = T::KIND.parent_kind() else {
            return Err(CatalogError::NoParentKind { kind: T::KIND });
        };
        let stored = self
            .catalog
            .repository()
            .get(parent)
            .await?
            .ok_or(CatalogError::ParentNotFound {
                kind: T::KIND,
                parent,
            })?;
        if stored.kind() != expected {
            return Err(CatalogError::WrongParentKind {
                kind: T::KIND,
                parent,
                expected,
                found: stored.kind(),
            });
        }
        self.scope_members(&Scope::child(T::KIND, parent)).await
    }

    async fn try_list(&self) -> Result<Vec<T>, CatalogError> {
        if !T::KIND.is_top_level() {
            return Err(CatalogError::NotTopLevel { kind: T::KIND });
        }
        self.scope_members(&Scope::root(T::KIND)).await
    }

    async fn try_clear(&self) -> Result<(), CatalogError> {
        if !T::KIND.is_top_level() {
            return Err(CatalogError::NotTopLevel { kind: T::KIND });
        }
        let roots = self
            .catalog
            .repository()
            .siblings_of(&Scope::root(T::KIND))
            .await?;
        let removed = self.catalog.remove_subtrees(&roots).await?;
        info!(kind = %T::KIND, removed, "Cleared");
        Ok(())
    }
}
