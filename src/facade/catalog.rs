use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use super::result::{Event, OpResult};
use super::service::Facade;
use crate::item::core::{
    sibling_order, AuditStamp, CatalogError, Clock, EntityId, EntityKind, Node, Ordered, Scope,
    ScopeResolver, SystemClock,
};
use crate::item::entities::{
    CatalogItem, Cheat, CheatData, Entity, Episode, Game, Genre, Medium, Movie, Music, Picture,
    Program, Season, Show, Song,
};
use crate::item::operations::{renumber_sweep, ScopeIndex};
use crate::store::Repository;

/// Entry point of the catalog: owns the repository, the clock and the single
/// writer lock every mutating operation runs under.
pub struct Catalog {
    repository: Arc<dyn Repository>,
    clock: Arc<dyn Clock>,
    user: String,
    writer: Mutex<()>,
}

/// Entity counts per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub counts: BTreeMap<EntityKind, usize>,
    pub total: usize,
}

impl Catalog {
    pub fn new(repository: Arc<dyn Repository>, user: impl Into<String>) -> Self {
        Catalog {
            repository,
            clock: Arc::new(SystemClock),
            user: user.into(),
            writer: Mutex::new(()),
        }
    }

    /// Replace the wall clock, e.g. with a fixed one in tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Typed operations for one kind.
    #[must_use]
    pub fn facade<T: CatalogItem>(&self) -> Facade<'_, T> {
        Facade::new(self)
    }

    #[must_use]
    pub fn movies(&self) -> Facade<'_, Movie> {
        self.facade()
    }

    #[must_use]
    pub fn media(&self) -> Facade<'_, Medium> {
        self.facade()
    }

    #[must_use]
    pub fn shows(&self) -> Facade<'_, Show> {
        self.facade()
    }

    #[must_use]
    pub fn seasons(&self) -> Facade<'_, Season> {
        self.facade()
    }

    #[must_use]
    pub fn episodes(&self) -> Facade<'_, Episode> {
        self.facade()
    }

    #[must_use]
    pub fn games(&self) -> Facade<'_, Game> {
        self.facade()
    }

    #[must_use]
    pub fn cheats(&self) -> Facade<'_, Cheat> {
        self.facade()
    }

    #[must_use]
    pub fn cheat_data(&self) -> Facade<'_, CheatData> {
        self.facade()
    }

    #[must_use]
    pub fn music(&self) -> Facade<'_, Music> {
        self.facade()
    }

    #[must_use]
    pub fn songs(&self) -> Facade<'_, Song> {
        self.facade()
    }

    #[must_use]
    pub fn programs(&self) -> Facade<'_, Program> {
        self.facade()
    }

    #[must_use]
    pub fn pictures(&self) -> Facade<'_, Picture> {
        self.facade()
    }

    #[must_use]
    pub fn genres(&self) -> Facade<'_, Genre> {
        self.facade()
    }

    /// Renumber every scope in the catalog.
    pub async fn update_all_positions(&self) -> OpResult<()> {
        let _guard = self.write_lock().await;
        let result = self.renumber(None).await;
        let outcome = finish("update_all_positions", None, result);
        match outcome.data().copied() {
            Some(changed) => OpResult::ok(()).with_event(positions_event("CATALOG", changed)),
            None => outcome.map(|_| ()),
        }
    }

    /// Count stored entities per kind.
    pub async fn statistics(&self) -> OpResult<Statistics> {
        let result = self.count_entities().await;
        finish("statistics", None, result)
    }

    async fn count_entities(&self) -> Result<Statistics, CatalogError> {
        let all = self.repository.all().await?;
        let mut counts: BTreeMap<EntityKind, usize> =
            EntityKind::ALL.iter().map(|kind| (*kind, 0)).collect();
        for entity in &all {
            let count = counts.entry(entity.kind()).or_default();
            *count = count.saturating_add(1);
        }
        debug!(total = all.len(), "Computed statistics");
        Ok(Statistics {
            counts,
            total: all.len(),
        })
    }

    pub(super) fn repository(&self) -> &dyn Repository {
        self.repository.as_ref()
    }

    pub(super) fn stamp(&self) -> AuditStamp {
        AuditStamp::new(self.user.clone(), self.clock.now())
    }

    pub(super) async fn write_lock(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    /// Renumber the scopes of `kind`, or of every top-level kind, and
    /// everything beneath them. Returns how many positions changed.
    pub(super) async fn renumber(&self, kind: Option<EntityKind>) -> Result<usize, CatalogError> {
        let all = self.repository.all().await?;
        let roots: Vec<Scope> = match kind {
            Some(kind) if kind.is_top_level() => vec![Scope::root(kind)],
            Some(kind) => child_sweep_roots(&all, kind),
            None => EntityKind::TOP_LEVEL.iter().copied().map(Scope::root).collect(),
        };
        let index = ScopeIndex::new(all);
        let changed: Vec<Entity> = renumber_sweep(&roots, &index, &self.stamp());
        let count = changed.len();
        if count > 0 {
            self.repository.save(changed).await?;
        }
        info!(roots = roots.len(), changed = count, "Renumbered positions");
        Ok(count)
    }

    /// Remove `roots` with everything they own and drop references to any
    /// removed record. Surviving siblings keep their positions.
    pub(super) async fn remove_subtrees(&self, roots: &[Entity]) -> Result<usize, CatalogError> {
        let all = self.repository.all().await?;
        let index = ScopeIndex::new(all.iter().cloned());

        let mut removed: Vec<EntityId> = Vec::new();
        let mut pending: Vec<Entity> = roots.to_vec();
        while let Some(entity) = pending.pop() {
            if let Some(id) = entity.id() {
                removed.push(id);
            }
            for scope in entity.child_scopes() {
                pending.extend(index.siblings_of(&scope));
            }
        }

        let removed_set: HashSet<EntityId> = removed.iter().copied().collect();
        let stamp = self.stamp();
        let mut referencing = Vec::new();
        for mut entity in all {
            let survives = entity.id().is_some_and(|id| !removed_set.contains(&id));
            if survives && entity.drop_refs(&removed_set) {
                entity.touch(&stamp);
                referencing.push(entity);
            }
        }

        if !referencing.is_empty() {
            debug!(updated = referencing.len(), "Dropping references to removed records");
        }
        Ok(self.repository.apply(referencing, &removed).await?)
    }
}

/// Every existing scope of the child kind `kind`, ordered by the owning
/// parent's `(position, id)`. Scopes whose parent is missing come last.
fn child_sweep_roots(all: &[Entity], kind: EntityKind) -> Vec<Scope> {
    let parents: HashMap<EntityId, &Entity> = all
        .iter()
        .filter_map(|entity| entity.id().map(|id| (id, entity)))
        .collect();
    let mut scopes: Vec<Scope> = all
        .iter()
        .map(Node::scope)
        .filter(|scope| scope.kind == kind)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    scopes.sort_by(|a, b| {
        let owner_a = a.parent.and_then(|id| parents.get(&id));
        let owner_b = b.parent.and_then(|id| parents.get(&id));
        match (owner_a, owner_b) {
            (Some(x), Some(y)) => sibling_order(*x, *y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });
    scopes
}

/// Turn an operation result into an [`OpResult`], logging rejections.
pub(super) fn finish<R>(
    operation: &str,
    kind: Option<EntityKind>,
    result: Result<R, CatalogError>,
) -> OpResult<R> {
    if let Err(err) = &result {
        warn!(operation, kind = ?kind, error = %err, "Operation rejected");
    }
    result.into()
}

/// Build the info event reporting renumbered positions.
pub(super) fn positions_event(prefix: &str, changed: usize) -> Event {
    Event::info(
        format!("{prefix}_POSITIONS_UPDATED"),
        format!("{changed} positions changed"),
    )
}
