//! Common test utilities

#![allow(dead_code)] // Not every test binary uses every builder

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use catalog_manager::{
    Catalog, CatalogItem, CatalogSnapshot, Cheat, CheatData, Entity, EntityId, Episode,
    FixedClock, Game, Genre, InMemoryRepository, Movie, Repository, Scope, Season, Show,
    StoreError,
};
use chrono::{DateTime, TimeZone, Utc};

pub const USER: &str = "tester";

/// The instant every test catalog reports as "now"
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Catalog over an empty in-memory store with a frozen clock
pub fn catalog() -> Catalog {
    catalog_with(InMemoryRepository::new())
}

pub fn catalog_with(repository: InMemoryRepository) -> Catalog {
    catalog_on(Arc::new(repository))
}

pub fn catalog_on(repository: Arc<dyn Repository>) -> Catalog {
    Catalog::new(repository, USER).with_clock(Arc::new(FixedClock(fixed_time())))
}

/// In-memory store whose writes can be switched to fail with a disk error.
///
/// Reads always go through. `reject_removals` fails only batches that delete
/// something; `reject_writes` fails every batch.
#[derive(Debug, Clone, Default)]
pub struct FlakyRepository {
    inner: InMemoryRepository,
    reject_writes: Arc<AtomicBool>,
    reject_removals: Arc<AtomicBool>,
}

impl FlakyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        FlakyRepository {
            inner: InMemoryRepository::with_snapshot(snapshot),
            ..Self::default()
        }
    }

    pub fn reject_writes(&self) {
        self.reject_writes.store(true, Ordering::SeqCst);
    }

    pub fn reject_removals(&self) {
        self.reject_removals.store(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.inner.snapshot().await
    }
}

#[async_trait]
impl Repository for FlakyRepository {
    async fn get(&self, id: EntityId) -> Result<Option<Entity>, StoreError> {
        self.inner.get(id).await
    }

    async fn siblings_of(&self, scope: &Scope) -> Result<Vec<Entity>, StoreError> {
        self.inner.siblings_of(scope).await
    }

    async fn all(&self) -> Result<Vec<Entity>, StoreError> {
        self.inner.all().await
    }

    async fn next_id(&self) -> Result<EntityId, StoreError> {
        self.inner.next_id().await
    }

    async fn apply(
        &self,
        entities: Vec<Entity>,
        removals: &[EntityId],
    ) -> Result<usize, StoreError> {
        let rejected = self.reject_writes.load(Ordering::SeqCst)
            || (self.reject_removals.load(Ordering::SeqCst) && !removals.is_empty());
        if rejected {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        self.inner.apply(entities, removals).await
    }
}

/// Add an entity and return it as stored
pub async fn add<T: CatalogItem>(catalog: &Catalog, entity: T) -> T {
    let result = catalog.facade::<T>().add(entity).await;
    assert!(result.is_ok(), "add failed: {:?}", result.events());
    result.into_data().expect("added entity")
}

pub fn id_of<T: CatalogItem>(entity: &T) -> EntityId {
    entity.meta().id.expect("stored entity has an id")
}

pub fn genre(name: &str) -> Genre {
    Genre {
        name: name.to_string(),
        ..Genre::default()
    }
}

pub fn movie(name: &str) -> Movie {
    Movie {
        czech_name: name.to_string(),
        original_name: name.to_string(),
        year: 2001,
        ..Movie::default()
    }
}

pub fn show(name: &str) -> Show {
    Show {
        czech_name: name.to_string(),
        original_name: name.to_string(),
        ..Show::default()
    }
}

pub fn season(show: EntityId, number: u32) -> Season {
    Season {
        show_id: Some(show),
        number,
        start_year: 2010,
        end_year: 2011,
        ..Season::default()
    }
}

pub fn episode(season: EntityId, number: u32) -> Episode {
    Episode {
        season_id: Some(season),
        number,
        name: format!("Episode {number}"),
        ..Episode::default()
    }
}

pub fn game(name: &str) -> Game {
    Game {
        name: name.to_string(),
        media_count: 1,
        ..Game::default()
    }
}

pub fn cheat(game: EntityId) -> Cheat {
    Cheat {
        game_id: Some(game),
        ..Cheat::default()
    }
}

pub fn cheat_data(cheat: EntityId, action: &str) -> CheatData {
    CheatData {
        cheat_id: Some(cheat),
        action: action.to_string(),
        description: format!("{action} description"),
        ..CheatData::default()
    }
}

/// Names of listed genres in position order
pub async fn genre_names(catalog: &Catalog) -> Vec<String> {
    catalog
        .genres()
        .list()
        .await
        .into_data()
        .expect("list genres")
        .into_iter()
        .map(|genre| genre.name)
        .collect()
}
