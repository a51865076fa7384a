// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod cli;
pub mod config;
pub mod facade;
pub mod item;
pub mod logging;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, CatalogConfig, ConfigError};
pub use facade::{Catalog, Event, Facade, OpResult, Severity, Statistics, Status, ToEvents};
pub use item::core::{Audit, AuditStamp, Clock, EntityMeta, FixedClock, SystemClock};
pub use item::entities::{
    Cheat, CheatData, Episode, Game, Genre, Medium, Movie, Music, Picture, Program, Season, Show,
    Song,
};
pub use item::operations::{Direction, OrderError};
pub use item::{CatalogError, CatalogItem, Entity, EntityId, EntityKind, Scope};
pub use store::{
    CatalogSnapshot, InMemoryRepository, JsonFileRepository, Repository, StoreError,
};
