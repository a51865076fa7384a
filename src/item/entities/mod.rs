//! Concrete catalog kinds.
//!
//! Each kind is a plain serde struct with a flattened [`EntityMeta`] block and,
//! for child kinds, the id of its owner. The `catalog_item!` macro wires every
//! struct into the engine traits so the orderer and duplicator stay generic.

mod game;
mod genre;
mod movie;
mod music;
mod picture;
mod program;
mod show;

pub use game::{Cheat, CheatData, Game};
pub use genre::Genre;
pub use movie::{Medium, Movie};
pub use music::{Music, Song};
pub use picture::Picture;
pub use program::Program;
pub use show::{Episode, Season, Show};

use crate::item::core::{AuditStamp, EntityId, EntityKind, EntityMeta, Node, Ordered, Scope};
use crate::item::validation::{Validate, Violation};

/// A kind the facade can be instantiated for.
pub trait CatalogItem:
    Node
    + Validate
    + std::fmt::Debug
    + Send
    + Sync
    + Into<Entity>
    + TryFrom<Entity, Error = Entity>
    + 'static
{
    const KIND: EntityKind;

    fn meta(&self) -> &EntityMeta;

    fn meta_mut(&mut self) -> &mut EntityMeta;

    /// Owner id; always `None` for top-level kinds
    fn parent(&self) -> Option<EntityId>;

    /// Set the owner id; ignored by top-level kinds
    fn set_parent(&mut self, parent: Option<EntityId>);
}

macro_rules! catalog_item {
    ($ty:ident => $kind:ident) => {
        impl $crate::item::entities::CatalogItem for $ty {
            const KIND: $crate::item::core::EntityKind = $crate::item::core::EntityKind::$kind;

            fn meta(&self) -> &$crate::item::core::EntityMeta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut $crate::item::core::EntityMeta {
                &mut self.meta
            }

            fn parent(&self) -> Option<$crate::item::core::EntityId> {
                None
            }

            fn set_parent(&mut self, _parent: Option<$crate::item::core::EntityId>) {}
        }

        catalog_item!(@engine $ty => $kind);
    };
    ($ty:ident => $kind:ident, parent: $field:ident) => {
        impl $crate::item::entities::CatalogItem for $ty {
            const KIND: $crate::item::core::EntityKind = $crate::item::core::EntityKind::$kind;

            fn meta(&self) -> &$crate::item::core::EntityMeta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut $crate::item::core::EntityMeta {
                &mut self.meta
            }

            fn parent(&self) -> Option<$crate::item::core::EntityId> {
                self.$field
            }

            fn set_parent(&mut self, parent: Option<$crate::item::core::EntityId>) {
                self.$field = parent;
            }
        }

        catalog_item!(@engine $ty => $kind);
    };
    (@engine $ty:ident => $kind:ident) => {
        impl $crate::item::core::Ordered for $ty {
            fn id(&self) -> Option<$crate::item::core::EntityId> {
                self.meta.id
            }

            fn position(&self) -> u32 {
                self.meta.position
            }

            fn set_position(&mut self, position: u32) {
                self.meta.position = position;
            }

            fn touch(&mut self, stamp: &$crate::item::core::AuditStamp) {
                self.meta.audit.touch(stamp);
            }
        }

        impl $crate::item::core::Node for $ty {
            fn scope(&self) -> $crate::item::core::Scope {
                $crate::item::core::Scope {
                    kind: $crate::item::core::EntityKind::$kind,
                    parent: $crate::item::entities::CatalogItem::parent(self),
                }
            }

            fn assign_id(&mut self, id: $crate::item::core::EntityId) {
                self.meta.id = Some(id);
            }

            fn reparent(&mut self, parent: $crate::item::core::EntityId) {
                $crate::item::entities::CatalogItem::set_parent(self, Some(parent));
            }

            fn reset_audit(&mut self, stamp: &$crate::item::core::AuditStamp) {
                self.meta.audit = $crate::item::core::Audit::created(stamp);
            }
        }

        impl From<$ty> for $crate::item::entities::Entity {
            fn from(item: $ty) -> Self {
                $crate::item::entities::Entity::$kind(item)
            }
        }

        impl TryFrom<$crate::item::entities::Entity> for $ty {
            type Error = $crate::item::entities::Entity;

            fn try_from(entity: $crate::item::entities::Entity) -> Result<Self, Self::Error> {
                match entity {
                    $crate::item::entities::Entity::$kind(item) => Ok(item),
                    other => Err(other),
                }
            }
        }
    };
}

pub(crate) use catalog_item;

/// Any catalog record, tagged by kind in its JSON form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Entity {
    Movie(Movie),
    Medium(Medium),
    Show(Show),
    Season(Season),
    Episode(Episode),
    Game(Game),
    Cheat(Cheat),
    CheatData(CheatData),
    Music(Music),
    Song(Song),
    Program(Program),
    Picture(Picture),
    Genre(Genre),
}

macro_rules! dispatch {
    ($entity:expr, $item:ident => $body:expr) => {
        match $entity {
            Entity::Movie($item) => $body,
            Entity::Medium($item) => $body,
            Entity::Show($item) => $body,
            Entity::Season($item) => $body,
            Entity::Episode($item) => $body,
            Entity::Game($item) => $body,
            Entity::Cheat($item) => $body,
            Entity::CheatData($item) => $body,
            Entity::Music($item) => $body,
            Entity::Song($item) => $body,
            Entity::Program($item) => $body,
            Entity::Picture($item) => $body,
            Entity::Genre($item) => $body,
        }
    };
}

impl Entity {
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        dispatch!(self, item => kind_of(item))
    }

    #[must_use]
    pub fn meta(&self) -> &EntityMeta {
        dispatch!(self, item => item.meta())
    }

    pub fn meta_mut(&mut self) -> &mut EntityMeta {
        dispatch!(self, item => item.meta_mut())
    }

    #[must_use]
    pub fn parent(&self) -> Option<EntityId> {
        dispatch!(self, item => item.parent())
    }

    pub fn set_parent(&mut self, parent: Option<EntityId>) {
        dispatch!(self, item => item.set_parent(parent));
    }

    /// Field rules of the wrapped kind
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        dispatch!(self, item => item.violations())
    }

    /// Genre ids referenced by the record, empty for kinds without genres
    #[must_use]
    pub fn genre_refs(&self) -> &[EntityId] {
        match self {
            Entity::Movie(movie) => &movie.genres,
            Entity::Show(show) => &show.genres,
            _ => &[],
        }
    }

    /// Picture id referenced by the record, if any
    #[must_use]
    pub fn picture_ref(&self) -> Option<EntityId> {
        match self {
            Entity::Movie(movie) => movie.picture,
            Entity::Show(show) => show.picture,
            _ => None,
        }
    }
}

impl Entity {
    /// Drop genre and picture references to any of `removed`. Returns whether
    /// anything changed.
    pub fn drop_refs(&mut self, removed: &std::collections::HashSet<EntityId>) -> bool {
        let (genres, picture) = match self {
            Entity::Movie(movie) => (&mut movie.genres, &mut movie.picture),
            Entity::Show(show) => (&mut show.genres, &mut show.picture),
            _ => return false,
        };
        let before = genres.len();
        genres.retain(|genre| !removed.contains(genre));
        let mut changed = genres.len() != before;
        if picture.is_some_and(|id| removed.contains(&id)) {
            *picture = None;
            changed = true;
        }
        changed
    }
}

fn kind_of<T: CatalogItem>(_item: &T) -> EntityKind {
    T::KIND
}

impl Ordered for Entity {
    fn id(&self) -> Option<EntityId> {
        self.meta().id
    }

    fn position(&self) -> u32 {
        self.meta().position
    }

    fn set_position(&mut self, position: u32) {
        self.meta_mut().position = position;
    }

    fn touch(&mut self, stamp: &AuditStamp) {
        self.meta_mut().audit.touch(stamp);
    }
}

impl Node for Entity {
    fn scope(&self) -> Scope {
        Scope {
            kind: self.kind(),
            parent: self.parent(),
        }
    }

    fn assign_id(&mut self, id: EntityId) {
        self.meta_mut().id = Some(id);
    }

    fn reparent(&mut self, parent: EntityId) {
        self.set_parent(Some(parent));
    }

    fn reset_audit(&mut self, stamp: &AuditStamp) {
        self.meta_mut().audit = crate::item::core::Audit::created(stamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_json_is_tagged_and_flat() {
        let season = Season {
            meta: EntityMeta {
                id: Some(EntityId::new(5)),
                position: 1,
                ..EntityMeta::default()
            },
            show_id: Some(EntityId::new(2)),
            number: 1,
            ..Season::default()
        };
        let value = serde_json::to_value(Entity::from(season.clone())).unwrap();
        assert_eq!(value["kind"], "season");
        assert_eq!(value["id"], 5);
        assert_eq!(value["showId"], 2);
        assert_eq!(value["position"], 1);

        let back: Entity = serde_json::from_value(value).unwrap();
        assert_eq!(back, Entity::Season(season));
    }

    #[test]
    fn test_entity_scope_follows_parent() {
        let episode = Entity::from(Episode {
            season_id: Some(EntityId::new(9)),
            ..Episode::default()
        });
        assert_eq!(
            episode.scope(),
            Scope::child(EntityKind::Episode, EntityId::new(9))
        );

        let genre = Entity::from(Genre::default());
        assert_eq!(genre.scope(), Scope::root(EntityKind::Genre));
    }

    #[test]
    fn test_top_level_ignores_reparent() {
        let mut movie = Movie::default();
        movie.reparent(EntityId::new(3));
        assert_eq!(CatalogItem::parent(&movie), None);
        assert_eq!(movie.scope(), Scope::root(EntityKind::Movie));
    }

    #[test]
    fn test_child_scopes_need_an_id() {
        let mut show = Show::default();
        assert!(show.child_scopes().is_empty());
        show.assign_id(EntityId::new(4));
        assert_eq!(
            show.child_scopes(),
            vec![Scope::child(EntityKind::Season, EntityId::new(4))]
        );
    }

    #[test]
    fn test_try_from_wrong_kind_returns_entity() {
        let entity = Entity::from(Genre::default());
        let err = Movie::try_from(entity.clone()).unwrap_err();
        assert_eq!(err, entity);
    }

    #[test]
    fn test_drop_refs_strips_removed_ids() {
        let mut movie = Entity::from(Movie {
            genres: vec![EntityId::new(1), EntityId::new(2)],
            picture: Some(EntityId::new(3)),
            ..Movie::default()
        });
        let removed = [EntityId::new(2), EntityId::new(3)].into_iter().collect();
        assert!(movie.drop_refs(&removed));
        assert_eq!(movie.genre_refs(), &[EntityId::new(1)]);
        assert_eq!(movie.picture_ref(), None);
        assert!(!movie.drop_refs(&removed));

        let mut genre = Entity::from(Genre::default());
        assert!(!genre.drop_refs(&removed));
    }

    #[test]
    fn test_entity_kind_matches_variant() {
        assert_eq!(Entity::from(CheatData::default()).kind(), EntityKind::CheatData);
        assert_eq!(Entity::from(Picture::default()).kind(), EntityKind::Picture);
    }
}
