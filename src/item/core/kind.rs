//! Entity kind discriminator and the ownership tree between kinds.

use std::fmt;

/// Every kind of entity stored in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Movie,
    Medium,
    Show,
    Season,
    Episode,
    Game,
    Cheat,
    CheatData,
    Music,
    Song,
    Program,
    Picture,
    Genre,
}

impl EntityKind {
    /// All kinds, top-level kinds first in catalog order.
    pub const ALL: [EntityKind; 13] = [
        EntityKind::Movie,
        EntityKind::Show,
        EntityKind::Game,
        EntityKind::Music,
        EntityKind::Program,
        EntityKind::Picture,
        EntityKind::Genre,
        EntityKind::Medium,
        EntityKind::Season,
        EntityKind::Episode,
        EntityKind::Cheat,
        EntityKind::CheatData,
        EntityKind::Song,
    ];

    /// Kinds that live in a single global scope.
    pub const TOP_LEVEL: [EntityKind; 7] = [
        EntityKind::Movie,
        EntityKind::Show,
        EntityKind::Game,
        EntityKind::Music,
        EntityKind::Program,
        EntityKind::Picture,
        EntityKind::Genre,
    ];

    /// The kind that owns entities of this kind, if any.
    #[must_use]
    pub const fn parent_kind(self) -> Option<EntityKind> {
        match self {
            EntityKind::Medium => Some(EntityKind::Movie),
            EntityKind::Season => Some(EntityKind::Show),
            EntityKind::Episode => Some(EntityKind::Season),
            EntityKind::Cheat => Some(EntityKind::Game),
            EntityKind::CheatData => Some(EntityKind::Cheat),
            EntityKind::Song => Some(EntityKind::Music),
            EntityKind::Movie
            | EntityKind::Show
            | EntityKind::Game
            | EntityKind::Music
            | EntityKind::Program
            | EntityKind::Picture
            | EntityKind::Genre => None,
        }
    }

    /// Kinds owned by entities of this kind, in the order their collections are walked.
    #[must_use]
    pub const fn child_kinds(self) -> &'static [EntityKind] {
        match self {
            EntityKind::Movie => &[EntityKind::Medium],
            EntityKind::Show => &[EntityKind::Season],
            EntityKind::Season => &[EntityKind::Episode],
            EntityKind::Game => &[EntityKind::Cheat],
            EntityKind::Cheat => &[EntityKind::CheatData],
            EntityKind::Music => &[EntityKind::Song],
            EntityKind::Medium
            | EntityKind::Episode
            | EntityKind::CheatData
            | EntityKind::Song
            | EntityKind::Program
            | EntityKind::Picture
            | EntityKind::Genre => &[],
        }
    }

    /// Whether this kind lives in the global scope.
    #[must_use]
    pub const fn is_top_level(self) -> bool {
        self.parent_kind().is_none()
    }

    /// Whether a parent may own at most one entity of this kind.
    ///
    /// A game has a single cheat sheet.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, EntityKind::Cheat)
    }

    /// Upper-case prefix used in event keys, e.g. `CHEAT_DATA`.
    #[must_use]
    pub const fn key_prefix(self) -> &'static str {
        match self {
            EntityKind::Movie => "MOVIE",
            EntityKind::Medium => "MEDIUM",
            EntityKind::Show => "SHOW",
            EntityKind::Season => "SEASON",
            EntityKind::Episode => "EPISODE",
            EntityKind::Game => "GAME",
            EntityKind::Cheat => "CHEAT",
            EntityKind::CheatData => "CHEAT_DATA",
            EntityKind::Music => "MUSIC",
            EntityKind::Song => "SONG",
            EntityKind::Program => "PROGRAM",
            EntityKind::Picture => "PICTURE",
            EntityKind::Genre => "GENRE",
        }
    }

    /// Lower-case name used by the CLI and in messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Movie => "movie",
            EntityKind::Medium => "medium",
            EntityKind::Show => "show",
            EntityKind::Season => "season",
            EntityKind::Episode => "episode",
            EntityKind::Game => "game",
            EntityKind::Cheat => "cheat",
            EntityKind::CheatData => "cheat-data",
            EntityKind::Music => "music",
            EntityKind::Song => "song",
            EntityKind::Program => "program",
            EntityKind::Picture => "picture",
            EntityKind::Genre => "genre",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "movie" | "movies" => Ok(EntityKind::Movie),
            "medium" | "media" => Ok(EntityKind::Medium),
            "show" | "shows" => Ok(EntityKind::Show),
            "season" | "seasons" => Ok(EntityKind::Season),
            "episode" | "episodes" => Ok(EntityKind::Episode),
            "game" | "games" => Ok(EntityKind::Game),
            "cheat" | "cheats" => Ok(EntityKind::Cheat),
            "cheat-data" | "cheatdata" => Ok(EntityKind::CheatData),
            "music" => Ok(EntityKind::Music),
            "song" | "songs" => Ok(EntityKind::Song),
            "program" | "programs" => Ok(EntityKind::Program),
            "picture" | "pictures" => Ok(EntityKind::Picture),
            "genre" | "genres" => Ok(EntityKind::Genre),
            _ => Err(format!("Unknown entity kind: {s}")),
        }
    }
}
